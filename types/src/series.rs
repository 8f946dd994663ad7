//! The [`Series`] type.
use strum::{Display, VariantArray};

use crate::BenchmarkRecord;

/// A parallelization strategy measured by every [`BenchmarkRecord`].
///
/// ```rust
/// # use mmreport_types::Series;
/// assert_eq!(Series::Threaded.to_string(), "std::thread");
/// assert_eq!(Series::Async.to_string(), "std::async");
/// ```
#[derive(
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Copy,
    Clone,
    Hash,
    Display,
    VariantArray,
)]
pub enum Series {
    /// One `std::thread` per worker.
    #[strum(to_string = "std::thread")]
    Threaded,
    /// One `std::async` task per worker.
    #[strum(to_string = "std::async")]
    Async,
}

impl Series {
    /// The speedup of this series in `record`.
    #[inline]
    pub const fn speedup(self, record: &BenchmarkRecord) -> f64 {
        match self {
            Self::Threaded => record.threaded_speedup,
            Self::Async => record.async_speedup,
        }
    }

    /// The run time of this series in `record`, in microseconds.
    #[inline]
    pub const fn time_us(self, record: &BenchmarkRecord) -> u64 {
        match self {
            Self::Threaded => record.threaded_time_us,
            Self::Async => record.async_time_us,
        }
    }

    /// A short lowercase name, used in legends.
    ///
    /// ```rust
    /// # use mmreport_types::Series;
    /// assert_eq!(Series::Threaded.short_name(), "threads");
    /// assert_eq!(Series::Async.short_name(), "async");
    /// ```
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::Threaded => "threads",
            Self::Async => "async",
        }
    }
}
