//! The [`Field`] type.
use strum::{Display, EnumCount, VariantArray};

/// A column of a benchmark results file.
///
/// Variants are declared in column order, so the discriminant
/// is the zero-based column index.
///
/// ```rust
/// # use mmreport_types::Field;
/// assert_eq!(Field::Matrix.column(), 0);
/// assert_eq!(Field::AsyncSpeedup.column(), 7);
/// assert_eq!(Field::ThreadedTime.to_string(), "threaded_time");
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
    EnumCount,
    VariantArray,
)]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum Field {
    /// `"<N>x<N>"`, the matrix dimensions.
    Matrix,
    /// Number of worker threads.
    Threads,
    /// Tiling block size.
    BlockSize,
    /// Sequential run time in microseconds.
    SequentialTime,
    /// `std::thread` run time in microseconds.
    ThreadedTime,
    /// `std::async` run time in microseconds.
    AsyncTime,
    /// `std::thread` speedup over the sequential run.
    ThreadedSpeedup,
    /// `std::async` speedup over the sequential run.
    AsyncSpeedup,
}

impl Field {
    /// The zero-based column index of this field.
    #[inline]
    pub const fn column(self) -> usize {
        self as usize
    }
}

//---------------------------------------------------------------------------------------------------- Tests
#[cfg(test)]
mod tests {
    use strum::VariantArray;

    use super::*;

    #[test]
    fn columns_are_contiguous() {
        assert_eq!(Field::VARIANTS.len(), Field::COUNT);

        for (i, field) in Field::VARIANTS.iter().enumerate() {
            assert_eq!(field.column(), i);
        }
    }
}
