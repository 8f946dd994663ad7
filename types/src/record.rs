//! The [`BenchmarkRecord`] type.

/// One row of a matrix-multiplication benchmark.
///
/// Every field is required; a row missing any of them is never turned into a record.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BenchmarkRecord {
    /// Side length of the (square) matrices.
    pub matrix_size: u32,
    /// Number of parallel workers used.
    pub thread_count: u32,
    /// Tiling granularity, a power of two by convention.
    pub block_size: u32,
    /// Wall-clock time of the sequential run.
    pub sequential_time_us: u64,
    /// Wall-clock time of the `std::thread` run.
    pub threaded_time_us: u64,
    /// Wall-clock time of the `std::async` run.
    pub async_time_us: u64,
    /// `sequential / threaded`, as reported by the benchmark.
    pub threaded_speedup: f64,
    /// `sequential / async`, as reported by the benchmark.
    pub async_speedup: f64,
}
