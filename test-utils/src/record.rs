//! [`BenchmarkRecord`] construction for tests.
use mmreport_types::BenchmarkRecord;

/// Create a record with the given configuration and speedups.
///
/// Times are derived from a fixed sequential time of `1000us`
/// so they stay consistent with the speedups.
///
/// ```rust
/// # use mmreport_test_utils::record::record;
/// let r = record(100, 2, 16, 1.67, 1.54);
/// assert_eq!(r.block_size, 16);
/// assert_eq!(r.threaded_time_us, 598);
/// ```
pub fn record(
    matrix_size: u32,
    thread_count: u32,
    block_size: u32,
    threaded_speedup: f64,
    async_speedup: f64,
) -> BenchmarkRecord {
    const SEQUENTIAL: u64 = 1000;

    BenchmarkRecord {
        matrix_size,
        thread_count,
        block_size,
        sequential_time_us: SEQUENTIAL,
        threaded_time_us: time_for(SEQUENTIAL, threaded_speedup),
        async_time_us: time_for(SEQUENTIAL, async_speedup),
        threaded_speedup,
        async_speedup,
    }
}

/// Format `record` as one CSV line in the benchmark file schema.
///
/// ```rust
/// # use mmreport_test_utils::record::{record, to_csv_line};
/// assert_eq!(
///     to_csv_line(&record(100, 2, 32, 2.0, 1.92)),
///     "100x100,2,32,1000,500,520,2,1.92",
/// );
/// ```
pub fn to_csv_line(r: &BenchmarkRecord) -> String {
    format!(
        "{m}x{m},{},{},{},{},{},{},{}",
        r.thread_count,
        r.block_size,
        r.sequential_time_us,
        r.threaded_time_us,
        r.async_time_us,
        r.threaded_speedup,
        r.async_speedup,
        m = r.matrix_size,
    )
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    reason = "test data only"
)]
fn time_for(sequential: u64, speedup: f64) -> u64 {
    (sequential as f64 / speedup) as u64
}
