//! Testing data.
//!
//! Raw data is found in `data/`.

//---------------------------------------------------------------------------------------------------- Block size report
/// A block-size sweep: three (matrix, threads) configurations,
/// 13 data rows, comment and blank lines in between.
///
/// | Configuration  | Rows | Best `std::thread` block | Best `std::async` block |
/// |----------------|------|--------------------------|-------------------------|
/// | 100×100, 4     | 5    | 32 (3.20x)               | 32 (3.06x)              |
/// | 200×200, 8     | 4    | 32 (5.62x)               | 32 (5.39x)              |
/// | 500×500, 8     | 4    | 64 (6.63x)               | 64 (6.53x)              |
pub const COMPARE_BLOCKS: &str = include_str!("compare-blocks.txt");

/// Number of data rows in [`COMPARE_BLOCKS`].
pub const COMPARE_BLOCKS_ROWS: usize = 13;

//---------------------------------------------------------------------------------------------------- Thread count report
/// A thread-count sweep over three matrix sizes, 12 data rows.
///
/// The largest thread count in the file is 16 (500×500 only).
pub const COMPARE_THREADS: &str = include_str!("compare-threads.txt");

/// Number of data rows in [`COMPARE_THREADS`].
pub const COMPARE_THREADS_ROWS: usize = 12;

/// The header line both files start with.
pub const HEADER: &str = "Matrix,Threads,BlockSize,SeqTime(us),ThreadsTime(us),AsyncTime(us),ThreadsSpeedup,AsyncSpeedup";

//---------------------------------------------------------------------------------------------------- Tests
#[cfg(test)]
mod tests {
    use super::*;

    fn data_rows(text: &str) -> usize {
        text.lines()
            .skip(1)
            .filter(|l| !l.trim().is_empty() && !l.starts_with('#'))
            .count()
    }

    #[test]
    fn row_counts_match_files() {
        assert_eq!(data_rows(COMPARE_BLOCKS), COMPARE_BLOCKS_ROWS);
        assert_eq!(data_rows(COMPARE_THREADS), COMPARE_THREADS_ROWS);
    }

    #[test]
    fn files_start_with_header() {
        assert!(COMPARE_BLOCKS.starts_with(HEADER));
        assert!(COMPARE_THREADS.starts_with(HEADER));
    }
}
