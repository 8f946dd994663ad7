//! Grouping strategies.
use std::fmt::Debug;

use mmreport_types::{BenchmarkRecord, Field};

/// Decides how records are partitioned into groups and
/// which field varies inside a group.
pub trait GroupingStrategy {
    /// What records in one group have in common.
    ///
    /// Groups are enumerated in ascending key order.
    type Key: Copy + Ord + Debug;

    /// The field that varies inside a group, the x axis of its charts.
    const INDEPENDENT: Field;

    /// The group `record` belongs to.
    fn key(record: &BenchmarkRecord) -> Self::Key;

    /// The value of [`Self::INDEPENDENT`] in `record`.
    fn independent(record: &BenchmarkRecord) -> u32;
}

/// A (matrix size, thread count) pair, ordered by matrix size first.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Configuration {
    pub matrix_size: u32,
    pub thread_count: u32,
}

/// One group per (matrix size, thread count), varying block size.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ByConfiguration;

impl GroupingStrategy for ByConfiguration {
    type Key = Configuration;

    const INDEPENDENT: Field = Field::BlockSize;

    fn key(record: &BenchmarkRecord) -> Configuration {
        Configuration {
            matrix_size: record.matrix_size,
            thread_count: record.thread_count,
        }
    }

    fn independent(record: &BenchmarkRecord) -> u32 {
        record.block_size
    }
}

/// One group per matrix size, varying thread count.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ByMatrixSize;

impl GroupingStrategy for ByMatrixSize {
    type Key = u32;

    const INDEPENDENT: Field = Field::Threads;

    fn key(record: &BenchmarkRecord) -> u32 {
        record.matrix_size
    }

    fn independent(record: &BenchmarkRecord) -> u32 {
        record.thread_count
    }
}
