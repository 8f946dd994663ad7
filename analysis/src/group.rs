//! [`Group`]s and their optima.
use std::collections::BTreeMap;

use mmreport_helper::num::first_max_position;
use mmreport_types::{BenchmarkRecord, Series};

use crate::{ByConfiguration, GroupingStrategy};

//---------------------------------------------------------------------------------------------------- Optimum
/// The best point of one [`Series`] inside a [`Group`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Optimum {
    /// Index into [`Group::records`].
    pub position: usize,
    /// The independent variable at the optimum (block size or thread count).
    pub x: u32,
    /// The speedup at the optimum.
    pub speedup: f64,
}

//---------------------------------------------------------------------------------------------------- Group
/// Records sharing one [`GroupingStrategy::Key`], sorted by
/// [`GroupingStrategy::independent`].
///
/// # Invariant
/// A group is never empty.
#[derive(Debug, Clone)]
pub struct Group<'a, S: GroupingStrategy> {
    key: S::Key,
    records: Vec<&'a BenchmarkRecord>,
    /// Positions of the best speedup of each [`Series`].
    threaded_best: usize,
    async_best: usize,
}

impl<'a, S: GroupingStrategy> Group<'a, S> {
    /// Sort `records` and find their optima.
    ///
    /// Returns [`None`] if `records` is empty.
    fn new(key: S::Key, mut records: Vec<&'a BenchmarkRecord>) -> Option<Self> {
        // Stable, ties keep input order.
        records.sort_by_key(|r| S::independent(r));

        let threaded_best = first_max_position(records.iter().map(|r| r.threaded_speedup))?;
        let async_best = first_max_position(records.iter().map(|r| r.async_speedup))?;

        Some(Self {
            key,
            records,
            threaded_best,
            async_best,
        })
    }

    /// The key shared by every record in this group.
    pub const fn key(&self) -> S::Key {
        self.key
    }

    /// The records, sorted by the independent variable.
    pub fn records(&self) -> &[&'a BenchmarkRecord] {
        &self.records
    }

    /// The independent variable of each record, in order.
    pub fn xs(&self) -> Vec<u32> {
        self.records.iter().map(|r| S::independent(r)).collect()
    }

    /// The speedup of `series` for each record, in order.
    pub fn speedups(&self, series: Series) -> Vec<f64> {
        self.records.iter().map(|r| series.speedup(r)).collect()
    }

    /// The run time of `series` for each record, in order.
    pub fn times_us(&self, series: Series) -> Vec<u64> {
        self.records.iter().map(|r| series.time_us(r)).collect()
    }

    /// The best point of `series`.
    ///
    /// If several records share the best speedup, the first in sorted order wins.
    pub fn optimum(&self, series: Series) -> Optimum {
        let position = match series {
            Series::Threaded => self.threaded_best,
            Series::Async => self.async_best,
        };
        let record = self.records[position];

        Optimum {
            position,
            x: S::independent(record),
            speedup: series.speedup(record),
        }
    }
}

impl Group<'_, ByConfiguration> {
    /// The best `std::thread` speedup as a fraction of the thread count.
    ///
    /// Returns [`None`] when the best block size is `1`, a degenerate tiling.
    pub fn cache_efficiency(&self) -> Option<f64> {
        let best = self.optimum(Series::Threaded);
        (best.x > 1).then(|| best.speedup / f64::from(self.key.thread_count))
    }
}

//---------------------------------------------------------------------------------------------------- Free functions
/// Partition `records` with the strategy `S`.
///
/// Every record lands in exactly one group. Groups iterate in ascending key order.
///
/// ```rust
/// # use mmreport_analysis::{group_records, ByMatrixSize};
/// # use mmreport_test_utils::record::record;
/// let records = [
///     record(200, 4, 32, 3.6, 3.5),
///     record(100, 8, 32, 3.4, 3.5),
///     record(100, 2, 32, 1.9, 1.8),
/// ];
///
/// let groups = group_records::<ByMatrixSize>(&records);
/// assert_eq!(groups.keys().copied().collect::<Vec<_>>(), [100, 200]);
/// assert_eq!(groups[&100].xs(), [2, 8]);
/// ```
pub fn group_records<S: GroupingStrategy>(
    records: &[BenchmarkRecord],
) -> BTreeMap<S::Key, Group<'_, S>> {
    let mut partitions: BTreeMap<S::Key, Vec<&BenchmarkRecord>> = BTreeMap::new();

    for record in records {
        partitions.entry(S::key(record)).or_default().push(record);
    }

    partitions
        .into_iter()
        .filter_map(|(key, members)| Group::new(key, members).map(|group| (key, group)))
        .collect()
}

/// The largest thread count in `records`, [`None`] if there are no records.
pub fn max_thread_count(records: &[BenchmarkRecord]) -> Option<u32> {
    records.iter().map(|r| r.thread_count).max()
}
