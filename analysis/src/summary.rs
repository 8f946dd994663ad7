//! Human-readable optimum findings.
//!
//! A [`GroupSummary`] is built from one [`Group`] and printed with [`Display`]:
//!
//! ```text
//! Matrix 100×100, 4 threads:
//!   std::thread: block 32 -> speedup 3.20x
//!   std::async:  block 32 -> speedup 3.06x
//!   Efficiency: 80.00% of ideal speedup
//! ```

use std::fmt::{self, Display};

use strum::VariantArray;

use mmreport_helper::fmt::{matrix, percent, speedup, threads};
use mmreport_types::Series;

use crate::{ByConfiguration, ByMatrixSize, Group, GroupingStrategy};

//---------------------------------------------------------------------------------------------------- BestPoint
/// The optimum of one [`Series`], ready for printing.
#[derive(Debug, Clone, PartialEq)]
pub struct BestPoint {
    pub series: Series,
    /// Where the optimum is, e.g. `block 32` or `8 threads`.
    pub at: String,
    pub speedup: f64,
}

//---------------------------------------------------------------------------------------------------- GroupSummary
/// The summary block of one group.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupSummary {
    /// e.g. `Matrix 100×100, 4 threads`.
    pub heading: String,
    /// One entry per [`Series`], in [`Series::VARIANTS`] order.
    pub best: Vec<BestPoint>,
    /// Best `std::thread` speedup over the thread count.
    ///
    /// Only set for the block size report, and only when
    /// the best block size is larger than `1`.
    pub efficiency: Option<f64>,
}

impl GroupSummary {
    /// Summarize a block size group.
    pub fn blocks(group: &Group<'_, ByConfiguration>) -> Self {
        let key = group.key();

        Self {
            heading: format!(
                "Matrix {}, {}",
                matrix(key.matrix_size),
                threads(key.thread_count)
            ),
            best: best_points(group, |x| format!("block {x}")),
            efficiency: group.cache_efficiency(),
        }
    }

    /// Summarize a thread count group.
    pub fn threads(group: &Group<'_, ByMatrixSize>) -> Self {
        Self {
            heading: format!("Matrix {}", matrix(group.key())),
            best: best_points(group, threads),
            efficiency: None,
        }
    }
}

fn best_points<S: GroupingStrategy>(
    group: &Group<'_, S>,
    at: impl Fn(u32) -> String,
) -> Vec<BestPoint> {
    Series::VARIANTS
        .iter()
        .map(|&series| {
            let optimum = group.optimum(series);
            BestPoint {
                series,
                at: at(optimum.x),
                speedup: optimum.speedup,
            }
        })
        .collect()
}

impl Display for GroupSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}:", self.heading)?;

        for best in &self.best {
            // Pad so the two series line up.
            let label = format!("{}:", best.series);
            writeln!(
                f,
                "  {label:<13}{} -> speedup {}",
                best.at,
                speedup(best.speedup)
            )?;
        }

        if let Some(efficiency) = self.efficiency {
            writeln!(f, "  Efficiency: {} of ideal speedup", percent(efficiency))?;
        }

        Ok(())
    }
}
