//! The report pipeline.
//!
//! Every report runs the same straight line:
//! read, stop if empty, group, draw each group, draw the comparison,
//! print the summary, print the written files.
use std::{
    io::{self, Write},
    path::{Path, PathBuf},
};

use anyhow::{ensure, Context};
use strum::Display;
use tracing::{debug, error, info, warn};

use mmreport_analysis::{
    group_records, max_thread_count, summary::GroupSummary, ByConfiguration, ByMatrixSize,
};
use mmreport_parser::read_records;
use mmreport_render::{
    block_size_comparison, block_size_detail, thread_comparison, thread_speedup, ChartSink,
    Figure, PngSink,
};
use mmreport_types::BenchmarkRecord;

use crate::config::Config;

//---------------------------------------------------------------------------------------------------- ReportKind
/// The reports `mmreport` can generate.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, clap::ValueEnum, Display)]
#[strum(serialize_all = "snake_case")]
pub enum ReportKind {
    /// Speedup against block size, per (matrix size, thread count).
    Blocks,
    /// Speedup against thread count, per matrix size.
    Threads,
}

//---------------------------------------------------------------------------------------------------- Report
/// What one run did.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Report {
    /// Records parsed from the input.
    pub records: usize,
    /// Input rows skipped as malformed.
    pub rejected: usize,
    /// Every chart written, in order.
    pub written: Vec<PathBuf>,
}

//---------------------------------------------------------------------------------------------------- Running
/// Run `kind` as configured by `config`, drawing PNGs and printing to stdout.
///
/// # Errors
/// Returns an error if the config is unusable, the input cannot
/// be read, or a chart cannot be written.
pub fn run_with_config(kind: ReportKind, config: &Config) -> anyhow::Result<Report> {
    debug!("{config}");

    let dpi = config.output.dpi;
    ensure!(
        (1..=2400).contains(&dpi),
        "output dpi must be within 1..=2400, got {dpi}"
    );

    let mut sink = PngSink::new(&config.output.directory, dpi);
    run(kind, config.input(kind), &mut sink, &mut io::stdout().lock())
}

/// Run `kind` over the results in `input`.
///
/// Charts go to `sink`, the summary and file list to `out`.
///
/// An input without a single usable record is logged as an error
/// and returns an empty [`Report`] without grouping or drawing anything.
///
/// # Errors
/// Returns an error if `input` cannot be read, a chart cannot be written
/// or `out` fails.
pub fn run(
    kind: ReportKind,
    input: &Path,
    sink: &mut impl ChartSink,
    out: &mut impl Write,
) -> anyhow::Result<Report> {
    info!("Reading results from {}...", input.display());
    let parsed = read_records(input).context("cannot load benchmark results")?;

    let mut report = Report {
        records: parsed.records.len(),
        rejected: parsed.rejected.len(),
        written: vec![],
    };

    if report.rejected > 0 {
        warn!("Skipped {} malformed rows", report.rejected);
    }

    if parsed.is_empty() {
        error!("No records could be read from {}", input.display());
        return Ok(report);
    }

    info!("Read {} records", report.records);

    report.written = match kind {
        ReportKind::Blocks => blocks(&parsed.records, sink, out)?,
        ReportKind::Threads => threads(&parsed.records, sink, out)?,
    };

    writeln!(out, "\nDone! Created files:")?;
    for path in &report.written {
        writeln!(out, "- {}", path.display())?;
    }

    Ok(report)
}

/// Charts and summary of the block size report.
fn blocks(
    records: &[BenchmarkRecord],
    sink: &mut impl ChartSink,
    out: &mut impl Write,
) -> anyhow::Result<Vec<PathBuf>> {
    let groups = group_records::<ByConfiguration>(records);

    info!("Creating block size charts for {} configurations...", groups.len());
    let mut written = groups
        .values()
        .map(|group| emit(sink, &block_size_detail(group)))
        .collect::<anyhow::Result<Vec<_>>>()?;

    info!("Creating comparison chart...");
    written.push(emit(sink, &block_size_comparison(&groups))?);

    writeln!(out, "\n=== Optimal block sizes ===")?;
    for group in groups.values() {
        write!(out, "{}", GroupSummary::blocks(group))?;
    }

    Ok(written)
}

/// Charts and summary of the thread count report.
fn threads(
    records: &[BenchmarkRecord],
    sink: &mut impl ChartSink,
    out: &mut impl Write,
) -> anyhow::Result<Vec<PathBuf>> {
    let groups = group_records::<ByMatrixSize>(records);
    let max_threads = max_thread_count(records).unwrap_or_default();

    info!("Creating speedup charts for {} matrix sizes...", groups.len());
    let mut written = groups
        .values()
        .map(|group| emit(sink, &thread_speedup(group)))
        .collect::<anyhow::Result<Vec<_>>>()?;

    info!("Creating comparison chart...");
    written.push(emit(sink, &thread_comparison(&groups, max_threads))?);

    writeln!(out, "\n=== Best thread counts ===")?;
    for group in groups.values() {
        write!(out, "{}", GroupSummary::threads(group))?;
    }

    Ok(written)
}

fn emit(sink: &mut impl ChartSink, figure: &Figure) -> anyhow::Result<PathBuf> {
    let path = sink
        .emit(figure)
        .with_context(|| format!("cannot write chart `{}`", figure.file_name))?;
    debug!("Wrote {}", path.display());
    Ok(path)
}
