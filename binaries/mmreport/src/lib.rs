#![doc = include_str!("../README.md")]

pub mod config;
pub mod constants;
pub mod logging;
pub mod pipeline;

pub use pipeline::{run, run_with_config, Report, ReportKind};
