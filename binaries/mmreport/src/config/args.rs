use std::{path::PathBuf, process::exit};

use clap::{error::ErrorKind, CommandFactory};

use crate::{config::Config, pipeline::ReportKind};

/// mmreport args.
#[derive(clap::Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// The report to generate.
    #[arg(value_enum, required_unless_present = "generate_config")]
    pub report: Option<ReportKind>,
    /// The benchmark results file to read.
    ///
    /// Defaults to `compare-blocks.txt` or `compare-threads.txt`, depending on the report.
    #[arg(long)]
    pub input: Option<PathBuf>,
    /// The directory charts are written to.
    #[arg(long)]
    pub output_dir: Option<PathBuf>,
    /// The resolution of written charts, in dots per inch.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=2400))]
    pub dpi: Option<u32>,
    /// The PATH of the `mmreport` config file.
    #[arg(long)]
    pub config_file: Option<PathBuf>,
    /// Generate a config file and print it to stdout.
    #[arg(long)]
    pub generate_config: bool,
}

impl Args {
    /// Complete any quick requests asked for in [`Args`].
    ///
    /// May cause the process to [`exit`].
    pub fn do_quick_requests(&self) {
        if self.generate_config {
            println!("{}", Config::documented_config());
            exit(0);
        }
    }

    /// The requested report.
    ///
    /// Exits with a usage error if none was given.
    pub fn report(&self) -> ReportKind {
        self.report.unwrap_or_else(|| {
            Self::command()
                .error(ErrorKind::MissingRequiredArgument, "a report kind is required")
                .exit()
        })
    }

    /// Apply the [`Args`] to the given [`Config`].
    ///
    /// Flags override values from the config file.
    pub fn apply_args(&self, mut config: Config) -> Config {
        if let Some(input) = &self.input {
            match self.report {
                Some(ReportKind::Blocks) => config.blocks.input.clone_from(input),
                Some(ReportKind::Threads) => config.threads.input.clone_from(input),
                None => (),
            }
        }

        if let Some(directory) = &self.output_dir {
            config.output.directory.clone_from(directory);
        }

        if let Some(dpi) = self.dpi {
            config.output.dpi = dpi;
        }

        config
    }
}
