//! mmreport config
use std::{
    fmt,
    fs::read_to_string,
    path::{Path, PathBuf},
    process::exit,
    str::FromStr,
};

use anyhow::Context;
use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::{
    constants::DEFAULT_CONFIG_FILE_NAME, logging::eprintln_red, pipeline::ReportKind,
};

mod args;
mod input;
mod output;
mod tracing_config;

#[macro_use]
mod macros;

pub use args::Args;
pub use input::{BlocksConfig, ThreadsConfig};
pub use output::OutputConfig;
pub use tracing_config::{StdoutTracingConfig, TracingConfig};

/// Header to put at the start of the generated config file.
const HEADER: &str = r"##                                              _
##    _ __ ___  _ __ ___  _ __ ___ _ __   ___  _ __| |_
##   | '_ ` _ \| '_ ` _ \| '__/ _ \ '_ \ / _ \| '__| __|
##   | | | | | | | | | | | | |  __/ |_) | (_) | |  | |_
##   |_| |_| |_|_| |_| |_|_|  \___| .__/ \___/|_|   \__|
##                                |_|
##
## All these config values can be set to
## their default by commenting them out with '#'.
##
## Command line flags override the values in this file.

";

/// Reads the args & config file, returning the requested report and a [`Config`].
///
/// Exits the process if the config file cannot be used.
pub fn read_config_and_args() -> (ReportKind, Config) {
    let args = Args::parse();
    args.do_quick_requests();

    let config_file = args
        .config_file
        .clone()
        .or_else(|| Some(PathBuf::from(DEFAULT_CONFIG_FILE_NAME)).filter(|path| path.is_file()));

    let config = match config_file {
        // A config file that exists must be valid.
        Some(path) => match Config::read_from_path(&path) {
            Ok(config) => {
                println!("Using config at: {}", path.display());
                config
            }
            Err(e) => {
                eprintln_red(&format!("Failed to read config from file: {e:#}"));
                exit(1);
            }
        },
        None => Config::default(),
    };

    (args.report(), args.apply_args(config))
}

config_struct! {
    /// The config for all of mmreport.
    #[derive(Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
    #[serde(deny_unknown_fields, default)]
    pub struct Config {
        #[child = true]
        /// Configuration for mmreport's logging system, tracing.
        ///
        /// Progress and skipped input rows are logged to stdout.
        pub tracing: TracingConfig,

        #[child = true]
        /// Configuration for written charts.
        pub output: OutputConfig,

        #[child = true]
        /// Configuration for `mmreport blocks`.
        pub blocks: BlocksConfig,

        #[child = true]
        /// Configuration for `mmreport threads`.
        pub threads: ThreadsConfig,
    }
}

impl Config {
    /// Returns a default [`Config`], with doc comments.
    pub fn documented_config() -> String {
        let str = toml::ser::to_string_pretty(&Self::default()).unwrap();
        let mut doc = toml_edit::DocumentMut::from_str(&str).unwrap();
        Self::write_docs(doc.as_table_mut());
        format!("{HEADER}{doc}")
    }

    /// Attempts to read a config file in [`toml`] format from the given [`Path`].
    ///
    /// # Errors
    ///
    /// Will return an [`Err`] if the file cannot be read or if the file is not a valid [`toml`] config.
    pub fn read_from_path(file: impl AsRef<Path>) -> Result<Self, anyhow::Error> {
        let file = file.as_ref();
        let file_text = read_to_string(file)
            .with_context(|| format!("cannot read `{}`", file.display()))?;

        toml::from_str(&file_text).with_context(|| format!("invalid config file `{}`", file.display()))
    }

    /// The input file of `report`.
    pub fn input(&self, report: ReportKind) -> &Path {
        match report {
            ReportKind::Blocks => &self.blocks.input,
            ReportKind::Threads => &self.threads.input,
        }
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "========== CONFIGURATION ==========\n{self:#?}\n==================================="
        )
    }
}

#[cfg(test)]
mod test {
    use std::fs;

    use pretty_assertions::assert_eq;
    use toml::from_str;
    use tracing::level_filters::LevelFilter;

    use super::*;

    #[test]
    fn documented_config() {
        let str = Config::documented_config();
        let conf: Config = from_str(&str).unwrap();

        assert_eq!(conf, Config::default());
    }

    #[test]
    fn documented_config_has_every_section() {
        let str = Config::documented_config();

        for section in ["[tracing.stdout]", "[output]", "[blocks]", "[threads]"] {
            assert!(str.contains(section), "missing {section}");
        }
        assert!(str.contains("## The resolution of written charts, in dots per inch."));
    }

    #[test]
    fn partial_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE_NAME);
        fs::write(&path, "[output]\ndpi = 100\n\n[tracing.stdout]\nlevel = \"warn\"\n").unwrap();

        let config = Config::read_from_path(&path).unwrap();
        assert_eq!(config.output.dpi, 100);
        assert_eq!(config.output.directory, OutputConfig::default().directory);
        assert_eq!(config.tracing.stdout.level, LevelFilter::WARN);
        assert_eq!(config.input(ReportKind::Blocks), Path::new("compare-blocks.txt"));
        assert_eq!(config.input(ReportKind::Threads), Path::new("compare-threads.txt"));
    }

    #[test]
    fn invalid_config_files() {
        let dir = tempfile::tempdir().unwrap();

        let missing = dir.path().join("missing.toml");
        let error = Config::read_from_path(&missing).unwrap_err();
        assert!(error.to_string().starts_with("cannot read"));

        let unknown = dir.path().join("unknown.toml");
        fs::write(&unknown, "[output]\ncolour = \"red\"\n").unwrap();
        let error = Config::read_from_path(&unknown).unwrap_err();
        assert!(error.to_string().starts_with("invalid config file"));
    }
}
