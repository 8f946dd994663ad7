//! Logging.
//!
//! Everything `mmreport` logs goes to stdout through [`tracing`],
//! fatal errors are printed to stderr with [`eprintln_red`].
use nu_ansi_term::Color;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, Layer};

use crate::config::Config;

/// Install the global [`tracing`] subscriber.
///
/// # Panics
/// Panics if a global subscriber was already installed.
pub fn init_logging(config: &Config) {
    let stdout_layer = fmt::Layer::default()
        .with_target(false)
        .with_filter(config.tracing.stdout.level);

    tracing_subscriber::registry().with(stdout_layer).init();
}

/// Print `s` to stderr in bold red.
pub fn eprintln_red(s: &str) {
    eprintln!("{}", Color::Red.bold().paint(s));
}
