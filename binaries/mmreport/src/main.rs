//! `mmreport` entry point.
use std::process::ExitCode;

use tracing::info;

use mmreport::{
    config::read_config_and_args, constants::VERSION_BUILD, logging, run_with_config,
};

fn main() -> ExitCode {
    let (report, config) = read_config_and_args();

    logging::init_logging(&config);
    info!("mmreport {VERSION_BUILD}, {report} report");

    match run_with_config(report, &config) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            logging::eprintln_red(&format!("Error: {e:#}"));
            ExitCode::FAILURE
        }
    }
}
