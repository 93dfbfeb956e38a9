// src/main.rs
#![allow(clippy::multiple_crate_versions)]

use std::process::ExitCode;

use comm_lines::{app, cli, logging};
use comm_lines_shared_kernel::CommLinesError;

const NAME: &str = "comm";

fn main() -> ExitCode {
    logging::init();

    let config = match cli::load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{NAME}: {e}");
            eprintln!("Try '{NAME} --help' for more information.");
            return ExitCode::FAILURE;
        }
    };

    match app::run(&config) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) if e.downcast_ref::<CommLinesError>().is_some_and(CommLinesError::is_broken_pipe) => {
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{NAME}: {e}");
            ExitCode::FAILURE
        }
    }
}
