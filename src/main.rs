// src/main.rs

use bracket_combinations::cli::Args;
use bracket_combinations::config::Config;
use bracket_combinations::{app, logging};
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    logging::init();
    let args = Args::parse();

    let config = match Config::from_args(args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match app::run(&config) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
