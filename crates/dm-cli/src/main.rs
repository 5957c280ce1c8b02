//! `dm-builder`: builds the SDTM DM dataset from raw CSV extracts.

use std::process::ExitCode;

use clap::Parser;
use dm_cli::logging::init_logging;

mod cli;
mod commands;
mod summary;
mod types;

use crate::cli::{Cli, Command};
use crate::commands::{run_build, run_sample, run_schema};
use crate::summary::print_summary;

fn main() -> ExitCode {
    let cli = Cli::parse();
    cli.color.write_global();
    if let Err(error) = init_logging(&cli.log_config()) {
        eprintln!("error: failed to initialize logging: {error:#}");
        return ExitCode::FAILURE;
    }
    let outcome = match &cli.command {
        Command::Run(args) => run_build(args).map(|result| {
            print_summary(&result);
            !result.has_errors()
        }),
        Command::Sample(args) => run_sample(args).map(|()| true),
        Command::Schema => run_schema().map(|()| true),
    };
    match outcome {
        Ok(true) => ExitCode::SUCCESS,
        // Error-severity diagnostics; the summary has already listed them.
        Ok(false) => ExitCode::FAILURE,
        Err(error) => {
            eprintln!("error: {error:#}");
            ExitCode::FAILURE
        }
    }
}
