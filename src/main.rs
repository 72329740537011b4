//! Promptgen: requirement-driven system prompt generator for AI agents.
//!
//! This is the entry point for the `promptgen` CLI. It parses arguments,
//! dispatches to the appropriate command handler, and maps errors to exit
//! codes.

mod cli;
mod commands;

use cli::Cli;
use promptgen::exit_codes;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    match commands::dispatch(cli.command) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
