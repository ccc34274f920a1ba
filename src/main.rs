//! editlease: operator CLI for the edit-lock subsystem.
//!
//! This is the main entry point for the `editlease` binary. It parses
//! arguments, installs logging, dispatches to the command handler, and maps
//! errors to exit codes.

mod cli;
mod commands;

use clap::Parser;
use cli::Cli;
use editlease::exit_codes;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match commands::dispatch(cli.command) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}

/// Log to stderr. `RUST_LOG` wins; otherwise `-v` enables debug output.
fn init_logging(verbose: bool) {
    let default = if verbose { "editlease=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
