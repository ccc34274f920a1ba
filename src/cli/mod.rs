//! CLI argument parsing for editlease.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// editlease: advisory, self-expiring edit locks.
///
/// Sessions take short leases on resources before editing them. Leases are
/// never renewed; a background reaper removes the ones that expire.
#[derive(Parser, Debug)]
#[command(name = "editlease")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug logging (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for editlease.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the effective configuration as YAML.
    Config(ConfigArgs),

    /// Drive a lock manager from line commands.
    ///
    /// Reads commands such as `acquire doc1 alice` from a script or stdin.
    /// Run `help` inside the shell for the full list.
    Shell(ShellArgs),
}

/// Options shared by commands that build a configuration.
#[derive(Parser, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Path to a YAML config file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the lease duration in milliseconds.
    #[arg(long)]
    pub lease_ms: Option<u64>,

    /// Override the reaper sweep interval in milliseconds.
    #[arg(long)]
    pub interval_ms: Option<u64>,

    /// Require ownership re-validation before commits.
    #[arg(long)]
    pub revalidate: bool,
}

/// Arguments for the `shell` command.
#[derive(Parser, Debug)]
pub struct ShellArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Read commands from this file instead of stdin.
    #[arg(long)]
    pub script: Option<PathBuf>,

    /// Use a manual clock moved by `advance`; reaper ticks follow it.
    #[arg(long)]
    pub simulated: bool,

    /// Stop at the first conflict or lost-ownership error.
    #[arg(long)]
    pub fail_fast: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_shell_flags() {
        let cli = Cli::try_parse_from([
            "editlease",
            "shell",
            "--simulated",
            "--lease-ms",
            "60000",
            "--interval-ms",
            "5000",
            "--fail-fast",
        ])
        .unwrap();

        match cli.command {
            Command::Shell(args) => {
                assert!(args.simulated);
                assert!(args.fail_fast);
                assert_eq!(args.config.lease_ms, Some(60_000));
                assert_eq!(args.config.interval_ms, Some(5_000));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn verbose_is_global() {
        let cli = Cli::try_parse_from(["editlease", "config", "-v"]).unwrap();
        assert!(cli.verbose);
    }
}
