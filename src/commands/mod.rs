//! Command implementations for editlease.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod config;
mod shell;

use crate::cli::Command;
use editlease::error::Result;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Config(args) => config::cmd_config(args),
        Command::Shell(args) => shell::cmd_shell(args),
    }
}
