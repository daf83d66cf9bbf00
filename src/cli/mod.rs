//! CLI module for sqldoc
//!
//! Provides the command-line interface: one subcommand per built-in
//! function kind plus a generic `run` that dispatches through the named
//! function registry. The resulting document is pretty-printed to stdout.

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{run, run_command};
pub use errors::{CliError, CliResult};
