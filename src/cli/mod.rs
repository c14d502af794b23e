//! CLI module for docapi
//!
//! Provides the command-line interface:
//! - serve: boot the HTTP server over an in-memory store

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{run, serve};
pub use errors::{CliError, CliResult};
