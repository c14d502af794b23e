//! CLI-specific error types
//!
//! All CLI errors are fatal: the process prints them and exits non-zero.

use thiserror::Error;

use crate::config::ConfigError;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// CLI errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Server failed to boot or exited with an error
    #[error("Boot failed: {0}")]
    Boot(String),
}

impl CliError {
    /// Boot failure
    pub fn boot_failed(msg: impl Into<String>) -> Self {
        CliError::Boot(msg.into())
    }
}
