//! Error types for the dial-watch CLI.

use thiserror::Error;

/// Exit codes for the CLI
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL_ERROR: i32 = 1;
    pub const NETWORK_ERROR: i32 = 2;
    pub const NOT_DETECTED: i32 = 3;
    pub const INVALID_ARGS: i32 = 4;
}

/// Main error type for the CLI
#[derive(Error, Debug)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No qualifying service detected")]
    NotDetected,

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("{0}")]
    Other(String),
}

impl CliError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Io(_) => exit_codes::NETWORK_ERROR,
            CliError::NotDetected => exit_codes::NOT_DETECTED,
            CliError::InvalidArgument(_) => exit_codes::INVALID_ARGS,
            CliError::Other(_) => exit_codes::GENERAL_ERROR,
        }
    }
}

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
