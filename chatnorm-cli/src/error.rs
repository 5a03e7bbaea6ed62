//! Error handling for the CLI application

use std::fmt;

/// Errors raised by the CLI around the normalizer
#[derive(Debug)]
pub enum CliError {
    /// Input or configuration file does not exist
    FileNotFound(String),
    /// Glob pattern could not be parsed
    InvalidPattern(String),
    /// Configuration file is malformed or inconsistent
    ConfigError(String),
    /// The normalizer rejected its configuration
    Normalizer(chatnorm_core::Error),
    /// Worker pool could not be set up
    ProcessingError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::Normalizer(error) => write!(f, "{error}"),
            CliError::ProcessingError(msg) => write!(f, "Processing error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Normalizer(error) => Some(error),
            _ => None,
        }
    }
}

impl From<chatnorm_core::Error> for CliError {
    fn from(error: chatnorm_core::Error) -> Self {
        CliError::Normalizer(error)
    }
}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
