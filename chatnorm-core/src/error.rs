//! Error types for normalizer configuration
//!
//! Rewriting itself never fails: every pass is total over arbitrary input.
//! Errors only arise while building a configuration.

use thiserror::Error;

/// Errors that can occur while configuring a normalizer
#[derive(Debug, Error)]
pub enum Error {
    /// The unknown token would itself be rewritten by the pipeline
    #[error("Unknown token {token:?} is not stable under normalization (rewritten to {rewritten:?})")]
    UnstableUnknownToken { token: String, rewritten: String },
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, Error>;
