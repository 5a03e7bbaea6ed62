//! chatnorm CLI library
//!
//! This library provides the command-line interface for the chatnorm
//! transcript normalizer: file discovery, CHAT speaker-tier extraction,
//! configuration loading and output formatting around `chatnorm-core`.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
