//! Configuration module

use crate::commands::process::OutputFormat;
use crate::error::CliError;
use anyhow::{Context, Result};
use chatnorm_core::NormalizerConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Normalization configuration, passed through to the core
    #[serde(default)]
    pub normalization: NormalizerConfig,

    /// Input configuration
    #[serde(default)]
    pub input: InputConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,
}

impl CliConfig {
    /// Load a configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(CliError::FileNotFound(path.display().to_string()).into());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: CliConfig = toml::from_str(&content)
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())))?;

        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file if one was given, defaults otherwise
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                log::debug!("Loading configuration from {}", path.display());
                Self::from_file(path)
            }
            None => Ok(Self::default()),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.normalization.validate().map_err(CliError::from)?;

        if self.input.speakers.iter().any(|code| code.trim().is_empty()) {
            return Err(
                CliError::ConfigError("speaker codes must not be empty".to_string()).into(),
            );
        }

        Ok(())
    }
}

/// Input-related configuration
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct InputConfig {
    /// Speaker codes to keep (empty = all speakers)
    #[serde(default)]
    pub speakers: Vec<String>,
}

/// Output-related configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: OutputFormat,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: OutputFormat::Text,
            pretty_json: true,
        }
    }
}

/// Performance-related configuration
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Number of worker threads for parallel processing (0 = auto)
    pub worker_threads: usize,
}

impl PerformanceConfig {
    /// Resolve the configured thread count
    pub fn thread_count(&self) -> usize {
        if self.worker_threads == 0 {
            num_cpus::get()
        } else {
            self.worker_threads
        }
    }
}
