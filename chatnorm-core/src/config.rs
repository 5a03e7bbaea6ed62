//! Configuration API for utterance normalization

use crate::error::{Error, Result};
use crate::pipeline::Normalizer;
use serde::{Deserialize, Serialize};

/// Default configuration constants
pub mod defaults {
    /// Literal substituted for `xxx`, `yyy` and `www` markers
    pub const UNKNOWN_TOKEN: &str = "<unk>";
}

/// Normalization configuration
///
/// The unknown token is fixed when a [`Normalizer`] is built from this value
/// and never changes afterwards. An empty token is accepted: unidentifiable
/// markers are then deleted instead of replaced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    /// Replacement for unintelligible, unclear and untranscribed speech markers
    pub unknown_token: String,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            unknown_token: defaults::UNKNOWN_TOKEN.to_string(),
        }
    }
}

impl NormalizerConfig {
    /// Create a configuration builder
    pub fn builder() -> NormalizerConfigBuilder {
        NormalizerConfigBuilder::default()
    }

    /// Validate the configuration
    ///
    /// The unknown token must survive a full normalization pass unchanged,
    /// otherwise a second pass over normalized output would rewrite it.
    pub fn validate(&self) -> Result<()> {
        let rewritten = Normalizer::unchecked(self.clone()).normalize(&self.unknown_token);
        if rewritten != self.unknown_token {
            return Err(Error::UnstableUnknownToken {
                token: self.unknown_token.clone(),
                rewritten,
            });
        }

        if self.unknown_token.is_empty() {
            log::warn!("unknown token is empty; unidentifiable markers will be deleted");
        }

        Ok(())
    }
}

/// Fluent builder for [`NormalizerConfig`]
#[derive(Debug, Default)]
pub struct NormalizerConfigBuilder {
    unknown_token: Option<String>,
}

impl NormalizerConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the unknown token
    pub fn unknown_token(mut self, token: impl Into<String>) -> Self {
        self.unknown_token = Some(token.into());
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<NormalizerConfig> {
        let mut config = NormalizerConfig::default();

        if let Some(token) = self.unknown_token {
            config.unknown_token = token;
        }

        config.validate()?;
        Ok(config)
    }
}
