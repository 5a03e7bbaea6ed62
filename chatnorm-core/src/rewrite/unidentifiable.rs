//! Unidentifiable speech markers (`xxx`, `yyy`, `www`)

use super::{Rewriter, Stage};
use crate::config::defaults;
use regex::{NoExpand, Regex};
use std::sync::OnceLock;

static MARKER: OnceLock<Regex> = OnceLock::new();

fn marker() -> &'static Regex {
    MARKER.get_or_init(|| Regex::new(r"\b(?:xxx|yyy|www)\b").expect("marker pattern is valid"))
}

/// Replaces whole-word `xxx`, `yyy` and `www` with the unknown token
///
/// Markers fused into a larger word (`xxxyyy`, `www2`) are left alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnidentifiableRewriter {
    unknown_token: String,
}

impl UnidentifiableRewriter {
    /// Create a rewriter substituting `unknown_token`
    pub fn new(unknown_token: impl Into<String>) -> Self {
        Self {
            unknown_token: unknown_token.into(),
        }
    }

    /// The configured replacement
    pub fn unknown_token(&self) -> &str {
        &self.unknown_token
    }
}

impl Default for UnidentifiableRewriter {
    fn default() -> Self {
        Self::new(defaults::UNKNOWN_TOKEN)
    }
}

impl Rewriter for UnidentifiableRewriter {
    fn rewrite(&self, utterance: &str) -> String {
        marker()
            .replace_all(utterance, NoExpand(self.unknown_token.as_str()))
            .into_owned()
    }

    fn stage(&self) -> Stage {
        Stage::Unidentifiable
    }
}
