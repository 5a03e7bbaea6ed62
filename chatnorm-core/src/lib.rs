//! Normalization of CHAT child-language transcript utterances
//!
//! CHAT speaker tiers carry inline markup for unintelligible speech,
//! incomplete words, omitted tokens and non-verbal events. This crate strips
//! or canonicalizes that markup with four independent rewrite passes and a
//! composer that applies them in a fixed order.
//!
//! # Architecture
//!
//! - **Rewriters** ([`rewrite`]): one pure `&str -> String` pass per markup
//!   category, behind the [`Rewriter`] trait
//! - **Pipeline** ([`pipeline`]): [`Normalizer`] owns the passes and the
//!   configured unknown token
//! - **Configuration** ([`config`]): [`NormalizerConfig`] with builder and
//!   validation; `serde` derives let callers embed it in their own config
//!   files
//!
//! The crate does not parse transcript lines: callers split files into
//! utterances (speaker code removed) and handle all I/O.
//!
//! # Example
//!
//! ```rust
//! use chatnorm_core::Normalizer;
//!
//! let normalizer = Normalizer::default();
//! assert_eq!(
//!     normalizer.normalize("xxx sit(ting) &=jumps www"),
//!     "<unk> sitting <unk>"
//! );
//!
//! let custom = Normalizer::with_unknown_token("UNK").unwrap();
//! assert_eq!(custom.normalize("<xxx> [=! crying] &=0to walk(ing)"), "UNK walking");
//! ```

pub mod config;
pub mod error;
pub mod pipeline;
pub mod rewrite;

use std::sync::OnceLock;

pub use config::{NormalizerConfig, NormalizerConfigBuilder};
pub use error::{Error, Result};
pub use pipeline::{Normalizer, StageOutput};
pub use rewrite::{
    IncompleteWordRewriter, OmittedTokenRewriter, ParalinguisticRewriter, Rewriter, Stage,
    UnidentifiableRewriter,
};

static DEFAULT_NORMALIZER: OnceLock<Normalizer> = OnceLock::new();

fn default_normalizer() -> &'static Normalizer {
    DEFAULT_NORMALIZER.get_or_init(Normalizer::default)
}

/// Replace `xxx`, `yyy` and `www` with the default unknown token `<unk>`
pub fn normalize_unidentifiable(utterance: &str) -> String {
    UnidentifiableRewriter::default().rewrite(utterance)
}

/// Resolve `stem(suffix)` and `(fragment)` incomplete-word markup
pub fn normalize_incomplete(utterance: &str) -> String {
    IncompleteWordRewriter.rewrite(utterance)
}

/// Remove standalone `&=0...` omission tokens
pub fn normalize_omitted(utterance: &str) -> String {
    OmittedTokenRewriter.rewrite(utterance)
}

/// Remove `&=action` and `[=! ...]` events and renormalize whitespace
pub fn normalize_paralinguistic(utterance: &str) -> String {
    ParalinguisticRewriter.rewrite(utterance)
}

/// Run the full pipeline with the default configuration
pub fn normalize(utterance: &str) -> String {
    default_normalizer().normalize(utterance)
}
