//! Markup rewrite passes
//!
//! Each pass handles one category of CHAT inline markup and is a pure
//! `&str -> String` transformation. Passes share no state and know nothing
//! about each other; the order they run in is decided by
//! [`Normalizer`](crate::pipeline::Normalizer).

use std::fmt;

pub mod incomplete;
pub mod omitted;
pub mod paralinguistic;
pub mod unidentifiable;

pub use incomplete::IncompleteWordRewriter;
pub use omitted::OmittedTokenRewriter;
pub use paralinguistic::ParalinguisticRewriter;
pub use unidentifiable::UnidentifiableRewriter;

/// The four normalization stages, in pipeline order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// `xxx`, `yyy`, `www` replaced with the unknown token
    Unidentifiable,
    /// `stem(suffix)` and `(fragment)` resolved
    Incomplete,
    /// Standalone `&=0...` tokens removed
    Omitted,
    /// `&=action` and `[=! ...]` events removed, whitespace renormalized
    Paralinguistic,
}

impl Stage {
    /// All stages in the order the pipeline applies them
    pub const ALL: [Stage; 4] = [
        Stage::Unidentifiable,
        Stage::Incomplete,
        Stage::Omitted,
        Stage::Paralinguistic,
    ];

    /// Short lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Unidentifiable => "unidentifiable",
            Stage::Incomplete => "incomplete",
            Stage::Omitted => "omitted",
            Stage::Paralinguistic => "paralinguistic",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single markup rewrite pass
///
/// Implementations must be total: any input string, including empty or
/// malformed markup, yields an output string. Input without the pass's
/// markup is returned unchanged.
pub trait Rewriter: Send + Sync {
    /// Rewrite one utterance
    fn rewrite(&self, utterance: &str) -> String;

    /// The stage this rewriter implements
    fn stage(&self) -> Stage;
}
