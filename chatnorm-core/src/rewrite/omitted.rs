//! Omitted tokens (`&=0`, `&=0det`)

use super::{Rewriter, Stage};
use regex::Regex;
use std::sync::OnceLock;

static OMITTED: OnceLock<Regex> = OnceLock::new();

/// A standalone `&=0...` token with the whitespace (or string edge) on both
/// sides. The trailing whitespace is consumed by the match, so two adjacent
/// omissions cannot both be found in the same scan.
fn omitted() -> &'static Regex {
    OMITTED.get_or_init(|| {
        Regex::new(r"(?:^|\s)&=0\w*(?:\s|$)").expect("omission pattern is valid")
    })
}

/// Removes standalone `&=0...` tokens
///
/// Only whitespace-delimited tokens are removed; `prefix&=0suffix` is not an
/// omission token and is returned as is. Each scan replaces every match found
/// with a single space and trims the result, then the text is rescanned until
/// no standalone token is left.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OmittedTokenRewriter;

impl Rewriter for OmittedTokenRewriter {
    fn rewrite(&self, utterance: &str) -> String {
        let mut current = utterance.to_string();

        // Every productive scan removes at least one `&=0` token.
        while omitted().is_match(&current) {
            let next = omitted().replace_all(&current, " ").trim().to_string();
            if next == current {
                break;
            }
            current = next;
        }

        current
    }

    fn stage(&self) -> Stage {
        Stage::Omitted
    }
}
