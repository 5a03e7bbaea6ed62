//! Incomplete words: `sit(ting)` and `(be)cause`

use super::{Rewriter, Stage};
use regex::{Captures, Regex};
use std::sync::OnceLock;

static INCOMPLETE: OnceLock<Regex> = OnceLock::new();

/// Bare `(fragment)` is the first alternative, so at any position it wins
/// over `stem(suffix)`.
fn incomplete() -> &'static Regex {
    INCOMPLETE.get_or_init(|| {
        Regex::new(r"\((\w+)\)|(\w+)\((\w+)\)").expect("incomplete-word pattern is valid")
    })
}

/// Resolves parenthesized word completions
///
/// - `stem(suffix)` becomes `stemsuffix`
/// - a bare `(fragment)` is unwrapped in place, so `(pre)fix` becomes `prefix`
///
/// Only word characters are recognized inside the parentheses; `(a b)` or
/// `(ok.)` are not incomplete-word markup and stay as they are. One
/// parenthesized group is resolved per match, left to right, in a single pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IncompleteWordRewriter;

impl IncompleteWordRewriter {
    fn resolve(caps: &Captures<'_>) -> String {
        match caps.get(1) {
            Some(fragment) => fragment.as_str().to_string(),
            None => format!("{}{}", &caps[2], &caps[3]),
        }
    }
}

impl Rewriter for IncompleteWordRewriter {
    fn rewrite(&self, utterance: &str) -> String {
        incomplete()
            .replace_all(utterance, |caps: &Captures<'_>| Self::resolve(caps))
            .into_owned()
    }

    fn stage(&self) -> Stage {
        Stage::Incomplete
    }
}
