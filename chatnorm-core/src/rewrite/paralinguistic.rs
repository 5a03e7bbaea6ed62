//! Paralinguistic events (`&=laughs`, `<text> [=! cries]`)

use super::{Rewriter, Stage};
use regex::{Captures, Regex};
use std::sync::OnceLock;

static BARE_EVENT: OnceLock<Regex> = OnceLock::new();
static EVENT_BRACKET: OnceLock<Regex> = OnceLock::new();

fn bare_event() -> &'static Regex {
    BARE_EVENT.get_or_init(|| Regex::new(r"&=\w+").expect("event pattern is valid"))
}

/// `<span> [=! ...]` or a lone `[=! ...]`.
///
/// The span may hold one level of nested angle groups so that `<<unk>>`
/// unwraps to `<unk>`. The span alternative comes first, so a bracket with a
/// preceding span is never matched on its own.
fn event_bracket() -> &'static Regex {
    EVENT_BRACKET.get_or_init(|| {
        Regex::new(r"<((?:[^<>]|<[^<>]*>)+)>\s*\[=![^\]]*\]|\[=![^\]]*\]")
            .expect("event bracket pattern is valid")
    })
}

/// Removes non-verbal event annotations
///
/// - `&=action` is deleted
/// - `<span> [=! ...]` keeps the span text and drops the brackets
/// - `[=! ...]` alone is deleted with its content
///
/// Square brackets that do not open with `=!` (`[! ...]`, `[/]`) and angle
/// spans without a following event bracket are left untouched. Whitespace is
/// collapsed and trimmed afterwards.
///
/// An angle-bracketed unknown token such as the default `<unk>` reads as a
/// span here: `xxx [=! cries]` becomes `<unk> [=! cries]` after the
/// unidentifiable pass and then `unk`. Use a token without `<`/`>` if the
/// replacement must survive next to an event bracket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParalinguisticRewriter;

impl Rewriter for ParalinguisticRewriter {
    fn rewrite(&self, utterance: &str) -> String {
        let without_events = bare_event().replace_all(utterance, "");
        let without_brackets =
            event_bracket().replace_all(&without_events, |caps: &Captures<'_>| {
                caps.get(1)
                    .map(|span| span.as_str().to_string())
                    .unwrap_or_default()
            });

        without_brackets.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    fn stage(&self) -> Stage {
        Stage::Paralinguistic
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rewrite(text: &str) -> String {
        ParalinguisticRewriter.rewrite(text)
    }

    #[test]
    fn test_bare_event() {
        assert_eq!(rewrite("&=cries"), "");
        assert_eq!(rewrite("no &=laughs way"), "no way");
    }

    #[test]
    fn test_event_bracket_without_span() {
        assert_eq!(rewrite("that's mine [=! cries]"), "that's mine");
    }

    #[test]
    fn test_event_bracket_with_span() {
        assert_eq!(rewrite("<that's mine> [=! cries]"), "that's mine");
        assert_eq!(rewrite("<no>[=! whispers] okay"), "no okay");
    }

    #[test]
    fn test_multiple_events() {
        assert_eq!(
            rewrite("<hello> [=! laughs] <there> [=! cries]"),
            "hello there"
        );
    }

    #[test]
    fn test_non_event_bracket_untouched() {
        assert_eq!(rewrite("[! not paralinguistic]"), "[! not paralinguistic]");
        assert_eq!(rewrite("<I want> [/] I want"), "<I want> [/] I want");
    }

    #[test]
    fn test_dangling_span_keeps_brackets() {
        assert_eq!(rewrite("<dangling> text"), "<dangling> text");
        assert_eq!(rewrite("<unk> walking"), "<unk> walking");
    }

    #[test]
    fn test_only_adjacent_span_is_unwrapped() {
        assert_eq!(rewrite("<kept> and <gone> [=! sighs]"), "<kept> and gone");
    }

    #[test]
    fn test_nested_span() {
        assert_eq!(rewrite("<<unk>> [=! crying] walking"), "<unk> walking");
    }

    #[test]
    fn test_bracketed_token_before_event_is_unwrapped() {
        assert_eq!(rewrite("<unk> [=! cries]"), "unk");
        assert_eq!(rewrite("UNK [=! cries]"), "UNK");
    }

    #[test]
    fn test_unclosed_bracket() {
        assert_eq!(rewrite("hi [=! cries"), "hi [=! cries");
    }

    #[test]
    fn test_whitespace_is_renormalized() {
        assert_eq!(rewrite("  a \t b  "), "a b");
        assert_eq!(rewrite(""), "");
    }
}
