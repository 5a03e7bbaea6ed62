//! CHAT speaker-tier extraction
//!
//! A CHAT file mixes header lines (`@`), speaker tiers (`*CHI:`) and
//! dependent tiers (`%mor:`). Only speaker tiers carry utterances; a tier may
//! continue on following lines that start with a tab.

/// Delimiter around `start_end` media timestamps
const MEDIA_BULLET: char = '\u{15}';

/// One speaker tier from a CHAT transcript
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeakerTurn {
    /// 1-based line number of the `*` line
    pub line: usize,
    /// Speaker code without the `*` and `:`
    pub speaker: String,
    /// Utterance text with continuation lines joined by a space
    pub utterance: String,
}

/// Extract all speaker tiers from CHAT text
pub fn extract_turns(content: &str) -> Vec<SpeakerTurn> {
    let mut turns: Vec<SpeakerTurn> = Vec::new();
    let mut in_speaker_tier = false;

    for (index, line) in content.lines().enumerate() {
        if let Some(rest) = line.strip_prefix('*') {
            match rest.split_once(':') {
                Some((speaker, utterance)) if !speaker.trim().is_empty() => {
                    turns.push(SpeakerTurn {
                        line: index + 1,
                        speaker: speaker.trim().to_string(),
                        utterance: strip_media_bullets(utterance).trim().to_string(),
                    });
                    in_speaker_tier = true;
                }
                _ => {
                    log::warn!("line {}: malformed speaker tier skipped", index + 1);
                    in_speaker_tier = false;
                }
            }
        } else if in_speaker_tier && line.starts_with('\t') {
            if let Some(turn) = turns.last_mut() {
                let continuation = strip_media_bullets(line);
                let continuation = continuation.trim();
                if !continuation.is_empty() {
                    if !turn.utterance.is_empty() {
                        turn.utterance.push(' ');
                    }
                    turn.utterance.push_str(continuation);
                }
            }
        } else {
            in_speaker_tier = false;
        }
    }

    turns
}

/// Keep only turns by the given speakers (empty = keep all)
pub fn filter_speakers(turns: Vec<SpeakerTurn>, speakers: &[String]) -> Vec<SpeakerTurn> {
    if speakers.is_empty() {
        return turns;
    }

    turns
        .into_iter()
        .filter(|turn| speakers.iter().any(|code| code == &turn.speaker))
        .collect()
}

/// Remove paired media bullets; an unpaired bullet is left in place
fn strip_media_bullets(text: &str) -> String {
    let bullet_len = MEDIA_BULLET.len_utf8();
    let mut result = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find(MEDIA_BULLET) {
        let after = &rest[start + bullet_len..];
        match after.find(MEDIA_BULLET) {
            Some(end) => {
                result.push_str(&rest[..start]);
                rest = &after[end + bullet_len..];
            }
            None => break,
        }
    }

    result.push_str(rest);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "@UTF8\n\
@Begin\n\
@Participants:\tCHI Target_Child, MOT Mother\n\
*CHI:\txxx sit(ting) &=jumps www .\n\
%mor:\tn|xxx\n\
*MOT:\t<that's mine> [=! cries] .\n\
*CHI:\tI want &=0to\n\
\tgo outside .\n\
@End\n";

    #[test]
    fn test_extracts_speaker_tiers_only() {
        let turns = extract_turns(SAMPLE);
        let speakers: Vec<&str> = turns.iter().map(|t| t.speaker.as_str()).collect();
        assert_eq!(speakers, vec!["CHI", "MOT", "CHI"]);
    }

    #[test]
    fn test_line_numbers_are_one_based() {
        let turns = extract_turns(SAMPLE);
        assert_eq!(turns[0].line, 4);
        assert_eq!(turns[1].line, 6);
        assert_eq!(turns[2].line, 7);
    }

    #[test]
    fn test_utterance_excludes_speaker_prefix() {
        let turns = extract_turns(SAMPLE);
        assert_eq!(turns[0].utterance, "xxx sit(ting) &=jumps www .");
    }

    #[test]
    fn test_continuation_lines_are_joined() {
        let turns = extract_turns(SAMPLE);
        assert_eq!(turns[2].utterance, "I want &=0to go outside .");
    }

    #[test]
    fn test_dependent_tier_continuation_is_ignored() {
        let turns = extract_turns("*CHI:\thello .\n%com:\tlong\n\tcomment\n");
        assert_eq!(turns.len(), 1);
        assert_eq!(turns[0].utterance, "hello .");
    }

    #[test]
    fn test_malformed_tier_is_skipped() {
        let turns = extract_turns("*CHI hello\n*:\tnobody\n*MOT:\tok .\n\torphan?\n");
        assert_eq!(turns.len(), 1);
        assert_eq!(turns[0].speaker, "MOT");
        assert_eq!(turns[0].utterance, "ok . orphan?");
    }

    #[test]
    fn test_windows_line_endings() {
        let turns = extract_turns("*CHI:\thi .\r\n*MOT:\tbye .\r\n");
        assert_eq!(turns[0].utterance, "hi .");
        assert_eq!(turns[1].utterance, "bye .");
    }

    #[test]
    fn test_media_bullets_are_removed() {
        let turns = extract_turns("*CHI:\twalk(ing) . \u{15}1230_2450\u{15}\n");
        assert_eq!(turns[0].utterance, "walk(ing) .");
    }

    #[test]
    fn test_unpaired_bullet_is_kept() {
        assert_eq!(strip_media_bullets("a \u{15}12"), "a \u{15}12");
        assert_eq!(strip_media_bullets("a \u{15}1_2\u{15} b"), "a  b");
    }

    #[test]
    fn test_filter_speakers() {
        let turns = extract_turns(SAMPLE);
        let filtered = filter_speakers(turns.clone(), &["MOT".to_string()]);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].speaker, "MOT");

        assert_eq!(filter_speakers(turns.clone(), &[]), turns);
    }
}
