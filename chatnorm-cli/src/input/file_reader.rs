//! File reading utilities

use super::transcript::{extract_turns, SpeakerTurn};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Transcript file reader with UTF-8 validation
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }

    /// Read a CHAT file and extract its speaker tiers
    pub fn read_turns(path: &Path) -> Result<Vec<SpeakerTurn>> {
        let content = Self::read_text(path)?;
        let turns = extract_turns(&content);
        log::debug!("{}: {} speaker tiers", path.display(), turns.len());
        Ok(turns)
    }
}
