//! Markdown output formatter

use super::{OutputFormatter, TurnRecord};
use anyhow::Result;
use std::io::Write;

/// Markdown formatter - one section per transcript, tiers as a numbered list
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    current_file: Option<String>,
    file_count: usize,
    turn_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            current_file: None,
            file_count: 0,
            turn_count: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_turn(&mut self, record: &TurnRecord) -> Result<()> {
        if self.current_file.as_deref() != Some(record.file.as_str()) {
            if self.current_file.is_some() {
                writeln!(self.writer)?;
            }
            writeln!(self.writer, "## {}", record.file)?;
            writeln!(self.writer)?;
            self.current_file = Some(record.file.clone());
            self.file_count += 1;
        }

        self.turn_count += 1;
        writeln!(
            self.writer,
            "{}. **{}**: {}",
            self.turn_count, record.speaker, record.normalized
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(
            self.writer,
            "*Total utterances: {} in {} file(s)*",
            self.turn_count, self.file_count
        )?;
        self.writer.flush()?;
        Ok(())
    }
}
