//! Plain text output formatter

use super::{OutputFormatter, TurnRecord};
use anyhow::Result;
use std::io::Write;

/// Plain text formatter - outputs one CHAT speaker tier per line
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_turn(&mut self, record: &TurnRecord) -> Result<()> {
        writeln!(self.writer, "*{}:\t{}", record.speaker, record.normalized)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
