//! Output formatting module

use crate::commands::process::OutputFormat;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// One normalized speaker tier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Transcript the tier came from
    pub file: String,
    /// 1-based line number of the tier
    pub line: usize,
    /// Speaker code
    pub speaker: String,
    /// Utterance as found in the transcript
    pub original: String,
    /// Utterance after normalization
    pub normalized: String,
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single normalized tier
    fn format_turn(&mut self, record: &TurnRecord) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

/// Create the formatter for `format` writing to `writer`
pub fn create_formatter<W: Write + Send + Sync + 'static>(
    format: OutputFormat,
    writer: W,
    pretty_json: bool,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
    }
}
