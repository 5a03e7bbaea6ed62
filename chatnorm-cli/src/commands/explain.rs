//! Explain command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use anyhow::Result;
use chatnorm_core::{Normalizer, StageOutput};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the explain command
#[derive(Debug, Args)]
pub struct ExplainArgs {
    /// Utterance to normalize (speaker code removed)
    #[arg(value_name = "UTTERANCE")]
    pub utterance: String,

    /// Replacement for xxx/yyy/www (overrides the config file)
    #[arg(long, value_name = "TOKEN")]
    pub unknown_token: Option<String>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl ExplainArgs {
    /// Execute the explain command
    pub fn execute(&self) -> Result<()> {
        let config = CliConfig::load(self.config.as_deref())?;
        let mut normalization = config.normalization;
        if let Some(token) = &self.unknown_token {
            normalization.unknown_token = token.clone();
        }
        let normalizer = Normalizer::new(normalization).map_err(CliError::from)?;

        print!("{}", render(&self.utterance, &normalizer.trace(&self.utterance)));
        Ok(())
    }
}

fn render(utterance: &str, trace: &[StageOutput]) -> String {
    let width = trace
        .iter()
        .map(|output| output.stage.as_str().len())
        .max()
        .unwrap_or(0)
        .max("input".len());

    let mut out = format!("{:<width$}  {}\n", "input", utterance);
    for output in trace {
        let marker = if output.changed { "*" } else { " " };
        out.push_str(&format!(
            "{:<width$} {}{}\n",
            output.stage.as_str(),
            marker,
            output.text
        ));
    }
    out
}
