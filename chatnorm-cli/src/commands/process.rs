//! Process command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{filter_speakers, resolve_patterns, FileReader};
use crate::output::{create_formatter, OutputFormatter, TurnRecord};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use chatnorm_core::{Normalizer, NormalizerConfig};
use clap::Args;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

/// Arguments for the process command
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Input CHAT files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, otherwise text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Replacement for xxx/yyy/www (overrides the config file)
    #[arg(long, value_name = "TOKEN")]
    pub unknown_token: Option<String>,

    /// Only keep tiers from this speaker (repeatable)
    #[arg(short, long, value_name = "CODE")]
    pub speaker: Vec<String>,

    /// Process files in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// CHAT-style speaker tiers, one per line
    Text,
    /// JSON array of tiers with file, line and original text
    Json,
    /// Markdown formatted output
    Markdown,
}

impl ProcessArgs {
    /// Execute the process command
    pub fn execute(&self) -> Result<()> {
        self.init_logging()?;

        log::info!("Starting transcript normalization");
        log::debug!("Arguments: {:?}", self);

        let config = CliConfig::load(self.config.as_deref())?;
        let normalizer = self.build_normalizer(&config)?;

        let files = resolve_patterns(&self.input)?;
        let speakers = if self.speaker.is_empty() {
            config.input.speakers.clone()
        } else {
            self.speaker.clone()
        };

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        let records = if self.parallel {
            let threads = config.performance.thread_count();
            log::info!("Processing {} files on {} threads", files.len(), threads);
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .map_err(|e| CliError::ProcessingError(e.to_string()))?;
            pool.install(|| {
                files
                    .par_iter()
                    .map(|path| process_file(path, &normalizer, &speakers, &progress))
                    .collect::<Result<Vec<_>>>()
            })?
        } else {
            files
                .iter()
                .map(|path| process_file(path, &normalizer, &speakers, &progress))
                .collect::<Result<Vec<_>>>()?
        };

        progress.finish();

        let format = self.format.unwrap_or(config.output.default_format);
        let mut formatter = self.create_formatter(format, config.output.pretty_json)?;
        let mut total = 0usize;
        for record in records.iter().flatten() {
            formatter.format_turn(record)?;
            total += 1;
        }
        formatter.finish()?;

        log::info!("Normalized {} utterances from {} files", total, files.len());
        Ok(())
    }

    /// Build the normalizer: CLI token, then config file token, then default
    fn build_normalizer(&self, config: &CliConfig) -> Result<Normalizer> {
        let mut normalization: NormalizerConfig = config.normalization.clone();
        if let Some(token) = &self.unknown_token {
            normalization.unknown_token = token.clone();
        }

        let normalizer = Normalizer::new(normalization).map_err(CliError::from)?;
        log::debug!("Unknown token: {:?}", normalizer.unknown_token());
        Ok(normalizer)
    }

    fn create_formatter(
        &self,
        format: OutputFormat,
        pretty_json: bool,
    ) -> Result<Box<dyn OutputFormatter>> {
        match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Ok(create_formatter(format, BufWriter::new(file), pretty_json))
            }
            None => Ok(create_formatter(format, io::stdout(), pretty_json)),
        }
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A logger may already be installed when commands run in-process.
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }

        Ok(())
    }
}

/// Normalize every selected tier of one transcript
fn process_file(
    path: &Path,
    normalizer: &Normalizer,
    speakers: &[String],
    progress: &ProgressReporter,
) -> Result<Vec<TurnRecord>> {
    let turns = filter_speakers(FileReader::read_turns(path)?, speakers);
    let file = path.display().to_string();

    let records = turns
        .into_iter()
        .map(|turn| TurnRecord {
            file: file.clone(),
            line: turn.line,
            speaker: turn.speaker,
            normalized: normalizer.normalize(&turn.utterance),
            original: turn.utterance,
        })
        .collect();

    progress.file_completed(&file);
    Ok(records)
}
