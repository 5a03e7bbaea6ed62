//! CLI command implementations

use crate::error::CliResult;
use chatnorm_core::Stage;
use clap::{Subcommand, ValueEnum};

pub mod explain;
pub mod generate_config;
pub mod process;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Normalize utterances in CHAT transcript files
    Process(process::ProcessArgs),

    /// Show an utterance after each normalization stage
    Explain(explain::ExplainArgs),

    /// Validate a configuration file
    Validate(validate::ValidateArgs),

    /// Generate a configuration file template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available output formats
    Formats,

    /// List normalization stages in the order they run
    Stages,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> CliResult<()> {
        match self {
            Commands::Process(args) => args.execute(),
            Commands::Explain(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List { subcommand } => {
                subcommand.execute();
                Ok(())
            }
        }
    }
}

impl ListCommands {
    fn execute(&self) {
        match self {
            ListCommands::Formats => {
                println!("Available output formats:");
                for format in process::OutputFormat::value_variants() {
                    if let Some(value) = format.to_possible_value() {
                        println!("  {:<10} {}", value.get_name(), format_description(*format));
                    }
                }
            }
            ListCommands::Stages => {
                println!("Normalization stages (in order):");
                for (index, stage) in Stage::ALL.iter().enumerate() {
                    println!("  {}. {}", index + 1, stage);
                }
            }
        }
    }
}

fn format_description(format: process::OutputFormat) -> &'static str {
    match format {
        process::OutputFormat::Text => "Speaker tiers, one per line (*CHI:\\t...)",
        process::OutputFormat::Json => "JSON array with file, line and original text",
        process::OutputFormat::Markdown => "Markdown sections per transcript",
    }
}
