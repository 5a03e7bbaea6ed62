//! chatnorm command-line entry point

use anyhow::Result;
use chatnorm_cli::commands::Commands;
use clap::Parser;

/// Normalize inline markup in CHAT child-language transcripts
#[derive(Debug, Parser)]
#[command(name = "chatnorm", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
