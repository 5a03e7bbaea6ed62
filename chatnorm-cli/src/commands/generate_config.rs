//! Generate config command implementation

use anyhow::{Context, Result};
use chatnorm_core::config::defaults;
use chatnorm_core::NormalizerConfig;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Unknown token to write into the template
    #[arg(long, value_name = "TOKEN", default_value = defaults::UNKNOWN_TOKEN)]
    pub unknown_token: String,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        // Refuse to write a template that `validate` would reject.
        let normalization = NormalizerConfig::builder()
            .unknown_token(self.unknown_token.clone())
            .build()
            .map_err(crate::error::CliError::from)?;

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        let template = generate_template(&normalization)?;

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the configuration file");
        println!("2. Validate your configuration:");
        println!("   chatnorm validate --config {}", self.output.display());
        println!("3. Use it for processing:");
        println!(
            "   chatnorm process -i 'corpus/**/*.cha' --config {}",
            self.output.display()
        );

        Ok(())
    }
}

/// Generate template configuration content
fn generate_template(normalization: &NormalizerConfig) -> Result<String> {
    let normalization = toml::to_string(normalization).context("Failed to render template")?;
    Ok(format!(
        r#"# chatnorm configuration

[normalization]
# Replacement for the unidentifiable markers xxx, yyy and www.
# Must come out of normalization unchanged.
{normalization}
[input]
# Speaker codes to keep, e.g. ["CHI", "MOT"]. Empty keeps every speaker.
speakers = []

[output]
# One of "text", "json", "markdown"
default_format = "text"
pretty_json = true

[performance]
# Threads used with --parallel (0 = all cores)
worker_threads = 0
"#
    ))
}
