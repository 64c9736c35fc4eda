//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use crate::config::CliConfig;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template()?;

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Use it for comparing:");
        println!(
            "   overlap compare -a first.txt -b second.txt --config {}",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template configuration content
    fn generate_template(&self) -> Result<String> {
        let defaults = CliConfig::default().to_toml()?;

        Ok(format!(
            r#"# Configuration for overlap
#
# [comparison]
# default_mode: lines, sentences, or substrings
# substring_length: positive integer, required for substrings
#   unless --length is given
#
# [output]
# format: text, html, or json
# highlight_class: CSS class put on highlight spans (optional)
# pretty_json: indent JSON output

{defaults}"#
        ))
    }
}
