//! CLI command implementations

use anyhow::Result;
use clap::{Subcommand, ValueEnum};
use overlap_core::Mode;

pub mod compare;
pub mod generate_config;

use compare::OutputFormat;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Compare two documents and highlight what they share
    Compare(compare::CompareArgs),

    /// Write a configuration file template
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
    /// List available comparison modes
    Modes,

    /// List available output formats
    Formats,
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Compare(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List { subcommand } => {
                print!("{}", subcommand.listing());
                Ok(())
            }
        }
    }
}

impl ListCommands {
    /// Text printed for this listing
    pub fn listing(&self) -> String {
        match self {
            ListCommands::Modes => Mode::NAMES
                .iter()
                .map(|name| {
                    let description = Mode::description(name).unwrap_or_default();
                    format!("{name:<12}{description}\n")
                })
                .collect(),
            ListCommands::Formats => OutputFormat::value_variants()
                .iter()
                .map(|format| format!("{:<12}{}\n", format.name(), format.description()))
                .collect(),
        }
    }
}
