//! Command-line entry point for overlap

use clap::Parser;
use overlap_cli::commands::Commands;

/// Find and highlight content shared by two text documents
#[derive(Debug, Parser)]
#[command(name = "overlap", version, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = cli.command.execute() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
