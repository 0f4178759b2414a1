//! pdfchunk command-line entry point

use anyhow::Result;
use clap::Parser;
use pdfchunk_cli::commands::Commands;

/// Split PDF text into overlapping, length-bounded chunks
#[derive(Debug, Parser)]
#[command(name = "pdfchunk", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
