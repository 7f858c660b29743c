//! termtag: find dictionary terms in text files

use clap::Parser;
use termtag_cli::commands::Commands;

/// Dictionary-based term annotation
#[derive(Debug, Parser)]
#[command(name = "termtag", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
