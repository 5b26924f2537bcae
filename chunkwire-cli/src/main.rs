//! Chunkwire command-line entry point

use anyhow::Result;
use chunkwire_cli::commands::{init_logging, Commands};
use clap::Parser;

/// Split messages into size-bounded chunks and put them back together
#[derive(Debug, Parser)]
#[command(name = "chunkwire", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Suppress log output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);
    cli.command.execute()
}
