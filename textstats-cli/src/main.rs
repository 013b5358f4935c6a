//! textstats command-line entry point

use clap::Parser;
use textstats_cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
