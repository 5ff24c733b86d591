//! Pitwall CLI - Command-line interface
//!
//! Provides command-line access to the race simulator.

mod commands;

use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pitwall")]
#[command(about = "A pit-strategy race simulator")]
struct Cli {
    #[command(subcommand)]
    command: commands::Commands,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    commands::handle_command(cli.command)
}
