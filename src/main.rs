//! Strictly Grid - terminal tic-tac-toe on an N×N board.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use strictly_grid::{Console, GameConfig};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so they never interleave with the board on stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    run(cli)
}

/// Resolves configuration and plays until the players quit.
#[instrument(skip(cli))]
fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::default(),
    }
    .with_overrides(cli.size, cli.player_one, cli.player_two)?;

    info!(?config, "Starting session");

    let stdin = std::io::stdin();
    let mut console = Console::new(stdin.lock(), std::io::stdout());
    console.run(&config)
}
