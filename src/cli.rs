//! Command-line interface for strictly_grid.

use clap::Parser;

/// Strictly Grid - two-player tic-tac-toe on an N×N board
#[derive(Parser, Debug)]
#[command(name = "strictly_grid")]
#[command(about = "Two-player tic-tac-toe on any board size", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Board side length (minimum 3). Prompted for when omitted.
    #[arg(short, long)]
    pub size: Option<usize>,

    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// Name of the player who moves first (X)
    #[arg(long)]
    pub player_one: Option<String>,

    /// Name of the second player (O)
    #[arg(long)]
    pub player_two: Option<String>,
}
