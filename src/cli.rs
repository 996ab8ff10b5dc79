//! Command-line interface for strictly_tictactoe.

use clap::Parser;
use std::path::PathBuf;

/// Strictly Tic-Tac-Toe - two players, one terminal
#[derive(Parser, Debug)]
#[command(name = "strictly_tictactoe")]
#[command(about = "Play tic-tac-toe on the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the game config file (player names)
    #[arg(short, long, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Name of player A (plays X, moves first)
    #[arg(long)]
    pub player_a: Option<String>,

    /// Name of player B (plays O)
    #[arg(long)]
    pub player_b: Option<String>,

    /// Print each turn result as JSON instead of plain text
    #[arg(long)]
    pub json: bool,
}
