//! Strictly Tic-Tac-Toe - terminal host
//!
//! Wires configuration, logging and stdin/stdout to the game engine.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use strictly_tictactoe::{GameConfig, GameEngine, OutputFormat};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing();

    let config = GameConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?
        .with_overrides(cli.player_a, cli.player_b);
    info!(player_a = %config.player_a(), player_b = %config.player_b(), "Starting game");

    let mut engine = GameEngine::from_config(&config);
    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    strictly_tictactoe::run(&mut engine, stdin.lock(), stdout.lock(), format)?;

    info!("Goodbye");
    Ok(())
}

/// Logs go to stderr so stdout carries only the game.
fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
