//! Game configuration loaded from TOML.

use crate::games::tictactoe::{Mark, Player};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Player names for a game.
///
/// ```toml
/// player_a = "Ada"
/// player_b = "Grace"
/// ```
///
/// Player A always plays X and moves first; player B plays O.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Display name of the first player.
    #[serde(default = "default_player_a")]
    player_a: String,

    /// Display name of the second player.
    #[serde(default = "default_player_b")]
    player_b: String,
}

fn default_player_a() -> String {
    "Player X".to_string()
}

fn default_player_b() -> String {
    "Player O".to_string()
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_a: default_player_a(),
            player_b: default_player_b(),
        }
    }
}

impl GameConfig {
    /// Creates a configuration with the given names.
    pub fn new(player_a: impl Into<String>, player_b: impl Into<String>) -> Self {
        Self {
            player_a: player_a.into(),
            player_b: player_b.into(),
        }
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(player_a = %config.player_a, player_b = %config.player_b, "Config loaded");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    ///
    /// A file that exists but cannot be parsed is still an error.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Replaces names with any overrides that are present.
    pub fn with_overrides(mut self, player_a: Option<String>, player_b: Option<String>) -> Self {
        if let Some(name) = player_a {
            self.player_a = name;
        }
        if let Some(name) = player_b {
            self.player_b = name;
        }
        self
    }

    /// Builds the two players: A with X, B with O.
    pub fn players(&self) -> (Player, Player) {
        (
            Player::new(self.player_a.clone(), Mark::X),
            Player::new(self.player_b.clone(), Mark::O),
        )
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
