//! Match configuration, loadable from TOML.

use super::Player;
use super::opponent::Difficulty;
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Whether the computer takes one side.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum PlayMode {
    /// Two humans share the board.
    #[default]
    TwoPlayer,
    /// A human plays against the computer opponent.
    Computer,
}

/// Settings for a game session.
///
/// ```toml
/// mode = "computer"
/// difficulty = "hard"
/// computer = "O"
/// seed = 42
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct GameConfig {
    /// Two-player or against the computer.
    #[serde(default)]
    mode: PlayMode,

    /// Strength of the computer opponent.
    #[serde(default)]
    difficulty: Difficulty,

    /// Mark played by the computer.
    #[serde(default = "default_computer")]
    computer: Player,

    /// Seed for the easy opponent's random moves.
    #[serde(default)]
    #[setters(strip_option)]
    seed: Option<u64>,
}

fn default_computer() -> Player {
    Player::O
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: PlayMode::default(),
            difficulty: Difficulty::default(),
            computer: default_computer(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Parses configuration from a TOML string.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml_str(&content)?;
        info!(mode = %config.mode, difficulty = %config.difficulty, "Config loaded successfully");
        Ok(config)
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
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
