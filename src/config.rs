//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use noughts_rules::{GameSession, IllegalMovePolicy, Seat};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings applied to a new game session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Name shown for seat one (X).
    #[serde(default = "default_player_one")]
    player_one_name: String,

    /// Name shown for seat two (O).
    #[serde(default = "default_player_two")]
    player_two_name: String,

    /// How illegal moves are reported.
    #[serde(default)]
    illegal_moves: IllegalMovePolicy,
}

fn default_player_one() -> String {
    Seat::One.default_name().to_string()
}

fn default_player_two() -> String {
    Seat::Two.default_name().to_string()
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_one_name: default_player_one(),
            player_two_name: default_player_two(),
            illegal_moves: IllegalMovePolicy::default(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(
            player_one = %config.player_one_name,
            player_two = %config.player_two_name,
            policy = ?config.illegal_moves,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Builds a session with these names and this policy.
    #[instrument(skip(self))]
    pub fn build_session(&self) -> GameSession {
        let mut session = GameSession::with_policy(self.illegal_moves);
        session.rename_player(Seat::One, &self.player_one_name);
        session.rename_player(Seat::Two, &self.player_two_name);
        session
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
    /// Creates a new configuration error at the caller's location.
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
