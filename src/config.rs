//! Game configuration loaded from TOML.

use crate::games::grid::{DEFAULT_PLAYER_ONE, DEFAULT_PLAYER_TWO, MIN_BOARD_SIZE};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for a play session.
///
/// Every field is optional in the file:
///
/// ```toml
/// board_size = 4
/// player_one = "Alice"
/// player_two = "Bob"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Side length of the board. `None` means ask interactively.
    #[serde(default)]
    board_size: Option<usize>,

    /// Display name of the player who moves first.
    #[serde(default = "default_player_one")]
    player_one: String,

    /// Display name of the second player.
    #[serde(default = "default_player_two")]
    player_two: String,
}

fn default_player_one() -> String {
    DEFAULT_PLAYER_ONE.to_string()
}

fn default_player_two() -> String {
    DEFAULT_PLAYER_TWO.to_string()
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: None,
            player_one: default_player_one(),
            player_two: default_player_two(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed, or if
    /// it names a board size below [`MIN_BOARD_SIZE`].
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        if let Some(size) = config.board_size {
            validate_size(size)?;
        }

        info!(board_size = ?config.board_size, "Config loaded successfully");
        Ok(config)
    }

    /// Applies command-line overrides on top of this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the override size is below [`MIN_BOARD_SIZE`].
    #[instrument(skip(self, player_one, player_two))]
    pub fn with_overrides(
        mut self,
        board_size: Option<usize>,
        player_one: Option<String>,
        player_two: Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(size) = board_size {
            self.board_size = Some(validate_size(size)?);
        }
        if let Some(name) = player_one {
            self.player_one = name;
        }
        if let Some(name) = player_two {
            self.player_two = name;
        }
        Ok(self)
    }
}

/// Checks a board size against [`MIN_BOARD_SIZE`].
///
/// # Errors
///
/// Returns [`ConfigError`] for sizes that are too small.
#[track_caller]
pub fn validate_size(size: usize) -> Result<usize, ConfigError> {
    if size < MIN_BOARD_SIZE {
        return Err(ConfigError::new(format!(
            "Board size must be at least {}, got {}",
            MIN_BOARD_SIZE, size
        )));
    }
    Ok(size)
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
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
