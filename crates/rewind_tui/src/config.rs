//! Display configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use ratatui::style::Color;
use rewind_tictactoe::Player;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// How the board is drawn.
///
/// Every field is optional in the file; missing ones take the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Color name or `#rrggbb` for X marks.
    x_color: String,

    /// Color name or `#rrggbb` for O marks.
    o_color: String,

    /// Show cell numbers (1-9) on empty squares.
    show_hints: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            x_color: "blue".to_string(),
            o_color: "red".to_string(),
            show_hints: true,
        }
    }
}

impl DisplayConfig {
    /// Loads the config at `path`, or the defaults when no path is given.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                debug!("No display config given, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        info!(x_color = %config.x_color, o_color = %config.o_color, "Config loaded successfully");
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [("x_color", &self.x_color), ("o_color", &self.o_color)] {
            value
                .parse::<Color>()
                .map_err(|_| ConfigError::new(format!("Unknown color for {}: {:?}", field, value)))?;
        }
        Ok(())
    }

    /// Color used for a player's marks.
    pub fn mark_color(&self, player: Player) -> Color {
        let name = match player {
            Player::X => &self.x_color,
            Player::O => &self.o_color,
        };
        name.parse().unwrap_or(Color::Reset)
    }
}

/// Configuration error with location tracking.
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
    /// Creates a new config error with caller location tracking.
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
