//! Engine configuration loaded from TOML.

use crate::games::tictactoe::Difficulty;
use crate::settings::{FirstPlayer, SessionSettings};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Configuration for a game session and its front end.
///
/// ```toml
/// difficulty = "medium"
/// first_player = "human"
/// reply_delay_ms = 300
/// seed = 7
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Computer reply policy.
    #[serde(default)]
    difficulty: Difficulty,

    /// Who opens each round.
    #[serde(default)]
    first_player: FirstPlayer,

    /// Pause before each computer reply, in milliseconds.
    #[serde(default = "default_reply_delay_ms")]
    reply_delay_ms: u64,

    /// Fixed RNG seed for reproducible play.
    #[serde(default)]
    seed: Option<u64>,
}

fn default_reply_delay_ms() -> u64 {
    300
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            first_player: FirstPlayer::default(),
            reply_delay_ms: default_reply_delay_ms(),
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(difficulty = %config.difficulty, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the file if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Overrides the difficulty.
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Overrides who opens.
    pub fn with_first_player(mut self, first_player: FirstPlayer) -> Self {
        self.first_player = first_player;
        self
    }

    /// Overrides the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Overrides the reply delay.
    pub fn with_reply_delay_ms(mut self, reply_delay_ms: u64) -> Self {
        self.reply_delay_ms = reply_delay_ms;
        self
    }

    /// Pause before each computer reply.
    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }

    /// Settings for a [`GameSession`](crate::GameSession).
    pub fn session_settings(&self) -> SessionSettings {
        SessionSettings::new(self.difficulty, self.first_player, self.seed)
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(EngineConfig::from_toml("").unwrap(), EngineConfig::default());
    }

    #[test]
    fn test_full_toml() {
        let config = EngineConfig::from_toml(
            r#"
            difficulty = "easy"
            first_player = "ai"
            reply_delay_ms = 0
            seed = 7
            "#,
        )
        .unwrap();
        assert_eq!(*config.difficulty(), Difficulty::Easy);
        assert_eq!(*config.first_player(), FirstPlayer::Ai);
        assert_eq!(config.reply_delay(), Duration::ZERO);
        assert_eq!(*config.session_settings().seed(), Some(7));
    }

    #[test]
    fn test_bad_difficulty_is_error() {
        let err = EngineConfig::from_toml(r#"difficulty = "brutal""#).unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }
}
