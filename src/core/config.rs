//! Session configuration.
//!
//! `SessionConfig` fixes the rules a session plays by:
//! - Roster limits (`min_players`, `max_players`)
//! - Lives per player and whether skipping costs one
//! - Emoji palette handed out by join position
//! - RNG seed (`None` seeds from the OS)
//!
//! Configs load from JSON; every field has a default so partial files work.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::player::PLAYER_EMOJIS;

/// Errors from loading or validating a `SessionConfig`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("min_players ({min}) must be between 1 and max_players ({max})")]
    PlayerLimits { min: usize, max: usize },
    #[error("emoji palette has {palette} entries but max_players is {max}")]
    PaletteTooShort { palette: usize, max: usize },
    #[error("starting_health must be at least 1")]
    ZeroHealth,
}

/// Rules for one quiz session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Players needed before the game can start.
    pub min_players: usize,

    /// Roster capacity.
    pub max_players: usize,

    /// Lives each player joins with.
    pub starting_health: u8,

    /// Elimination variant: skipping costs a life, zero lives removes the player.
    pub health_variant: bool,

    /// Emoji by join position. Must cover `max_players` slots.
    pub emojis: Vec<String>,

    /// RNG seed for question draws. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            min_players: 2,
            max_players: 8,
            starting_health: 3,
            health_variant: true,
            emojis: PLAYER_EMOJIS.iter().map(|e| (*e).to_string()).collect(),
            seed: None,
        }
    }
}

impl SessionConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a fixed RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the lives each player starts with.
    #[must_use]
    pub fn with_starting_health(mut self, health: u8) -> Self {
        self.starting_health = health;
        self
    }

    /// Enable or disable the elimination variant.
    #[must_use]
    pub fn with_health_variant(mut self, enabled: bool) -> Self {
        self.health_variant = enabled;
        self
    }

    /// Set roster limits.
    #[must_use]
    pub fn with_player_limits(mut self, min: usize, max: usize) -> Self {
        self.min_players = min;
        self.max_players = max;
        self
    }

    /// Emoji for the player joining at roster position `slot`.
    #[must_use]
    pub fn emoji_for_slot(&self, slot: usize) -> &str {
        self.emojis.get(slot).map_or("", String::as_str)
    }

    /// Check the limits are coherent.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_players == 0 || self.min_players > self.max_players {
            return Err(ConfigError::PlayerLimits {
                min: self.min_players,
                max: self.max_players,
            });
        }
        if self.emojis.len() < self.max_players {
            return Err(ConfigError::PaletteTooShort {
                palette: self.emojis.len(),
                max: self.max_players,
            });
        }
        if self.starting_health == 0 {
            return Err(ConfigError::ZeroHealth);
        }
        Ok(())
    }

    /// Parse and validate a config from JSON.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a config file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&content)
    }
}
