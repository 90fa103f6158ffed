//! Engine configuration.
//!
//! Loaded from TOML. Every field has a default, so an empty file (or no
//! file at all) yields a standard three-to-four player game:
//!
//! ```toml
//! min_players = 3
//! max_players = 4
//! state_path = "wolf_state.bin"
//! # seed = 42
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::error::{Result, WolfError};

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "WOLF_CONFIG";

/// Config file used when `WOLF_CONFIG` is unset.
pub const DEFAULT_CONFIG_PATH: &str = "config/wolf.toml";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Smallest roster a session will start a game with.
    pub min_players: usize,

    /// Largest roster a session will start a game with.
    pub max_players: usize,

    /// Where the session snapshot is stored.
    pub state_path: PathBuf,

    /// Fixed seed for the wolf rotation. `None` draws from entropy.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_players: 3,
            max_players: 4,
            state_path: PathBuf::from("wolf_state.bin"),
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Load config from a TOML file. Falls back to defaults if the file is
    /// missing or unparseable.
    pub fn load() -> Self {
        let path =
            std::env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        match std::fs::read_to_string(&path) {
            Ok(content) => match Self::from_toml_str(&content) {
                Ok(cfg) => cfg,
                Err(e) => {
                    tracing::warn!("Failed to parse {path}: {e}, using defaults");
                    EngineConfig::default()
                },
            },
            Err(_) => EngineConfig::default(),
        }
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let cfg: EngineConfig =
            toml::from_str(content).map_err(|e| WolfError::Config(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check that the player bounds make sense.
    pub fn validate(&self) -> Result<()> {
        if self.min_players == 0 || self.min_players > self.max_players {
            return Err(WolfError::Config(format!(
                "invalid player bounds {}..={}",
                self.min_players, self.max_players
            )));
        }
        Ok(())
    }

    /// Check a roster size against the configured bounds.
    pub fn check_player_count(&self, count: usize) -> Result<()> {
        if (self.min_players..=self.max_players).contains(&count) {
            Ok(())
        } else {
            Err(WolfError::PlayerCount {
                count,
                min: self.min_players,
                max: self.max_players,
            })
        }
    }
}
