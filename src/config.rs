//! Application configuration file
//!
//! An optional JSON file groups the settings of every part of the program.
//! Missing sections and fields fall back to their defaults:
//!
//! ```json
//! {
//!   "game": { "initial_tiles": 2, "seed": 42 },
//!   "play": { "frame_rate_hz": 60 },
//!   "simulate": { "max_moves": 10000 }
//! }
//! ```

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::game::GameConfig;
use crate::modes::{PlayConfig, SimulateConfig};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub play: PlayConfig,
    pub simulate: SimulateConfig,
}

impl AppConfig {
    /// Load a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        let config: AppConfig = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse config file {:?}", path))?;
        Ok(config)
    }

    /// Validate every section
    pub fn validate(&self) -> Result<()> {
        self.game
            .validate()
            .and_then(|()| self.play.validate())
            .map_err(|msg| anyhow!("invalid configuration: {msg}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{ "game": { "seed": 4 }, "play": {} }"#).unwrap();

        assert_eq!(config.game.seed, Some(4));
        assert_eq!(config.game.initial_tiles, 2);
        assert_eq!(config.play, PlayConfig::default());
        assert_eq!(config.simulate, SimulateConfig::default());
    }

    #[test]
    fn test_invalid_section_is_reported() {
        let mut config = AppConfig::default();
        config.play.frame_rate_hz = 0;

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("frame_rate_hz"));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("x2048-config-{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "simulate": { "max_moves": 12 } }"#).unwrap();

        let config = AppConfig::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.simulate.max_moves, 12);
        assert_eq!(config.game, GameConfig::default());
    }

    #[test]
    fn test_missing_file_fails_with_context() {
        let err = AppConfig::load(Path::new("/nonexistent/x2048.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
