use serde::{Deserialize, Serialize};

use super::grid::GRID_SIZE;

/// Configuration for a game session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Tiles spawned onto the empty grid when a session starts
    pub initial_tiles: usize,
    /// Seed for the spawn RNG, entropy when unset
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            initial_tiles: 2,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with a fixed seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Default::default()
        }
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> Result<(), String> {
        if self.initial_tiles > GRID_SIZE * GRID_SIZE {
            return Err(format!(
                "initial_tiles must be at most {}, got {}",
                GRID_SIZE * GRID_SIZE,
                self.initial_tiles
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.initial_tiles, 2);
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_seeded_config() {
        let config = GameConfig::seeded(99);
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.initial_tiles, 2);
    }

    #[test]
    fn test_too_many_initial_tiles() {
        let config = GameConfig {
            initial_tiles: 17,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{ "seed": 5 }"#).unwrap();
        assert_eq!(config, GameConfig::seeded(5));
    }
}
