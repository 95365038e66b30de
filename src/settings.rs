//! Game configuration, loadable from json
use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// largest interior dimension accepted
pub const MAX_SIZE: u16 = 1024;

/// Settings for a single game
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct GameSettings {
    /// interior dimension of the square grid, border excluded
    pub size: u16,
    /// seed for respawn placement. when absent placement is seeded from entropy
    pub seed: Option<u64>,
    /// random placement attempts before falling back to a scan for free cells
    pub respawn_attempts: u32,
}

impl Default for GameSettings {
    fn default() -> Self {
        GameSettings {
            size: 10,
            seed: None,
            respawn_attempts: 32,
        }
    }
}

impl GameSettings {
    /// default settings for a grid of the given size
    pub fn with_size(size: u16) -> Self {
        GameSettings {
            size,
            ..Default::default()
        }
    }

    /// parses and validates settings from a json document
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let settings: GameSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    #[allow(missing_docs)]
    pub fn validate(&self) -> Result<(), GameError> {
        if self.size == 0 {
            return Err(GameError::InvalidSettings(
                "size must be positive".to_string(),
            ));
        }
        if self.size > MAX_SIZE {
            return Err(GameError::InvalidSettings(format!(
                "size {} is larger than {}",
                self.size, MAX_SIZE
            )));
        }
        Ok(())
    }
}
