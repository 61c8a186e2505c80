/// Session-level settings.  Gameplay tuning lives as constants in each module;
/// this only covers what a player or packager might reasonably change.

use std::path::Path;

use serde::Deserialize;
use tracing::warn;

use crate::error::GameError;

/// Environment variable naming an optional JSON config file.
pub const CONFIG_ENV: &str = "PLATFORMER_CONFIG";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub max_levels: u32,
    pub start_lives: u32,
    /// Visible world width, in world units.
    pub view_width: f32,
    pub view_height: f32,
    /// Target frame duration.
    pub frame_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            max_levels: 100,
            start_lives: 3,
            view_width: 360.0,
            view_height: 640.0,
            frame_ms: 16,
        }
    }
}

impl GameConfig {
    pub fn from_json(text: &str) -> Result<GameConfig, GameError> {
        let config: GameConfig = serde_json::from_str(text)?;
        Ok(config.sanitized())
    }

    pub fn from_file(path: &Path) -> Result<GameConfig, GameError> {
        let text = std::fs::read_to_string(path)?;
        GameConfig::from_json(&text)
    }

    /// Read the file named by `PLATFORMER_CONFIG`, falling back to defaults
    /// when it is unset or unreadable.
    pub fn load() -> GameConfig {
        let Ok(path) = std::env::var(CONFIG_ENV) else {
            return GameConfig::default();
        };
        match GameConfig::from_file(Path::new(&path)) {
            Ok(config) => config,
            Err(err) => {
                warn!(%path, %err, "ignoring config file");
                GameConfig::default()
            }
        }
    }

    /// Zero levels, lives or view size would make the game unplayable.
    fn sanitized(mut self) -> GameConfig {
        self.max_levels = self.max_levels.max(1);
        self.view_width = self.view_width.max(1.0);
        self.view_height = self.view_height.max(1.0);
        self.start_lives = self.start_lives.max(1);
        self.frame_ms = self.frame_ms.max(1);
        self
    }
}
