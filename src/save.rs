/// Progress persistence: a small JSON record behind a swappable store.
///
/// Last write wins.  A record that fails to parse is replaced by defaults
/// and written back; storage errors are logged and play continues.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::GameError;

/// Fields missing from a stored record fall back to their defaults.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SaveData {
    /// Highest level reached.
    pub level: u32,
    pub best_score: u32,
    pub coins: u32,
    #[serde(alias = "sound")]
    pub sound_enabled: bool,
}

impl Default for SaveData {
    fn default() -> Self {
        SaveData {
            level: 1,
            best_score: 0,
            coins: 0,
            sound_enabled: true,
        }
    }
}

/// Where the serialized record lives.
pub trait SaveStore {
    /// `Ok(None)` when nothing has been saved yet.
    fn read(&self) -> Result<Option<String>, GameError>;
    fn write(&mut self, contents: &str) -> Result<(), GameError>;
    fn remove(&mut self) -> Result<(), GameError>;
}

/// Save file under the user's home directory.
#[derive(Clone, Debug)]
pub struct FileStore {
    pub path: PathBuf,
}

impl FileStore {
    pub fn new(path: PathBuf) -> Self {
        FileStore { path }
    }

    pub fn default_path() -> PathBuf {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home).join(".extreme_platformer_save.json")
    }
}

impl SaveStore for FileStore {
    fn read(&self) -> Result<Option<String>, GameError> {
        match std::fs::read_to_string(&self.path) {
            Ok(text) => Ok(Some(text)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write(&mut self, contents: &str) -> Result<(), GameError> {
        std::fs::write(&self.path, contents)?;
        Ok(())
    }

    fn remove(&mut self) -> Result<(), GameError> {
        match std::fs::remove_file(&self.path) {
            Err(err) if err.kind() != std::io::ErrorKind::NotFound => Err(err.into()),
            _ => Ok(()),
        }
    }
}

/// In-memory store, handy for tests and headless runs.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    pub contents: Option<String>,
}

impl SaveStore for MemoryStore {
    fn read(&self) -> Result<Option<String>, GameError> {
        Ok(self.contents.clone())
    }

    fn write(&mut self, contents: &str) -> Result<(), GameError> {
        self.contents = Some(contents.to_string());
        Ok(())
    }

    fn remove(&mut self) -> Result<(), GameError> {
        self.contents = None;
        Ok(())
    }
}

pub struct SaveManager<S: SaveStore> {
    store: S,
    data: SaveData,
}

impl<S: SaveStore> SaveManager<S> {
    /// Open the store and load the record, repairing it if corrupt.
    pub fn new(store: S) -> Self {
        let mut manager = SaveManager {
            store,
            data: SaveData::default(),
        };
        manager.load();
        manager
    }

    pub fn data(&self) -> &SaveData {
        &self.data
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn load(&mut self) {
        let raw = match self.store.read() {
            Ok(Some(raw)) => raw,
            Ok(None) => return,
            Err(err) => {
                warn!(%err, "save unreadable, using defaults");
                self.data = SaveData::default();
                return;
            }
        };
        match serde_json::from_str::<SaveData>(&raw) {
            Ok(data) => self.data = data,
            Err(err) => {
                warn!(%err, "save corrupted, resetting");
                self.data = SaveData::default();
                self.save();
            }
        }
    }

    pub fn save(&mut self) {
        let result = serde_json::to_string(&self.data)
            .map_err(GameError::from)
            .and_then(|json| self.store.write(&json));
        if let Err(err) = result {
            warn!(%err, "failed to write save");
        }
    }

    /// Only ever raises the stored level.
    pub fn set_level(&mut self, level: u32) {
        if level > self.data.level {
            self.data.level = level;
            self.save();
        }
    }

    pub fn add_coins(&mut self, amount: u32) {
        self.data.coins = self.data.coins.saturating_add(amount);
        self.save();
    }

    /// Only ever raises the stored best score.
    pub fn set_best_score(&mut self, score: u32) {
        if score > self.data.best_score {
            self.data.best_score = score;
            self.save();
        }
    }

    pub fn toggle_sound(&mut self) -> bool {
        self.data.sound_enabled = !self.data.sound_enabled;
        self.save();
        self.data.sound_enabled
    }

    pub fn reset_all(&mut self) {
        if let Err(err) = self.store.remove() {
            warn!(%err, "failed to remove save");
        }
        self.data = SaveData::default();
        self.save();
    }
}
