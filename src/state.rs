use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use crate::error::Result;

/// Key under which the last-read release date is persisted.
pub const LAST_READ_RELEASE_DATE: &str = "releaseNote.lastRead";

/// Host-scoped key/value persistence.
pub trait StateStore {
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`; `None` clears the key.
    fn set(&mut self, key: &str, value: Option<&str>) -> Result<()>;
}

/// In-memory store for hosts without persistence and for tests.
#[derive(Debug, Default)]
pub struct MemoryStateStore {
    values: HashMap<String, String>,
}

impl MemoryStateStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for MemoryStateStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: Option<&str>) -> Result<()> {
        match value {
            Some(v) => self.values.insert(key.to_string(), v.to_string()),
            None => self.values.remove(key),
        };
        Ok(())
    }
}

/// Store backed by a JSON file under the platform data dir.
pub struct JsonStateStore {
    path: PathBuf,
    values: HashMap<String, String>,
}

impl JsonStateStore {
    /// Load the store from the default location, starting empty if the
    /// file is missing or unreadable.
    pub fn load() -> Self {
        Self::at_path(Self::get_state_path())
    }

    /// Load a store persisted at `path`.
    pub fn at_path(path: PathBuf) -> Self {
        let values = match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(values) => values,
                Err(e) => {
                    eprintln!("Failed to parse panel state: {}. Starting empty.", e);
                    HashMap::new()
                }
            },
            Err(_) => HashMap::new(),
        };

        Self { path, values }
    }

    /// Default state file path (cross-platform)
    pub fn get_state_path() -> PathBuf {
        let mut path = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("relnote");
        path.push("state.json");
        path
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(&self.values)?;
        fs::write(&self.path, json)?;

        Ok(())
    }
}

impl StateStore for JsonStateStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: Option<&str>) -> Result<()> {
        match value {
            Some(v) => self.values.insert(key.to_string(), v.to_string()),
            None => self.values.remove(key),
        };
        self.save()
    }
}
