//! Durable key-value storage for user preferences.
//!
//! The active language is the only value the crate writes, under
//! [`LANGUAGE_KEY`]. The file backend keeps other keys it finds untouched.

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use serde_json::{Map, Value};

use crate::error::{I18nError, I18nResult};

/// Storage key holding the persisted language code.
pub const LANGUAGE_KEY: &str = "language";

/// Directory name under the platform config dir.
pub const APP_DIR_NAME: &str = "ad-i18n";

pub const PREFERENCES_FILE_NAME: &str = "preferences.json";

pub trait PreferenceStore {
    fn get(&self, key: &str) -> I18nResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> I18nResult<()>;
}

/// In-process store; nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> I18nResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> I18nResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// A JSON object file, e.g. `{"language": "es"}`.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<config dir>/ad-i18n/preferences.json`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(PREFERENCES_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> I18nResult<Map<String, Value>> {
        if !self.path.exists() {
            return Ok(Map::new());
        }
        let content = fs::read_to_string(&self.path).map_err(|source| I18nError::Storage {
            path: self.path.clone(),
            source,
        })?;
        if content.trim().is_empty() {
            return Ok(Map::new());
        }
        serde_json::from_str(&content).map_err(|source| I18nError::StorageFormat {
            path: self.path.clone(),
            source,
        })
    }

    fn write_map(&self, map: &Map<String, Value>) -> I18nResult<()> {
        let io_err = |source| I18nError::Storage {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let content = serde_json::to_string_pretty(map).map_err(|source| I18nError::StorageFormat {
            path: self.path.clone(),
            source,
        })?;
        fs::write(&self.path, content + "\n").map_err(io_err)
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> I18nResult<Option<String>> {
        let map = self.read_map()?;
        Ok(match map.get(key) {
            Some(Value::String(s)) => Some(s.clone()),
            // Resolution rejects these as malformed.
            Some(other) => Some(other.to_string()),
            None => None,
        })
    }

    /// A file holding invalid JSON is overwritten.
    fn set(&mut self, key: &str, value: &str) -> I18nResult<()> {
        let mut map = match self.read_map() {
            Err(err @ I18nError::StorageFormat { .. }) => {
                log::warn!("{}; overwriting it", err);
                Map::new()
            }
            other => other?,
        };
        map.insert(key.to_string(), Value::String(value.to_string()));
        self.write_map(&map)?;
        log::debug!("stored {}={} in {:?}", key, value, self.path);
        Ok(())
    }
}
