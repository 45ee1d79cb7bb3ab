//! Durable Key-Value Storage
//!
//! A small local-storage analogue: string keys to string values, persisted as
//! a flat TOML table in the config directory.

use crate::constants::STORAGE_FILE_NAME;
use crate::error::Result;
use crate::helpers::get_or_create_config_dir;
use ahash::AHashMap;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error};

/// String key-value storage that survives restarts
pub trait KeyValueStore {
    /// Read the value stored under `key`
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// File-backed store; every read goes to disk so a restart is not needed to
/// observe writes made by another handle.
#[derive(Debug, Clone)]
pub struct TomlFileStore {
    path: PathBuf,
}

impl TomlFileStore {
    /// Open the default store in the application config directory
    pub fn open_default() -> Result<Self> {
        let path = get_or_create_config_dir()?.join(STORAGE_FILE_NAME);
        Ok(Self::at(path))
    }

    /// Use a store file at an explicit path (created lazily on first write)
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let value = fs::read_to_string(&self.path)?;
        if value.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        let table = toml::from_str(&value).map_err(|e| {
            error!(error = %e, path = ?self.path, "Failed to parse storage file");
            e
        })?;
        Ok(table)
    }
}

impl KeyValueStore for TomlFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.load()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut table = self.load()?;
        table.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, toml::to_string(&table)?)?;
        debug!(key, path = ?self.path, "Storage value written");
        Ok(())
    }
}

/// Volatile store used when no config directory is available, and in tests
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: AHashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_store_missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = TomlFileStore::at(dir.path().join("storage.toml"));
        assert_eq!(store.get("cookiesAccepted").unwrap(), None);
    }

    #[test]
    fn file_store_values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("storage.toml");

        let mut store = TomlFileStore::at(&path);
        store.set("cookiesAccepted", "false").unwrap();
        store.set("other", "1").unwrap();

        let reopened = TomlFileStore::at(&path);
        assert_eq!(reopened.get("cookiesAccepted").unwrap().as_deref(), Some("false"));
        assert_eq!(reopened.get("other").unwrap().as_deref(), Some("1"));
    }

    #[test]
    fn file_store_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.toml");
        fs::write(&path, "not = [valid").unwrap();

        let store = TomlFileStore::at(&path);
        assert!(store.get("cookiesAccepted").is_err());
    }

    #[test]
    fn memory_store_overwrites() {
        let mut store = MemoryStore::new();
        store.set("k", "a").unwrap();
        store.set("k", "b").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("b"));
    }
}
