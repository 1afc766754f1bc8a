//! Key-value storage.
//!
//! The collection layer talks to a plain string key-value interface so it
//! can be driven by an in-memory map in tests. The real backend keeps the
//! whole map as a single JSON document on disk.

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::error::{JesaError, JesaResult};

/// String key-value storage, values are serialized structured data.
pub trait Store {
    fn get(&self, key: &str) -> JesaResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> JesaResult<()>;
    fn remove(&mut self, key: &str) -> JesaResult<()>;
}

/// Key-value store persisted as one JSON object in a file.
///
/// A missing file is an empty store; an unreadable or corrupt file is
/// `JesaError::Storage`.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStore { path: path.into() }
    }

    fn read_map(&self) -> JesaResult<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let raw = std::fs::read_to_string(&self.path).map_err(|e| {
            JesaError::Storage(format!("Could not read {}: {e}", self.path.display()))
        })?;

        serde_json::from_str(&raw).map_err(|e| {
            JesaError::Storage(format!("Corrupt store at {}: {e}", self.path.display()))
        })
    }

    fn write_map(&self, map: &BTreeMap<String, String>) -> JesaResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                JesaError::Storage(format!("Could not create {}: {e}", parent.display()))
            })?;
        }

        let raw = serde_json::to_string_pretty(map)
            .map_err(|e| JesaError::Storage(e.to_string()))?;

        std::fs::write(&self.path, raw).map_err(|e| {
            JesaError::Storage(format!("Could not write {}: {e}", self.path.display()))
        })
    }
}

impl Store for JsonFileStore {
    fn get(&self, key: &str) -> JesaResult<Option<String>> {
        Ok(self.read_map()?.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> JesaResult<()> {
        let mut map = self.read_map()?;
        map.insert(key.to_string(), value.to_string());
        self.write_map(&map)
    }

    fn remove(&mut self, key: &str) -> JesaResult<()> {
        let mut map = self.read_map()?;
        map.remove(key);
        self.write_map(&map)
    }
}

/// In-memory store for tests.
#[derive(Default)]
pub struct MemoryStore {
    map: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }
}

impl Store for MemoryStore {
    fn get(&self, key: &str) -> JesaResult<Option<String>> {
        Ok(self.map.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> JesaResult<()> {
        self.map.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> JesaResult<()> {
        self.map.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        let mut store = JsonFileStore::new(&path);
        assert_eq!(store.get("missing").unwrap(), None);

        store.set("a", "1").unwrap();
        store.set("b", "2").unwrap();
        assert_eq!(store.get("a").unwrap().as_deref(), Some("1"));

        store.remove("a").unwrap();
        assert_eq!(store.get("a").unwrap(), None);
        assert_eq!(store.get("b").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn file_store_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        JsonFileStore::new(&path).set("key", "value").unwrap();

        let reopened = JsonFileStore::new(&path);
        assert_eq!(reopened.get("key").unwrap().as_deref(), Some("value"));
    }

    #[test]
    fn file_store_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deep").join("store.json");

        JsonFileStore::new(&path).set("key", "value").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn corrupt_file_is_a_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        std::fs::write(&path, "not json {{{").unwrap();

        let store = JsonFileStore::new(&path);
        assert!(matches!(store.get("key"), Err(JesaError::Storage(_))));
    }
}
