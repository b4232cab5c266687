//! Key/value persistence used by the theme and preference stores.
//!
//! Stores only see the [`KeyValueStore`] capability, never a concrete
//! backend. [`FileStore`] keeps every key in one JSON object on disk.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::ShowcaseError;

const FILE_NAME: &str = "storage.json";

/// String key/value storage in the style of browser `localStorage`.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, ShowcaseError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), ShowcaseError>;
    fn remove(&mut self, key: &str) -> Result<(), ShowcaseError>;
}

/// In-process store. Nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, ShowcaseError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ShowcaseError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), ShowcaseError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// JSON-file store. The whole map is rewritten on every change.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`. A missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, ShowcaseError> {
        let path = path.into();
        let entries = if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            if content.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_json::from_str(&content)
                    .map_err(|e| ShowcaseError::Storage(format!("{}: {e}", path.display())))?
            }
        } else {
            BTreeMap::new()
        };
        tracing::debug!(path = %path.display(), keys = entries.len(), "Opened file store");
        Ok(Self { path, entries })
    }

    /// Open the store in the platform data directory.
    pub fn open_default() -> Result<Self, ShowcaseError> {
        Self::open(Self::default_path())
    }

    /// Path to the default store file (XDG on Linux, AppData on Windows).
    pub fn default_path() -> PathBuf {
        crate::config::project_dirs()
            .map(|d| d.data_dir().join(FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write `entries` to disk, then adopt them. On failure the in-memory
    /// map keeps matching the file.
    fn commit(&mut self, entries: BTreeMap<String, String>) -> Result<(), ShowcaseError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&entries)?;
        std::fs::write(&self.path, content)?;
        self.entries = entries;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, ShowcaseError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ShowcaseError> {
        let mut entries = self.entries.clone();
        entries.insert(key.to_string(), value.to_string());
        self.commit(entries)
    }

    fn remove(&mut self, key: &str) -> Result<(), ShowcaseError> {
        if !self.entries.contains_key(key) {
            return Ok(());
        }
        let mut entries = self.entries.clone();
        entries.remove(key);
        self.commit(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("k").unwrap(), None);
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
    }

    #[test]
    fn test_file_store_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("storage.json");

        let mut store = FileStore::open(&path).unwrap();
        store.set("colorTheme", "industrial").unwrap();
        store.set("darkMode", "true").unwrap();
        store.remove("darkMode").unwrap();

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get("colorTheme").unwrap().as_deref(), Some("industrial"));
        assert_eq!(reopened.get("darkMode").unwrap(), None);
    }

    #[test]
    fn test_file_store_rejects_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(matches!(
            FileStore::open(&path),
            Err(ShowcaseError::Storage(_))
        ));
    }

    #[test]
    fn test_failed_write_leaves_memory_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");

        let mut store = FileStore::open(&path).unwrap();
        store.set("colorTheme", "gallery").unwrap();

        // Replace the file with a directory so the next write fails.
        std::fs::remove_file(&path).unwrap();
        std::fs::create_dir(&path).unwrap();

        assert!(store.set("colorTheme", "industrial").is_err());
        assert_eq!(store.get("colorTheme").unwrap().as_deref(), Some("gallery"));

        assert!(store.remove("colorTheme").is_err());
        assert_eq!(store.get("colorTheme").unwrap().as_deref(), Some("gallery"));
    }
}
