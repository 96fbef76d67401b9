use anyhow::{anyhow, Context as _, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// A small key-value store persisted as one JSON file per key.
///
/// This is the desktop analog of origin-scoped browser local storage: keys
/// live under a single app-owned directory, values are whole JSON documents,
/// and a write replaces the previous value. Reads of absent or unparseable
/// values return `None`; the caller falls back to its defaults.
#[derive(Debug, Clone)]
pub struct LocalStore {
    root: PathBuf,
}

impl LocalStore {
    /// Opens a store rooted at the given directory, creating it if needed.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)
            .with_context(|| format!("failed to create store directory {}", root.display()))?;
        Ok(Self { root })
    }

    /// Opens the default store under the platform data directory.
    pub fn open_default() -> Result<Self> {
        let data_dir = dirs::data_dir().ok_or_else(|| anyhow!("no platform data directory"))?;
        Self::new(data_dir.join("mosaic").join("storage"))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }

    /// Reads and deserializes the value stored under `key`.
    ///
    /// Absent keys and malformed values both read as `None`; malformed
    /// values are logged and otherwise ignored.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let path = self.key_path(key);
        let contents = fs::read_to_string(&path).ok()?;
        match serde_json::from_str(&contents) {
            Ok(value) => Some(value),
            Err(error) => {
                log::warn!("ignoring malformed value for key {key:?}: {error}");
                None
            }
        }
    }

    /// Serializes `value` and stores it under `key`, overwriting any prior
    /// value.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let path = self.key_path(key);
        let json = serde_json::to_string_pretty(value)?;
        fs::write(&path, json)
            .with_context(|| format!("failed to write {}", path.display()))?;
        Ok(())
    }

    /// Removes the value stored under `key`, if any.
    pub fn remove(&self, key: &str) -> Result<()> {
        let path = self.key_path(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(error) => Err(error).with_context(|| format!("failed to remove {}", path.display())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SAVED_ELEMENTS_KEY;
    use element::{Element, ElementId, Page};
    use glam::Vec2;

    fn store() -> (tempfile::TempDir, LocalStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::new(dir.path().join("storage")).unwrap();
        (dir, store)
    }

    #[test]
    fn test_absent_key_reads_as_none() {
        let (_dir, store) = store();
        assert_eq!(store.get::<Vec<Element>>(SAVED_ELEMENTS_KEY), None);
    }

    #[test]
    fn test_save_restore_round_trip() {
        let (_dir, store) = store();
        let mut page = Page::seed();
        page.move_to(ElementId::from_raw(1), Vec2::new(33.0, 44.0));
        page.set_content(ElementId::from_raw(1), "edited");

        store
            .set(SAVED_ELEMENTS_KEY, &page.elements().to_vec())
            .unwrap();
        let restored: Vec<Element> = store.get(SAVED_ELEMENTS_KEY).unwrap();
        assert_eq!(restored, page.elements());
    }

    #[test]
    fn test_overwrite_replaces_prior_save() {
        let (_dir, store) = store();
        store.set("k", &vec![1, 2, 3]).unwrap();
        store.set("k", &vec![9]).unwrap();
        assert_eq!(store.get::<Vec<i32>>("k"), Some(vec![9]));
    }

    #[test]
    fn test_malformed_value_reads_as_none() {
        let (_dir, store) = store();
        std::fs::write(store.root().join("bad.json"), "{not json").unwrap();
        assert_eq!(store.get::<Vec<Element>>("bad"), None);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let (_dir, store) = store();
        store.set("k", &1).unwrap();
        store.remove("k").unwrap();
        store.remove("k").unwrap();
        assert_eq!(store.get::<i32>("k"), None);
    }
}
