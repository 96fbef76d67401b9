//! Transient object URLs for local files.
//!
//! The editor never copies a chosen image while the edit overlay is open;
//! instead the file gets a revocable `blob:`-style handle, mirroring
//! `URL.createObjectURL` in the browser. Handles resolve to their backing
//! path until revoked, and revoking is explicit: commit, cancel, and
//! replacement all release the handle they retire.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// A handle to a registered local file.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ObjectUrl(String);

impl ObjectUrl {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ObjectUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectUrl({})", self.0)
    }
}

impl fmt::Display for ObjectUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Registry mapping object URLs to the local files they reference.
#[derive(Debug, Default)]
pub struct ObjectUrlStore {
    entries: HashMap<String, PathBuf>,
}

impl ObjectUrlStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a local file and returns a fresh object URL for it.
    pub fn create_object_url(&mut self, path: impl Into<PathBuf>) -> ObjectUrl {
        let url = format!("blob:{}", uuid::Uuid::new_v4());
        self.entries.insert(url.clone(), path.into());
        ObjectUrl(url)
    }

    /// Resolves an object URL to its backing path, if still registered.
    pub fn resolve(&self, url: &ObjectUrl) -> Option<&Path> {
        self.entries.get(url.as_str()).map(|p| p.as_path())
    }

    /// Releases an object URL, returning the backing path it referenced.
    pub fn revoke(&mut self, url: &ObjectUrl) -> Option<PathBuf> {
        self.entries.remove(url.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_resolves_until_revoked() {
        let mut store = ObjectUrlStore::new();
        let url = store.create_object_url("/tmp/cat.png");

        assert_eq!(store.resolve(&url), Some(Path::new("/tmp/cat.png")));

        let path = store.revoke(&url);
        assert_eq!(path, Some(PathBuf::from("/tmp/cat.png")));
        assert_eq!(store.resolve(&url), None);
        assert!(store.is_empty());
    }

    #[test]
    fn test_urls_are_unique_per_registration() {
        let mut store = ObjectUrlStore::new();
        let a = store.create_object_url("/tmp/same.png");
        let b = store.create_object_url("/tmp/same.png");
        assert_ne!(a, b);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_revoke_unknown_url_is_noop() {
        let mut store = ObjectUrlStore::new();
        let url = store.create_object_url("/tmp/a.png");
        store.revoke(&url);
        assert_eq!(store.revoke(&url), None);
    }
}
