//! Session storage backed by a JSON file.
//!
//! The file holds one flat object of string values, the same keys the
//! browser keeps in `localStorage`. Every call re-reads the file so two
//! invocations of the CLI see each other's writes.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use medicare_api::{SessionStorage, StorageError};

#[derive(Clone, Debug)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Missing or unreadable files read as empty.
    fn read_all(&self) -> BTreeMap<String, String> {
        let Ok(raw) = std::fs::read_to_string(&self.path) else {
            return BTreeMap::new();
        };
        serde_json::from_str(&raw).unwrap_or_else(|e| {
            tracing::warn!(path = %self.path.display(), error = %e, "ignoring malformed session file");
            BTreeMap::new()
        })
    }

    fn write_all(&self, entries: &BTreeMap<String, String>) -> std::io::Result<()> {
        if entries.is_empty() {
            return match std::fs::remove_file(&self.path) {
                Err(e) if e.kind() != std::io::ErrorKind::NotFound => Err(e),
                _ => Ok(()),
            };
        }
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(entries).map_err(std::io::Error::other)?;
        std::fs::write(&self.path, raw)
    }
}

impl SessionStorage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.read_all().remove(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.read_all();
        entries.insert(key.to_owned(), value.to_owned());
        self.write_all(&entries).map_err(|e| StorageError::Write {
            key: key.to_owned(),
            reason: e.to_string(),
        })
    }

    fn remove(&self, key: &str) {
        let mut entries = self.read_all();
        if entries.remove(key).is_none() {
            return;
        }
        if let Err(e) = self.write_all(&entries) {
            tracing::warn!(path = %self.path.display(), key, error = %e, "failed to remove session key");
        }
    }
}
