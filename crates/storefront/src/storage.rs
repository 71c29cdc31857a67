//! Durable key-value storage for shopper state.
//!
//! A handful of shopper preferences survive restarts: the theme choice and
//! the recently-viewed list. They go through the [`KvStorage`] trait so the
//! stores that use them never touch the filesystem directly, and tests can
//! swap in [`MemoryStorage`].
//!
//! [`FileStorage`] keeps one file per key under the configured data
//! directory. Values are opaque strings; each caller picks its own encoding.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use thiserror::Error;

/// Well-known storage keys.
pub mod keys {
    /// Theme preference, stored as the plain strings `light` or `dark`.
    pub const THEME: &str = "theme";

    /// Recently-viewed products, stored as a JSON array (most recent first).
    ///
    /// The snake_case spelling is canonical for this backend; data stored
    /// under a camelCase variant of the key is not read or migrated.
    pub const RECENTLY_VIEWED: &str = "recently_viewed";
}

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// IO error reading or writing a value.
    #[error("IO error: {0}")]
    Io(String),

    /// Stored value could not be decoded.
    #[error("Parse error: {0}")]
    Parse(String),
}

/// String key-value storage with durable semantics.
///
/// `get` returns `Ok(None)` for absent keys; `remove` of an absent key is a
/// no-op. Implementations are shared behind `Arc<dyn KvStorage>`.
pub trait KvStorage: Send + Sync {
    /// Read the value stored under `key`.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete the value under `key` if present.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// File-per-key storage rooted at a data directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Create a storage rooted at `dir`. The directory is created lazily on
    /// first write.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory this storage writes into.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl KvStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Io(e.to_string())),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir).map_err(|e| StorageError::Io(e.to_string()))?;
        fs::write(self.path_for(key), value).map_err(|e| StorageError::Io(e.to_string()))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::Io(e.to_string())),
        }
    }
}

/// In-memory storage for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Create an empty in-memory storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self
            .entries
            .read()
            .map_err(|_| StorageError::Io("storage lock poisoned".to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| StorageError::Io("storage lock poisoned".to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| StorageError::Io("storage lock poisoned".to_string()))?;
        entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_roundtrip() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("missing").unwrap(), None);

        storage.set("theme", "dark").unwrap();
        assert_eq!(storage.get("theme").unwrap().as_deref(), Some("dark"));

        storage.set("theme", "light").unwrap();
        assert_eq!(storage.get("theme").unwrap().as_deref(), Some("light"));

        storage.remove("theme").unwrap();
        assert_eq!(storage.get("theme").unwrap(), None);
    }

    #[test]
    fn test_memory_storage_remove_absent_is_noop() {
        let storage = MemoryStorage::new();
        storage.remove("never-set").unwrap();
    }

    #[test]
    fn test_file_storage_roundtrip() {
        let dir = std::env::temp_dir().join(format!("shopease-storage-rt-{}", std::process::id()));
        let storage = FileStorage::new(&dir);

        assert_eq!(storage.get("missing").unwrap(), None);

        storage.set(keys::THEME, "dark").unwrap();
        assert_eq!(storage.get(keys::THEME).unwrap().as_deref(), Some("dark"));

        storage.remove(keys::THEME).unwrap();
        assert_eq!(storage.get(keys::THEME).unwrap(), None);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_file_storage_remove_absent_is_noop() {
        let dir = std::env::temp_dir().join(format!("shopease-storage-rm-{}", std::process::id()));
        let storage = FileStorage::new(&dir);
        storage.remove("never-set").unwrap();
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_file_storage_persists_across_instances() {
        let dir = std::env::temp_dir().join(format!("shopease-storage-px-{}", std::process::id()));

        FileStorage::new(&dir).set("k", "v").unwrap();
        let reopened = FileStorage::new(&dir);
        assert_eq!(reopened.get("k").unwrap().as_deref(), Some("v"));

        let _ = fs::remove_dir_all(&dir);
    }
}
