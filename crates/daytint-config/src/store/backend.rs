//! Key-value slots the settings record can live in.

use daytint_common::ConfigError;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, warn};

/// A string-valued key-value slot store.
pub trait KeyValueStore: Send + Sync {
    /// Read the value under `key`. `Ok(None)` when the key was never written.
    fn get(&self, key: &str) -> Result<Option<String>, ConfigError>;

    /// Write `value` under `key`, replacing any previous value.
    fn put(&self, key: &str, value: &str) -> Result<(), ConfigError>;

    /// File backing `key`, for stores that have one.
    fn path_for(&self, _key: &str) -> Option<PathBuf> {
        None
    }
}

// =============================================================================
// FILE STORE
// =============================================================================

/// Stores each key as `<directory>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    directory: PathBuf,
}

impl FileStore {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.directory.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, ConfigError> {
        let path = self.slot_path(key);
        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ConfigError::StoreError(format!(
                "failed to read {}: {e}",
                path.display()
            ))),
        }
    }

    /// Atomic write: write to `.tmp`, then rename over the slot.
    fn put(&self, key: &str, value: &str) -> Result<(), ConfigError> {
        std::fs::create_dir_all(&self.directory).map_err(|e| {
            ConfigError::StoreError(format!(
                "failed to create store directory {}: {e}",
                self.directory.display()
            ))
        })?;

        let path = self.slot_path(key);
        let tmp_path = path.with_extension("json.tmp");
        std::fs::write(&tmp_path, value).map_err(|e| {
            ConfigError::StoreError(format!("failed to write {}: {e}", tmp_path.display()))
        })?;

        if let Err(e) = std::fs::rename(&tmp_path, &path) {
            warn!("atomic rename failed ({e}), falling back to direct write");
            std::fs::write(&path, value).map_err(|e2| {
                ConfigError::StoreError(format!("failed to write {}: {e2}", path.display()))
            })?;
        }

        debug!(path = %path.display(), "settings slot written");
        Ok(())
    }

    fn path_for(&self, key: &str) -> Option<PathBuf> {
        Some(self.slot_path(key))
    }
}

// =============================================================================
// MEMORY STORE
// =============================================================================

/// In-process store, for tests and embedding hosts with their own persistence.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, ConfigError> {
        let slots = self
            .slots
            .lock()
            .map_err(|_| ConfigError::StoreError("memory store lock poisoned".into()))?;
        Ok(slots.get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut slots = self
            .slots
            .lock()
            .map_err(|_| ConfigError::StoreError("memory store lock poisoned".into()))?;
        slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
