//! Load/save contract for the persisted [`BackgroundSettings`] record.

use crate::schema::{BackgroundSettings, DEFAULT_SETTINGS_KEY};
use daytint_common::ConfigError;
use serde_json::Value;
use std::path::PathBuf;
use tracing::{debug, error, info, warn};

use super::backend::KeyValueStore;

/// Reads and writes background settings under one key of a [`KeyValueStore`].
#[derive(Debug)]
pub struct SettingsStore<S> {
    backend: S,
    key: String,
}

impl<S: KeyValueStore> SettingsStore<S> {
    pub fn new(backend: S, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    /// Store under [`DEFAULT_SETTINGS_KEY`].
    pub fn with_default_key(backend: S) -> Self {
        Self::new(backend, DEFAULT_SETTINGS_KEY)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// File backing the settings record, if the backend has one.
    pub fn backing_path(&self) -> Option<PathBuf> {
        self.backend.path_for(&self.key)
    }

    /// Load the persisted record, shallow-merged onto the defaults.
    ///
    /// Never fails: a missing record, an unreadable slot, or content that
    /// is not a JSON object all yield `None` (and are logged) so the caller
    /// keeps what it has. Individually malformed fields are logged and
    /// left at their default value.
    pub fn load(&self) -> Option<BackgroundSettings> {
        let raw = match self.backend.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(key = %self.key, "no stored settings");
                return None;
            }
            Err(e) => {
                error!("failed to read stored settings: {e}");
                return None;
            }
        };

        let record = match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Object(record)) => record,
            Ok(other) => {
                warn!(
                    "stored settings under '{}' are not a JSON object (got {}), ignoring",
                    self.key,
                    json_kind(&other)
                );
                return None;
            }
            Err(e) => {
                warn!("stored settings under '{}' are not valid JSON: {e}", self.key);
                return None;
            }
        };

        let (settings, rejected) = BackgroundSettings::from_record(&record);
        for problem in &rejected {
            warn!("ignoring stored setting {problem}");
        }
        info!(mode = settings.mode.as_str(), "loaded stored settings");
        Some(settings)
    }

    /// [`SettingsStore::load`], falling back to the defaults.
    pub fn load_or_default(&self) -> BackgroundSettings {
        self.load().unwrap_or_default()
    }

    /// Write the full settings record, replacing the previous one.
    pub fn save(&self, settings: &BackgroundSettings) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(settings)
            .map_err(|e| ConfigError::StoreError(format!("failed to serialize settings: {e}")))?;
        self.backend.put(&self.key, &json)?;
        debug!(key = %self.key, mode = settings.mode.as_str(), "settings saved");
        Ok(())
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
