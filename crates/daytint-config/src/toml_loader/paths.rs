//! Config path resolution and default file creation.

use crate::schema::StoreConfig;
use daytint_common::ConfigError;
use std::path::{Path, PathBuf};
use tracing::info;

use super::template::default_config_toml;

fn app_config_dir() -> Result<PathBuf, ConfigError> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::ParseError("could not determine config directory".into()))?;
    Ok(config_dir.join("daytint"))
}

/// Get the platform-specific default config file path.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    Ok(app_config_dir()?.join("daytint.toml"))
}

/// Directory the settings record is kept in when none is configured.
pub fn default_store_dir() -> Result<PathBuf, ConfigError> {
    Ok(app_config_dir()?.join("store"))
}

/// Resolve the configured store directory, falling back to the default.
pub fn resolve_store_dir(store: &StoreConfig) -> Result<PathBuf, ConfigError> {
    let configured = store.directory.trim();
    if configured.is_empty() {
        default_store_dir()
    } else {
        Ok(PathBuf::from(configured))
    }
}

/// Create a default TOML config file with documentation comments.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::ParseError(format!(
                "failed to create config directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    std::fs::write(path, default_config_toml()).map_err(|e| {
        ConfigError::ParseError(format!(
            "failed to write default config to {}: {e}",
            path.display()
        ))
    })?;

    info!("created default config at {}", path.display());
    Ok(())
}
