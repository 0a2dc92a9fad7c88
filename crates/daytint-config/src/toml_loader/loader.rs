//! Core TOML config loading: read from path or platform default.

use crate::schema::EngineConfig;
use crate::validation;
use daytint_common::ConfigError;
use std::path::Path;
use tracing::{info, warn};

use super::paths::{create_default_config, default_config_path};

/// Load the engine config from a specific TOML file path.
///
/// Missing fields take serde defaults. A config that parses but fails
/// validation is returned as-is with a warning; callers that need a
/// valid config run [`validation::validate`] themselves.
pub fn load_from_path(path: &Path) -> Result<EngineConfig, ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }
        Err(e) => {
            return Err(ConfigError::ParseError(format!(
                "failed to read {}: {e}",
                path.display()
            )));
        }
    };

    let config: EngineConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validation::validate(&config) {
        warn!("config validation warning: {e}");
    }

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load the engine config from a path, creating a commented default file
/// there if none exists yet.
pub fn load_or_create(path: &Path) -> Result<EngineConfig, ConfigError> {
    match load_from_path(path) {
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config found at {}, creating default", path.display());
            create_default_config(path)?;
            Ok(EngineConfig::default())
        }
        other => other,
    }
}

/// Load the engine config from the platform-specific default path.
///
/// On macOS: `~/Library/Application Support/daytint/daytint.toml`
/// On Linux: `~/.config/daytint/daytint.toml`
pub fn load_default() -> Result<EngineConfig, ConfigError> {
    load_or_create(&default_config_path()?)
}
