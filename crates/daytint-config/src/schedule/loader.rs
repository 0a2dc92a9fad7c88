//! Schedule file resolution and loading.
//!
//! Resolves schedule names to filesystem paths and parses YAML schedule
//! files into [`Schedule`] values.

use crate::schema::Schedule;
use crate::validation;
use daytint_common::ConfigError;
use std::path::{Path, PathBuf};
use tracing::info;

use super::builtin;

/// Resolve the filesystem path for a custom schedule by name.
///
/// If the name looks like a file path (contains `/` or ends in
/// `.yaml`/`.yml`) it is used directly. Otherwise `schedules/<name>.yaml`
/// is tried relative to the working directory, then under the platform
/// config directory.
fn resolve_schedule_path(name: &str) -> Result<PathBuf, ConfigError> {
    if name.contains('/') || name.ends_with(".yaml") || name.ends_with(".yml") {
        let path = PathBuf::from(name);
        if path.exists() {
            return Ok(path);
        }
        return Err(ConfigError::FileNotFound(path));
    }

    let file_name = format!("{name}.yaml");

    let local_path = PathBuf::from("schedules").join(&file_name);
    if local_path.exists() {
        return Ok(local_path);
    }

    if let Some(config_dir) = dirs::config_dir() {
        let user_path = config_dir.join("daytint").join("schedules").join(&file_name);
        if user_path.exists() {
            return Ok(user_path);
        }
    }

    Err(ConfigError::FileNotFound(PathBuf::from(format!(
        "schedule '{name}' not found in any search path"
    ))))
}

/// Load a schedule by name.
///
/// Built-in names resolve without touching the filesystem. Anything else
/// is looked up as a YAML file and validated before it is returned.
pub fn load_schedule(name: &str) -> Result<Schedule, ConfigError> {
    if let Some(schedule) = builtin(name) {
        return Ok(schedule);
    }

    let path = resolve_schedule_path(name)?;
    load_schedule_from_path(&path)
}

/// Load and validate a schedule from a specific YAML file.
pub fn load_schedule_from_path(path: &Path) -> Result<Schedule, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        ConfigError::ParseError(format!(
            "failed to read schedule file {}: {e}",
            path.display()
        ))
    })?;

    let schedule: Schedule = serde_yaml::from_str(&content).map_err(|e| {
        ConfigError::ParseError(format!(
            "failed to parse schedule YAML {}: {e}",
            path.display()
        ))
    })?;

    validation::validate_schedule(&schedule)?;

    info!(
        "loaded schedule '{}' ({} segments) from {}",
        schedule.name,
        schedule.segments.len(),
        path.display()
    );
    Ok(schedule)
}
