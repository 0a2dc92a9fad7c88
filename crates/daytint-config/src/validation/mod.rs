//! Validation for settings, schedules, and the engine config.
//!
//! Each document has its own submodule; the public entry points collect
//! every problem and report them in a single `ConfigError`.

mod engine;
mod helpers;
mod schedule;
mod settings;


use crate::schema::{BackgroundSettings, EngineConfig, Schedule};
use daytint_common::ConfigError;

pub use settings::settings_from_json;

fn finish(errors: Vec<String>) -> Result<(), ConfigError> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

/// Validate settings about to be applied.
pub fn validate_settings(settings: &BackgroundSettings) -> Result<(), ConfigError> {
    let mut errors = Vec::new();
    settings::validate_settings(&mut errors, settings);
    finish(errors)
}

/// Validate a segment table.
pub fn validate_schedule(schedule: &Schedule) -> Result<(), ConfigError> {
    let mut errors = Vec::new();
    schedule::validate_schedule(&mut errors, schedule);
    finish(errors)
}

/// Validate the engine config file.
pub fn validate(config: &EngineConfig) -> Result<(), ConfigError> {
    let mut errors = Vec::new();
    engine::validate_engine(&mut errors, config);
    finish(errors)
}
