//! daytint configuration and persistence.
//!
//! Holds the persisted [`BackgroundSettings`] record and its store, the
//! segment tables used by time-sync mode, and the TOML engine config.
//! Every document uses defaults for missing fields so partial files work.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use daytint_config::{load_engine_config, settings_to_json};
//! use daytint_config::store::{FileStore, SettingsStore};
//!
//! let config = load_engine_config().expect("failed to load config");
//! let dir = daytint_config::toml_loader::resolve_store_dir(&config.store).unwrap();
//! let store = SettingsStore::new(FileStore::new(dir), config.store.key.clone());
//! println!("{}", settings_to_json(&store.load_or_default()));
//! ```

pub mod colors;
pub mod reload;
pub mod schedule;
pub mod schema;
pub mod store;
pub mod toml_loader;
pub mod validation;
pub mod watcher;

pub use reload::ReloadManager;
pub use schedule::{load_schedule, BUILT_IN_SCHEDULES};
pub use schema::{BackgroundMode, BackgroundSettings, EngineConfig, Schedule, TimeSyncStyle};
pub use store::{FileStore, KeyValueStore, MemoryStore, SettingsStore};
pub use watcher::SettingsWatcher;

use daytint_common::ConfigError;

/// Load the engine config from the platform default path.
///
/// Creates a commented default file if none exists, then validates it.
pub fn load_engine_config() -> Result<EngineConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize settings to the pretty-printed JSON record format.
pub fn settings_to_json(settings: &BackgroundSettings) -> String {
    serde_json::to_string_pretty(settings)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize settings: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_to_json_contains_all_fields() {
        let json = settings_to_json(&BackgroundSettings::default());
        assert!(json.contains("\"mode\": \"time-sync\""));
        assert!(json.contains("\"morningColor\""));
        assert!(json.contains("\"middayColor\""));
        assert!(json.contains("\"eveningColor\""));
        assert!(json.contains("\"nightColor\""));
        assert!(json.contains("\"midnightColor\""));
        assert!(json.contains("\"singleColor\""));
        assert!(json.contains("\"gradientColors\""));
    }

    #[test]
    fn settings_json_round_trips() {
        let settings = BackgroundSettings {
            mode: BackgroundMode::SingleColor,
            ..Default::default()
        };
        let parsed: BackgroundSettings =
            serde_json::from_str(&settings_to_json(&settings)).unwrap();
        assert_eq!(parsed, settings);
    }
}
