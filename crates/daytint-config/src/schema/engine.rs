//! Engine configuration (`daytint.toml`) sections.

use serde::{Deserialize, Serialize};

use super::schedule::TimeSyncStyle;

/// Default key the settings record is stored under.
pub const DEFAULT_SETTINGS_KEY: &str = "backgroundSettings";

/// Which segment table to use and how to render time-sync output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ScheduleConfig {
    /// Built-in schedule name or path to a schedule YAML file.
    pub name: String,
    pub time_sync_style: TimeSyncStyle,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            name: "four-segment".into(),
            time_sync_style: TimeSyncStyle::ThreeStop,
        }
    }
}

/// Render tick cadence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TickConfig {
    pub interval_ms: u32,
}

impl Default for TickConfig {
    fn default() -> Self {
        Self { interval_ms: 1000 }
    }
}

/// Where the settings record lives.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct StoreConfig {
    /// Directory holding one JSON file per key. Empty = platform default.
    pub directory: String,
    pub key: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            directory: String::new(),
            key: DEFAULT_SETTINGS_KEY.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
        }
    }
}

/// Root engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct EngineConfig {
    pub schedule: ScheduleConfig,
    pub tick: TickConfig,
    pub store: StoreConfig,
    pub logging: LoggingConfig,
}
