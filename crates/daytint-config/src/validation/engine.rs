//! Engine config validation (tick cadence, store key, logging level).

use crate::schema::EngineConfig;
use regex::Regex;
use std::sync::LazyLock;

use super::helpers::{validate_one_of, validate_range};

/// Store keys become file names, so keep them to a safe alphabet.
static STORE_KEY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_.-]+$").unwrap());

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

pub(crate) fn validate_engine(errors: &mut Vec<String>, config: &EngineConfig) {
    if config.schedule.name.trim().is_empty() {
        errors.push("schedule.name must not be empty".into());
    }
    validate_range(errors, "tick.interval_ms", config.tick.interval_ms, 100, 60_000);
    if !STORE_KEY_RE.is_match(&config.store.key) || config.store.key.starts_with('.') {
        errors.push(format!(
            "store.key = {:?} must be non-empty and use only letters, digits, '_', '-', '.'",
            config.store.key
        ));
    }
    validate_one_of(errors, "logging.level", &config.logging.level, LOG_LEVELS);
}
