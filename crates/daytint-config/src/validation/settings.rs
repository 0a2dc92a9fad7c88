//! Background settings validation.

use crate::schema::{BackgroundMode, BackgroundSettings};
use daytint_common::ConfigError;
use serde_json::Value;

/// Validate settings constraints the type system does not already enforce.
pub(crate) fn validate_settings(errors: &mut Vec<String>, settings: &BackgroundSettings) {
    if settings.mode == BackgroundMode::Unknown {
        let known: Vec<&str> = BackgroundMode::KNOWN.iter().map(|m| m.as_str()).collect();
        errors.push(format!("mode is not one of {}", known.join(", ")));
    }
}

/// Parse an edited settings record strictly, on top of `base`.
///
/// Fields absent from `raw` keep their value from `base`. Unlike loading
/// from the store, every malformed field is an error here.
pub fn settings_from_json(
    raw: &str,
    base: &BackgroundSettings,
) -> Result<BackgroundSettings, ConfigError> {
    let value: Value = serde_json::from_str(raw)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse settings JSON: {e}")))?;
    let Value::Object(record) = value else {
        return Err(ConfigError::ParseError(
            "settings JSON must be an object".into(),
        ));
    };

    let mut settings = base.clone();
    let mut errors = settings.merge_record(&record);
    validate_settings(&mut errors, &settings);

    if errors.is_empty() {
        Ok(settings)
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
