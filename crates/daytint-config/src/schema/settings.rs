//! Background settings: the user's persisted choice of mode and colors.

use daytint_common::Color;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::colors::parse_color;

/// How settings map to an appearance.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum BackgroundMode {
    /// Color follows the wall clock through the schedule's segments.
    #[default]
    TimeSync,
    /// One static color.
    SingleColor,
    /// Static two-color gradient.
    Gradient,
    /// Any mode string this build does not recognize. Renders flat white.
    #[serde(other)]
    Unknown,
}

impl BackgroundMode {
    pub const KNOWN: [BackgroundMode; 3] = [
        BackgroundMode::TimeSync,
        BackgroundMode::SingleColor,
        BackgroundMode::Gradient,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BackgroundMode::TimeSync => "time-sync",
            BackgroundMode::SingleColor => "single-color",
            BackgroundMode::Gradient => "gradient",
            BackgroundMode::Unknown => "unknown",
        }
    }
}

/// Named anchor colors a schedule segment can blend between.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AnchorColor {
    Morning,
    Midday,
    Evening,
    Night,
    Midnight,
}

/// Persisted background settings.
///
/// Serialized with the camelCase field names of the stored record
/// (`morningColor`, `gradientColors`, ...). Missing fields take defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct BackgroundSettings {
    pub mode: BackgroundMode,
    pub morning_color: Color,
    pub midday_color: Color,
    pub evening_color: Color,
    pub night_color: Color,
    pub midnight_color: Color,
    pub single_color: Color,
    pub gradient_colors: [Color; 2],
}

impl Default for BackgroundSettings {
    fn default() -> Self {
        Self {
            mode: BackgroundMode::TimeSync,
            morning_color: Color::from_u24(0xFFD700),
            midday_color: Color::from_u24(0xFFFF00),
            evening_color: Color::from_u24(0xFFA500),
            night_color: Color::from_u24(0x1E90FF),
            midnight_color: Color::from_u24(0x00008B),
            single_color: Color::WHITE,
            gradient_colors: [Color::from_u24(0xFF7F50), Color::from_u24(0x6A5ACD)],
        }
    }
}

impl BackgroundSettings {
    /// Look up the color bound to a schedule anchor.
    pub fn anchor(&self, anchor: AnchorColor) -> Color {
        match anchor {
            AnchorColor::Morning => self.morning_color,
            AnchorColor::Midday => self.midday_color,
            AnchorColor::Evening => self.evening_color,
            AnchorColor::Night => self.night_color,
            AnchorColor::Midnight => self.midnight_color,
        }
    }

    /// Shallow-merge a stored record onto `self`.
    ///
    /// Every recognized field that is present and well-formed overwrites
    /// the current value. Malformed color fields leave the current value
    /// alone and are reported as `"<field>: <reason>"`; a present `mode`
    /// always overwrites, unrecognized values becoming `Unknown`. Unrecognized keys are
    /// ignored so records written by other versions still load.
    pub fn merge_record(&mut self, record: &Map<String, Value>) -> Vec<String> {
        let mut rejected = Vec::new();

        if let Some(mode) = record.get("mode") {
            self.mode = mode_from_value(mode);
        }

        let colors: [(&str, &mut Color); 6] = [
            ("morningColor", &mut self.morning_color),
            ("middayColor", &mut self.midday_color),
            ("eveningColor", &mut self.evening_color),
            ("nightColor", &mut self.night_color),
            ("midnightColor", &mut self.midnight_color),
            ("singleColor", &mut self.single_color),
        ];
        for (key, slot) in colors {
            merge_with(record, key, slot, &mut rejected, color_from_value);
        }

        merge_with(
            record,
            "gradientColors",
            &mut self.gradient_colors,
            &mut rejected,
            gradient_from_value,
        );

        rejected
    }

    /// Build settings from a stored record merged onto the defaults.
    pub fn from_record(record: &Map<String, Value>) -> (Self, Vec<String>) {
        let mut settings = Self::default();
        let rejected = settings.merge_record(record);
        (settings, rejected)
    }
}

fn merge_with<T>(
    record: &Map<String, Value>,
    key: &str,
    slot: &mut T,
    rejected: &mut Vec<String>,
    decode: impl FnOnce(&Value) -> Result<T, String>,
) {
    let Some(value) = record.get(key) else {
        return;
    };
    match decode(value) {
        Ok(decoded) => *slot = decoded,
        Err(reason) => rejected.push(format!("{key}: {reason}")),
    }
}

fn color_from_value(value: &Value) -> Result<Color, String> {
    let s = value
        .as_str()
        .ok_or_else(|| format!("expected a color string, got {value}"))?;
    parse_color(s).map_err(|e| e.to_string())
}

fn gradient_from_value(value: &Value) -> Result<[Color; 2], String> {
    let items = value
        .as_array()
        .ok_or_else(|| format!("expected an array of 2 colors, got {value}"))?;
    match items.as_slice() {
        [start, end] => Ok([color_from_value(start)?, color_from_value(end)?]),
        other => Err(format!("expected exactly 2 colors, got {}", other.len())),
    }
}

/// Anything other than a known mode string, `null` included, is `Unknown`.
fn mode_from_value(value: &Value) -> BackgroundMode {
    value
        .as_str()
        .and_then(|s| BackgroundMode::KNOWN.into_iter().find(|m| m.as_str() == s))
        .unwrap_or(BackgroundMode::Unknown)
}
