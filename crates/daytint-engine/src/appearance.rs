//! The rendered background value.

use std::fmt;

use daytint_common::Color;
use serde::Serialize;

/// Direction of a linear gradient.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Default)]
pub enum GradientDirection {
    #[default]
    #[serde(rename = "to right")]
    ToRight,
}

impl GradientDirection {
    pub fn as_css(&self) -> &'static str {
        match self {
            GradientDirection::ToRight => "to right",
        }
    }
}

/// A linear gradient with evenly spaced stops.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Gradient {
    pub direction: GradientDirection,
    pub stops: Vec<Color>,
}

impl Gradient {
    /// Left-to-right gradient through `stops`.
    pub fn to_right(stops: impl Into<Vec<Color>>) -> Self {
        Self {
            direction: GradientDirection::ToRight,
            stops: stops.into(),
        }
    }
}

/// What the host should paint as the background.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Appearance {
    /// A flat fill.
    Solid { color: Color },
    /// A linear gradient.
    LinearGradient(Gradient),
}

impl Appearance {
    pub fn solid(color: Color) -> Self {
        Appearance::Solid { color }
    }

    /// CSS `background` value: `#rrggbb` or
    /// `linear-gradient(to right, #rrggbb, #rrggbb[, #rrggbb])`.
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Appearance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Appearance::Solid { color } => write!(f, "{color}"),
            Appearance::LinearGradient(g) => {
                write!(f, "linear-gradient({}", g.direction.as_css())?;
                for stop in &g.stops {
                    write!(f, ", {stop}")?;
                }
                f.write_str(")")
            }
        }
    }
}
