//! Color parsing.
//!
//! Background settings only carry opaque 24-bit colors, so the single
//! accepted format is `#RRGGBB` (either case). Anything else is rejected
//! here, at the point where settings are accepted, so the interpolation
//! code never sees a malformed color.

mod parse;

#[cfg(test)]
mod tests;

use daytint_common::types::Color;
use daytint_common::ConfigError;

use parse::parse_hex;

/// Parse a color string into a [`Color`].
///
/// Surrounding whitespace is ignored. Returns a `ParseError` naming the
/// offending input otherwise.
pub fn parse_color(s: &str) -> Result<Color, ConfigError> {
    let s = s.trim();
    parse_hex(s).ok_or_else(|| {
        ConfigError::ParseError(format!("invalid hex color: {s:?} (expected #RRGGBB)"))
    })
}
