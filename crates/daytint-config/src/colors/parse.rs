//! Internal color parsing helpers.
//!
//! Handles the low-level conversion of `#RRGGBB` strings into [`Color`]
//! values. Not part of the public API.

use daytint_common::types::Color;
use regex::Regex;
use std::sync::LazyLock;

/// Regex for a 24-bit hex color: exactly `#RRGGBB`.
static HEX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9a-fA-F]{6}$").unwrap());

/// Parse a `#RRGGBB` string. Shorthand and alpha forms are rejected.
pub(super) fn parse_hex(s: &str) -> Option<Color> {
    if !HEX_RE.is_match(s) {
        return None;
    }
    Color::from_hex(s)
}
