//! Per-channel linear blending of two colors.

use daytint_common::Color;

/// Blend `a` toward `b` by `factor`.
///
/// Each channel is `round(a + factor * (b - a))`, rounding half away from
/// zero. `factor` is not clamped: values outside `[0, 1]` extrapolate, and
/// any channel that leaves `0..=255` wraps modulo 256 (the low byte is
/// kept), so the result is always a valid color.
pub fn interpolate(a: Color, b: Color, factor: f64) -> Color {
    let [ar, ag, ab] = a.channels();
    let [br, bg, bb] = b.channels();
    Color::from_rgb(
        blend_channel(ar, br, factor),
        blend_channel(ag, bg, factor),
        blend_channel(ab, bb, factor),
    )
}

fn blend_channel(a: u8, b: u8, factor: f64) -> u8 {
    let a = f64::from(a);
    let value = (a + factor * (f64::from(b) - a)).round();
    // Non-finite factors collapse to 0 through the saturating cast.
    (value as i64).rem_euclid(256) as u8
}
