//! Background appearance engine.
//!
//! Pure computation: given [`BackgroundSettings`](daytint_config::BackgroundSettings)
//! and a clock time, produce the [`Appearance`] to paint. Nothing here does
//! I/O or keeps state between calls.
//!
//! - [`interpolate`] blends two colors per channel.
//! - [`segments`] finds the active time segment and blends its anchors.
//! - [`AppearanceEngine`] dispatches on the background mode.

pub mod appearance;
pub mod interpolate;
pub mod resolver;
pub mod segments;

pub use appearance::{Appearance, Gradient, GradientDirection};
pub use interpolate::interpolate;
pub use resolver::{compute_appearance, AppearanceEngine};
pub use segments::{resolve_time_color, TimeSample};
