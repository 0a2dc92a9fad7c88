//! Time-of-day segment lookup and blending.

use daytint_common::Color;
use daytint_config::schema::{BackgroundSettings, Schedule, Segment};

use crate::interpolate::interpolate;

/// Result of sampling a schedule at one clock time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeSample {
    /// Color at the start of the active segment.
    pub from: Color,
    /// Color at the end of the active segment.
    pub to: Color,
    /// `from` blended toward `to` by `progress`.
    pub blended: Color,
    /// Normalized position inside the segment, in `[0, 1)`.
    pub progress: f64,
}

/// Find the segment owning `hour:minute` and the progress through it.
///
/// Hours before the schedule's day start are read as `hour + 24`, so the
/// last segment can run past midnight. The first segment whose half-open
/// range contains the hour wins; an exact boundary therefore belongs to the
/// later segment with progress 0. Out-of-range inputs are reduced modulo
/// 24 and 60.
pub fn locate(schedule: &Schedule, hour: u32, minute: u32) -> Option<(&Segment, f64)> {
    let hour = hour % 24;
    let minute = minute % 60;
    let adjusted = if hour < schedule.day_start() {
        hour + 24
    } else {
        hour
    };

    let segment = schedule.segments.iter().find(|s| s.contains_hour(adjusted))?;
    let elapsed = (adjusted - segment.start_hour) * 60 + minute;
    let progress = f64::from(elapsed) / f64::from(segment.length_minutes());
    Some((segment, progress))
}

/// Sample `schedule` at `hour:minute` using the anchor colors in `settings`.
pub fn sample(
    settings: &BackgroundSettings,
    schedule: &Schedule,
    hour: u32,
    minute: u32,
) -> Option<TimeSample> {
    let (segment, progress) = locate(schedule, hour, minute)?;
    let from = settings.anchor(segment.from);
    let to = settings.anchor(segment.to);
    Some(TimeSample {
        from,
        to,
        blended: interpolate(from, to, progress),
        progress,
    })
}

/// Blended background color for `hour:minute`.
///
/// A schedule with a gap at that time yields white.
pub fn resolve_time_color(
    settings: &BackgroundSettings,
    schedule: &Schedule,
    hour: u32,
    minute: u32,
) -> Color {
    match sample(settings, schedule, hour, minute) {
        Some(s) => s.blended,
        None => {
            tracing::warn!(
                "Schedule {:?} has no segment for {hour:02}:{minute:02}, using white",
                schedule.name
            );
            Color::WHITE
        }
    }
}
