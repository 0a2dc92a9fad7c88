//! Mode dispatch: settings plus a clock time in, [`Appearance`] out.

use chrono::Timelike;
use daytint_common::{Color, ConfigError};
use daytint_config::schema::{
    BackgroundMode, BackgroundSettings, Schedule, ScheduleConfig, TimeSyncStyle,
};
use daytint_config::{load_schedule, validation};

use crate::appearance::{Appearance, Gradient};
use crate::segments;

/// Computes appearances for one schedule and time-sync style.
///
/// Holds no settings; callers pass the current value on every call, so a
/// single engine serves any number of settings swaps.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppearanceEngine {
    schedule: Schedule,
    style: TimeSyncStyle,
}

impl AppearanceEngine {
    /// Build an engine after checking that `schedule` covers the day.
    pub fn new(schedule: Schedule, style: TimeSyncStyle) -> Result<Self, ConfigError> {
        validation::validate_schedule(&schedule)?;
        Ok(Self { schedule, style })
    }

    /// Resolve the configured schedule (built-in or YAML file).
    pub fn from_config(config: &ScheduleConfig) -> Result<Self, ConfigError> {
        let schedule = load_schedule(&config.name)?;
        tracing::info!(
            "Appearance engine using schedule {:?} ({} segments, {:?})",
            schedule.name,
            schedule.segments.len(),
            config.time_sync_style
        );
        Self::new(schedule, config.time_sync_style)
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    pub fn style(&self) -> TimeSyncStyle {
        self.style
    }

    /// Appearance for `settings` at the wall-clock time `now`.
    pub fn compute(&self, settings: &BackgroundSettings, now: &impl Timelike) -> Appearance {
        self.compute_at(settings, now.hour(), now.minute())
    }

    /// Appearance for `settings` at `hour:minute`.
    pub fn compute_at(&self, settings: &BackgroundSettings, hour: u32, minute: u32) -> Appearance {
        match settings.mode {
            BackgroundMode::TimeSync => self.time_sync(settings, hour, minute),
            BackgroundMode::SingleColor => Appearance::solid(settings.single_color),
            BackgroundMode::Gradient => {
                Appearance::LinearGradient(Gradient::to_right(settings.gradient_colors))
            }
            BackgroundMode::Unknown => Appearance::solid(Color::WHITE),
        }
    }

    fn time_sync(&self, settings: &BackgroundSettings, hour: u32, minute: u32) -> Appearance {
        let Some(sample) = segments::sample(settings, &self.schedule, hour, minute) else {
            tracing::warn!(
                "Schedule {:?} has no segment for {hour:02}:{minute:02}, using white",
                self.schedule.name
            );
            return Appearance::solid(Color::WHITE);
        };
        tracing::trace!(
            "{hour:02}:{minute:02} is {:.1}% through {} -> {}",
            sample.progress * 100.0,
            sample.from,
            sample.to
        );
        match self.style {
            TimeSyncStyle::Flat => Appearance::solid(sample.blended),
            TimeSyncStyle::ThreeStop => Appearance::LinearGradient(Gradient::to_right([
                sample.from,
                sample.blended,
                sample.to,
            ])),
        }
    }
}

/// Appearance with the default four-segment schedule and three-stop style.
pub fn compute_appearance(settings: &BackgroundSettings, now: &impl Timelike) -> Appearance {
    AppearanceEngine::default().compute(settings, now)
}
