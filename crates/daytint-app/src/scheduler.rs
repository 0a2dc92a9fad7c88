//! Periodic re-render: sample the clock, compute, hand to a sink.

use std::time::Duration;

use chrono::NaiveTime;
use daytint_config::schema::BackgroundSettings;
use daytint_engine::{Appearance, AppearanceEngine};
use tokio::sync::watch;
use tokio::time::MissedTickBehavior;

use crate::sink::RenderSink;

// =============================================================================
// CLOCKS
// =============================================================================

/// Source of the local wall-clock time.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveTime;
}

/// The system clock in the local timezone.
pub struct LocalClock;

impl Clock for LocalClock {
    fn now(&self) -> NaiveTime {
        chrono::Local::now().time()
    }
}

/// Always reports the same time.
pub struct FixedClock(pub NaiveTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveTime {
        self.0
    }
}

// =============================================================================
// SCHEDULER
// =============================================================================

/// Re-evaluates the appearance on every tick and whenever settings change.
pub struct Scheduler<C> {
    engine: AppearanceEngine,
    settings: watch::Receiver<BackgroundSettings>,
    clock: C,
    period: Duration,
}

impl<C: Clock> Scheduler<C> {
    pub fn new(
        engine: AppearanceEngine,
        settings: watch::Receiver<BackgroundSettings>,
        clock: C,
        period: Duration,
    ) -> Self {
        Self {
            engine,
            settings,
            clock,
            period,
        }
    }

    /// Compute the appearance for the current settings and clock.
    pub fn tick(&self) -> Appearance {
        let now = self.clock.now();
        let settings = self.settings.borrow();
        self.engine.compute(&settings, &now)
    }

    /// Render until the settings publisher goes away or the sink fails.
    ///
    /// Late ticks are skipped rather than replayed; only the newest
    /// evaluation is ever rendered.
    pub async fn run(mut self, sink: &mut impl RenderSink) -> daytint_common::Result<()> {
        let mut interval = tokio::time::interval(self.period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        tracing::info!("Rendering every {:?}", self.period);

        loop {
            tokio::select! {
                _ = interval.tick() => {}
                changed = self.settings.changed() => {
                    if changed.is_err() {
                        tracing::info!("Settings publisher closed, stopping scheduler");
                        return Ok(());
                    }
                    tracing::debug!("Settings changed, re-rendering");
                }
            }
            let appearance = self.tick();
            tracing::trace!("tick: {appearance}");
            sink.render(&appearance)?;
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use daytint_common::{Color, DaytintError};
    use daytint_config::schema::BackgroundMode;
    use tokio::sync::mpsc;

    struct Forward(mpsc::UnboundedSender<Appearance>);

    impl RenderSink for Forward {
        fn render(&mut self, appearance: &Appearance) -> Result<(), DaytintError> {
            self.0
                .send(appearance.clone())
                .map_err(|_| DaytintError::Render("receiver dropped".into()))
        }
    }

    struct FailAfter {
        remaining: usize,
        rendered: usize,
    }

    impl RenderSink for FailAfter {
        fn render(&mut self, _: &Appearance) -> Result<(), DaytintError> {
            if self.remaining == 0 {
                return Err(DaytintError::Render("sink closed".into()));
            }
            self.remaining -= 1;
            self.rendered += 1;
            Ok(())
        }
    }

    fn half_past_eight() -> FixedClock {
        FixedClock(NaiveTime::from_hms_opt(8, 30, 0).unwrap())
    }

    fn single(hex: u32) -> BackgroundSettings {
        BackgroundSettings {
            mode: BackgroundMode::SingleColor,
            single_color: Color::from_u24(hex),
            ..Default::default()
        }
    }

    #[test]
    fn fixed_clock_is_fixed() {
        let clock = half_past_eight();
        assert_eq!(clock.now(), clock.now());
    }

    #[test]
    fn tick_reads_latest_settings() {
        let (tx, rx) = watch::channel(BackgroundSettings::default());
        let scheduler = Scheduler::new(
            AppearanceEngine::default(),
            rx,
            half_past_eight(),
            Duration::from_secs(1),
        );
        assert_eq!(
            scheduler.tick().to_css(),
            "linear-gradient(to right, #ffd700, #ffeb00, #ffff00)"
        );

        tx.send_replace(single(0x123456));
        assert_eq!(scheduler.tick().to_css(), "#123456");
    }

    #[tokio::test]
    async fn run_stops_when_sink_fails() {
        let (_tx, rx) = watch::channel(BackgroundSettings::default());
        let scheduler = Scheduler::new(
            AppearanceEngine::default(),
            rx,
            half_past_eight(),
            Duration::from_millis(5),
        );
        let mut sink = FailAfter {
            remaining: 3,
            rendered: 0,
        };

        let result = tokio::time::timeout(Duration::from_secs(5), scheduler.run(&mut sink))
            .await
            .expect("scheduler did not stop");

        assert!(matches!(result, Err(DaytintError::Render(_))));
        assert_eq!(sink.rendered, 3);
    }

    #[tokio::test]
    async fn settings_change_renders_immediately() {
        let (tx, rx) = watch::channel(single(0x000001));
        let scheduler = Scheduler::new(
            AppearanceEngine::default(),
            rx,
            half_past_eight(),
            Duration::from_secs(3600),
        );
        let (out_tx, mut out_rx) = mpsc::unbounded_channel();
        let task = tokio::spawn(async move {
            let mut sink = Forward(out_tx);
            scheduler.run(&mut sink).await
        });

        let first = tokio::time::timeout(Duration::from_secs(5), out_rx.recv())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(first.to_css(), "#000001");

        tx.send_replace(single(0x000002));
        let second = tokio::time::timeout(Duration::from_secs(5), out_rx.recv())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(second.to_css(), "#000002");

        drop(tx);
        let result = tokio::time::timeout(Duration::from_secs(5), task)
            .await
            .unwrap()
            .unwrap();
        assert!(result.is_ok());
    }
}
