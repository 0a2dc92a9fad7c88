//! Owner of the live settings value.

use std::sync::Arc;

use daytint_common::ConfigError;
use daytint_config::schema::BackgroundSettings;
use daytint_config::store::{KeyValueStore, SettingsStore};
use daytint_config::{validation, ReloadManager};
use tokio::sync::watch;

/// Holds the current [`BackgroundSettings`] and applies replacements.
///
/// Readers subscribe to a `watch` channel and always see a whole value.
/// An apply either validates, persists and publishes, or changes nothing.
pub struct SettingsController<S> {
    store: Arc<SettingsStore<S>>,
    publisher: Arc<watch::Sender<BackgroundSettings>>,
}

impl<S: KeyValueStore + 'static> SettingsController<S> {
    /// Start from the stored record, or defaults when there is none.
    pub fn load(store: SettingsStore<S>) -> Self {
        let initial = store.load_or_default();
        tracing::info!("Starting with {} mode", initial.mode.as_str());
        let (tx, _rx) = watch::channel(initial);
        Self {
            store: Arc::new(store),
            publisher: Arc::new(tx),
        }
    }

    pub fn current(&self) -> BackgroundSettings {
        self.publisher.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<BackgroundSettings> {
        self.publisher.subscribe()
    }

    pub fn store(&self) -> &SettingsStore<S> {
        &self.store
    }

    /// Replace the live settings.
    pub fn apply(&self, settings: BackgroundSettings) -> Result<(), ConfigError> {
        validation::validate_settings(&settings)?;
        self.store.save(&settings)?;
        tracing::info!("Applied {} mode settings", settings.mode.as_str());
        self.publisher.send_replace(settings);
        Ok(())
    }

    /// Parse a JSON record over the current settings and apply it.
    pub fn apply_json(&self, raw: &str) -> Result<BackgroundSettings, ConfigError> {
        let settings = validation::settings_from_json(raw, &self.current())?;
        self.apply(settings.clone())?;
        Ok(settings)
    }

    /// Reload manager publishing external edits into this controller.
    pub fn reload_manager(&self) -> ReloadManager<S> {
        ReloadManager::new(Arc::clone(&self.store), Arc::clone(&self.publisher))
    }
}

// =============================================================================
// TESTS
// =============================================================================
