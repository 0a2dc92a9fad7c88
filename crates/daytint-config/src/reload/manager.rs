//! Core reload manager implementation.

use crate::schema::BackgroundSettings;
use crate::store::{KeyValueStore, SettingsStore};
use crate::watcher::{SettingsWatcher, DEFAULT_DEBOUNCE};
use daytint_common::ConfigError;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{broadcast, watch};
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

/// Republishes the stored settings whenever the record changes on disk.
///
/// Shares the `watch` sender with whoever else owns the live settings,
/// so edits from another process and local applies land in one place.
pub struct ReloadManager<S> {
    store: Arc<SettingsStore<S>>,
    publisher: Arc<watch::Sender<BackgroundSettings>>,
    debounce: Duration,
}

impl<S: KeyValueStore + 'static> ReloadManager<S> {
    pub fn new(
        store: Arc<SettingsStore<S>>,
        publisher: Arc<watch::Sender<BackgroundSettings>>,
    ) -> Self {
        Self {
            store,
            publisher,
            debounce: DEFAULT_DEBOUNCE,
        }
    }

    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    /// Load the stored record and publish it if it differs from the
    /// current value. Returns whether anything was published.
    pub fn reload_now(&self) -> bool {
        let Some(settings) = self.store.load() else {
            warn!("stored settings unavailable, keeping current settings");
            return false;
        };
        let changed = self.publisher.send_if_modified(|current| {
            if *current == settings {
                false
            } else {
                *current = settings;
                true
            }
        });
        if changed {
            info!("settings reloaded from store");
        }
        changed
    }

    /// Start watching the file behind the settings record.
    ///
    /// Fails with `WatchError` when the store has no backing file. The
    /// returned task ends when the watcher fails or every settings
    /// receiver is gone; aborting it stops watching.
    pub fn spawn(self) -> Result<JoinHandle<()>, ConfigError> {
        let path = self.store.backing_path().ok_or_else(|| {
            ConfigError::WatchError("settings store has no backing file to watch".into())
        })?;
        let watcher = SettingsWatcher::new(path).with_debounce(self.debounce);

        Ok(tokio::spawn(async move {
            let (change_tx, mut change_rx) = broadcast::channel::<()>(16);
            // One task: aborting the handle drops the notify watcher too.
            tokio::select! {
                result = watcher.watch(change_tx) => {
                    if let Err(e) = result {
                        error!("settings watcher error: {e}");
                    }
                }
                _ = self.run_reload_loop(&mut change_rx) => {}
            }
        }))
    }

    async fn run_reload_loop(&self, change_rx: &mut broadcast::Receiver<()>) {
        loop {
            match change_rx.recv().await {
                Ok(()) => {
                    self.reload_now();
                    if self.publisher.is_closed() {
                        info!("all settings receivers dropped, stopping reload manager");
                        break;
                    }
                }
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    warn!("settings watcher lagged by {n} events");
                }
                Err(broadcast::error::RecvError::Closed) => {
                    info!("settings watcher channel closed");
                    break;
                }
            }
        }
    }
}
