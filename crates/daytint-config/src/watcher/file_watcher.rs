//! Watches one file for changes using the `notify` crate, with debounced
//! notifications.

use daytint_common::ConfigError;
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::sync::broadcast;
use tracing::{debug, error, info, warn};

/// Default window in which bursts of change events are coalesced.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// Watches a single file and signals when it changes.
pub struct SettingsWatcher {
    path: PathBuf,
    debounce: Duration,
}

impl SettingsWatcher {
    /// Create a watcher for `path`. The file need not exist yet.
    pub fn new(path: PathBuf) -> Self {
        if !path.exists() {
            warn!(
                "{} does not exist yet, will watch for creation",
                path.display()
            );
        }
        Self {
            path,
            debounce: DEFAULT_DEBOUNCE,
        }
    }

    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Watch until the notify backend goes away, sending `()` on `tx`
    /// once per debounced burst of changes.
    ///
    /// The parent directory is watched rather than the file itself so
    /// that atomic saves (write to a temp file, then rename) are seen.
    pub async fn watch(&self, tx: broadcast::Sender<()>) -> Result<(), ConfigError> {
        let watch_dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();

        info!("starting file watcher for {}", self.path.display());

        // Bridge the sync notify callback into async.
        let (notify_tx, mut notify_rx) = tokio::sync::mpsc::channel::<()>(16);

        let mut watcher = RecommendedWatcher::new(
            move |result: Result<Event, notify::Error>| match result {
                Ok(event) => {
                    if is_relevant(&event, &file_name) {
                        debug!("watched file change detected");
                        let _ = notify_tx.try_send(());
                    }
                }
                Err(e) => error!("file watcher error: {e}"),
            },
            notify::Config::default(),
        )
        .map_err(|e| ConfigError::WatchError(format!("failed to create watcher: {e}")))?;

        watcher
            .watch(&watch_dir, RecursiveMode::NonRecursive)
            .map_err(|e| {
                ConfigError::WatchError(format!("failed to watch {}: {e}", watch_dir.display()))
            })?;

        loop {
            if notify_rx.recv().await.is_none() {
                break;
            }

            // Drain further signals until the window passes quietly.
            let debounce = tokio::time::sleep(self.debounce);
            tokio::pin!(debounce);
            loop {
                tokio::select! {
                    _ = &mut debounce => break,
                    msg = notify_rx.recv() => {
                        if msg.is_none() {
                            return Ok(());
                        }
                    }
                }
            }

            info!("{} changed, sending reload signal", self.path.display());
            if tx.send(()).is_err() {
                debug!("no receivers for reload signal");
            }
        }

        drop(watcher);
        Ok(())
    }
}

/// A create or modify event touching a file called `file_name`.
pub(crate) fn is_relevant(event: &Event, file_name: &OsString) -> bool {
    matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_))
        && event
            .paths
            .iter()
            .any(|p| p.file_name().map(|n| n == file_name).unwrap_or(false))
}
