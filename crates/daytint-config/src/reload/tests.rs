//! Tests for the reload manager.

use super::*;
use crate::schema::{BackgroundMode, BackgroundSettings};
use crate::store::{FileStore, KeyValueStore, MemoryStore, SettingsStore};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

fn memory_manager() -> (
    ReloadManager<MemoryStore>,
    Arc<SettingsStore<MemoryStore>>,
    watch::Receiver<BackgroundSettings>,
) {
    let store = Arc::new(SettingsStore::with_default_key(MemoryStore::new()));
    let (tx, rx) = watch::channel(BackgroundSettings::default());
    let manager = ReloadManager::new(Arc::clone(&store), Arc::new(tx));
    (manager, store, rx)
}

#[test]
fn reload_publishes_changed_settings() {
    let (manager, store, mut rx) = memory_manager();
    let updated = BackgroundSettings {
        mode: BackgroundMode::Gradient,
        ..Default::default()
    };
    store.save(&updated).unwrap();

    assert!(manager.reload_now());
    assert!(rx.has_changed().unwrap());
    assert_eq!(*rx.borrow_and_update(), updated);
}

#[test]
fn reload_skips_identical_settings() {
    let (manager, store, rx) = memory_manager();
    store.save(&BackgroundSettings::default()).unwrap();

    assert!(!manager.reload_now());
    assert!(!rx.has_changed().unwrap());
}

#[test]
fn reload_keeps_current_when_record_is_broken() {
    let (manager, store, rx) = memory_manager();
    store.backend().put(store.key(), "{{{").unwrap();

    assert!(!manager.reload_now());
    assert_eq!(*rx.borrow(), BackgroundSettings::default());
}

#[tokio::test]
async fn spawn_without_backing_file_fails() {
    let (manager, _store, _rx) = memory_manager();
    let err = manager.spawn().unwrap_err();
    assert!(matches!(err, daytint_common::ConfigError::WatchError(_)));
}

#[tokio::test]
async fn spawn_with_file_store_starts() {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(SettingsStore::with_default_key(FileStore::new(dir.path())));
    let (tx, _rx) = watch::channel(BackgroundSettings::default());
    let handle = ReloadManager::new(store, Arc::new(tx)).spawn().unwrap();
    handle.abort();
}

#[tokio::test]
async fn aborted_task_releases_store_and_publisher() {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(SettingsStore::with_default_key(FileStore::new(dir.path())));
    let (tx, rx) = watch::channel(BackgroundSettings::default());
    let handle = ReloadManager::new(Arc::clone(&store), Arc::new(tx))
        .spawn()
        .unwrap();

    handle.abort();
    let err = handle.await.unwrap_err();
    assert!(err.is_cancelled());
    assert_eq!(Arc::strong_count(&store), 1);
    assert!(rx.has_changed().is_err());
}

#[tokio::test]
async fn task_ends_when_directory_cannot_be_watched() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing");
    let store = Arc::new(SettingsStore::with_default_key(FileStore::new(missing)));
    let (tx, _rx) = watch::channel(BackgroundSettings::default());
    let handle = ReloadManager::new(store, Arc::new(tx)).spawn().unwrap();

    let joined = tokio::time::timeout(Duration::from_secs(5), handle).await;
    assert!(matches!(joined, Ok(Ok(()))));
}
