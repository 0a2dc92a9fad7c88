//! Tests for the settings file watcher.

use super::file_watcher::is_relevant;
use super::*;
use notify::event::{AccessKind, CreateKind, ModifyKind};
use notify::{Event, EventKind};
use std::ffi::OsString;
use std::path::PathBuf;

fn event(kind: EventKind, path: &str) -> Event {
    Event::new(kind).add_path(PathBuf::from(path))
}

#[test]
fn watcher_new_with_nonexistent_path() {
    let watcher = SettingsWatcher::new(PathBuf::from("/tmp/nonexistent_daytint_test.json"));
    assert_eq!(
        watcher.path(),
        PathBuf::from("/tmp/nonexistent_daytint_test.json")
    );
}

#[test]
fn modify_and_create_of_watched_file_are_relevant() {
    let name = OsString::from("backgroundSettings.json");
    assert!(is_relevant(
        &event(EventKind::Modify(ModifyKind::Any), "/s/backgroundSettings.json"),
        &name
    ));
    assert!(is_relevant(
        &event(EventKind::Create(CreateKind::File), "/s/backgroundSettings.json"),
        &name
    ));
}

#[test]
fn other_files_and_kinds_are_ignored() {
    let name = OsString::from("backgroundSettings.json");
    assert!(!is_relevant(
        &event(EventKind::Modify(ModifyKind::Any), "/s/other.json"),
        &name
    ));
    assert!(!is_relevant(
        &event(EventKind::Access(AccessKind::Any), "/s/backgroundSettings.json"),
        &name
    ));
}
