//! File watcher for live settings reload.
//!
//! Uses the `notify` crate to watch the settings record for changes made
//! outside this process, with a 500ms debounce to avoid rapid reloads.

mod file_watcher;

#[cfg(test)]
mod tests;

pub use file_watcher::{SettingsWatcher, DEFAULT_DEBOUNCE};
