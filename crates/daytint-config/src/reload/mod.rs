//! Live settings reload.
//!
//! Combines the file watcher with the settings store so that edits to
//! the stored record are picked up without a restart.

mod manager;

#[cfg(test)]
mod tests;

pub use manager::ReloadManager;
