//! Persistence for background settings.
//!
//! The record is a JSON object stored under a single key. The
//! [`KeyValueStore`] trait is the seam: [`FileStore`] keeps one file per
//! key on disk, [`MemoryStore`] keeps everything in process.

mod backend;
mod settings_store;


pub use backend::{FileStore, KeyValueStore, MemoryStore};
pub use settings_store::SettingsStore;
