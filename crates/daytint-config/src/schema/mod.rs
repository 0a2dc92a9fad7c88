//! Configuration schema types for daytint.
//!
//! Two documents live here: the persisted [`BackgroundSettings`] record
//! (JSON, camelCase) and the [`EngineConfig`] file (TOML, snake_case).
//! Both use `serde(default)` so partial documents load correctly.

mod engine;
mod schedule;
mod settings;

pub use engine::*;
pub use schedule::*;
pub use settings::*;
