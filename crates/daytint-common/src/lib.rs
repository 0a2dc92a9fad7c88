pub mod errors;
pub mod types;

pub use errors::{ConfigError, DaytintError};
pub use types::{Color, ParseColorError};

pub type Result<T> = std::result::Result<T, DaytintError>;
