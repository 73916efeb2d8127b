//! Result alias and logging combinators.
//!
//! The landing page never stops rendering because a config value was bad;
//! these helpers turn an error into a logged fallback instead.

use crate::error::Error;

/// The standard Result type for Hero Reel operations.
///
/// # Examples
///
/// ```
/// use reel_core::{MotionConfig, Result};
///
/// fn load(doc: &str) -> Result<MotionConfig> {
///     let config = MotionConfig::from_toml_str(doc)?;
///     Ok(config)
/// }
///
/// assert!(load("").is_ok());
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait providing logged fallbacks for Results.
pub trait ResultExt<T> {
    /// Get the value or a default, logging the error if present.
    fn or_default_logged(self, default: T) -> T;
}

impl<T> ResultExt<T> for Result<T> {
    fn or_default_logged(self, default: T) -> T {
        match self {
            Ok(value) => value,
            Err(e) => {
                tracing::error!("Operation failed, using default: {}", e);
                default
            }
        }
    }
}
