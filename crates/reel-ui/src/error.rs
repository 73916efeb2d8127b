//! Error types for the landing page UI
//!
//! Browser lookups and listener registration report typed errors; components
//! log them to the console and keep rendering whatever still works.

use thiserror::Error;

use crate::interaction::pointer::PointerError;
use crate::motion::raf::RafError;

/// Errors that can occur while wiring the page to the browser
#[derive(Debug, Clone, Error)]
pub enum UiError {
    /// Motion config or slide catalog could not be loaded
    #[error("content unavailable: {0}")]
    Content(#[from] reel_core::Error),

    /// Animation loop could not be started or stopped
    #[error("animation loop failed: {0}")]
    Animation(#[from] RafError),

    /// Pointer geometry could not be read
    #[error("pointer tracking failed: {0}")]
    Pointer(#[from] PointerError),

    /// Window object missing (not running in a browser)
    #[error("window is not available")]
    WindowNotAvailable,
}

/// Result type alias for UI operations
pub type Result<T> = std::result::Result<T, UiError>;

/// Writes an error to the browser console
pub fn log_error(context: &str, error: &UiError) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::error_1(&format!("{context}: {error}").into());

    #[cfg(not(target_arch = "wasm32"))]
    let _ = (context, error);
}
