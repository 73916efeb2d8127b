//! Leptos 0.7 CSR frontend for the Hero Reel landing page
//!
//! Renders a full-screen hero with a 3D card carousel, an ambient particle
//! field, a spring-driven custom cursor and magnetic buttons. All motion math
//! and carousel state live in `reel-core`; this crate wires them to the DOM.
//!
//! ## Module Structure
//! - `app`: Root component
//! - `components`: Hero, cards, particles, cursor, details overlay
//! - `state`: Page-wide config, catalog and pointer context
//! - `motion`: Animation-frame loop and wall clock
//! - `interaction`: Pointer, wheel and hover extraction from DOM events
//! - `error`: Error types and console logging

#![forbid(unsafe_code)]

pub mod app;
pub mod components;
pub mod error;
pub mod interaction;
pub mod motion;
pub mod state;

// Re-export main App component for convenience - Trunk will auto-mount it
pub use app::App;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_structure() {
        let _app = App;
        let _hero = components::Hero;
        assert_eq!(interaction::INTERACTIVE_SELECTOR, ".card, .details-btn");
    }

    #[test]
    fn test_error_types() {
        let err = error::UiError::from(reel_core::Error::EmptyCatalog);
        assert!(err.to_string().contains("catalog is empty"));
    }
}
