//! Interaction module for user input handling
//!
//! Extracts pointer, wheel and hover information from browser events.

pub mod hover;
pub mod pointer;

pub use hover::{INTERACTIVE_SELECTOR, is_interactive_target};
pub use pointer::{
    PointerError, PointerSample, WheelSample, current_target_rect, pointer_sample,
    wheel_sample,
};
