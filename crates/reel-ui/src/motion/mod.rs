//! Time sources for the page: the animation-frame loop and the page clock

pub mod raf;

pub use raf::{AnimationHandle, AnimationState, FrameTiming, RafError, start_animation_loop};

/// Milliseconds since page load, the timestamp the carousel controller runs on
///
/// Reads `performance.now()`, which is monotonic. Falls back to the wall
/// clock only where no `Performance` object exists.
#[must_use]
pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|window| window.performance())
        .map_or_else(js_sys::Date::now, |performance| performance.now())
}

/// Stops an animation loop, logging a failed frame cancellation
pub fn stop_logged(handle: AnimationHandle) {
    if let Err(e) = handle.stop() {
        crate::error::log_error("stopping animation", &e.into());
    }
}
