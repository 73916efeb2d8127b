//! RequestAnimationFrame-based animation loop
//!
//! Drives the per-frame motion (particle repulsion, cursor spring, card tilt).
//! Pauses on its own while the tab is hidden and resumes when it is visible.
//! Stopping the loop also detaches its visibility listener.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

use leptos::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

/// Type alias for RAF closure to reduce complexity
type RafClosure = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Visibility listener, held until the loop is stopped
type VisibilityClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

const VISIBILITY_EVENT: &str = "visibilitychange";

/// RAF animation state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationState {
    /// Animation is running
    Running,
    /// Animation is paused (e.g., tab hidden)
    Paused,
    /// Animation has been stopped/cleaned up
    Stopped,
}

/// Frame timing information
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTiming {
    /// Current timestamp from RAF (milliseconds)
    pub timestamp: f64,
    /// Delta time since last frame (milliseconds)
    pub delta: f64,
}

impl FrameTiming {
    /// Create initial frame timing
    #[must_use]
    pub const fn initial(timestamp: f64) -> Self {
        Self {
            timestamp,
            delta: 0.0,
        }
    }

    /// Calculate next frame timing
    ///
    /// A timestamp that goes backwards yields a zero delta.
    #[must_use]
    pub fn next(self, timestamp: f64) -> Self {
        Self {
            timestamp,
            delta: (timestamp - self.timestamp).max(0.0),
        }
    }

    /// Delta in seconds, the unit the spring integrator works in
    #[must_use]
    pub fn delta_secs(self) -> f64 {
        self.delta / 1000.0
    }
}

/// RAF animation loop errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum RafError {
    /// Failed to get window object
    #[error("failed to get window: window is not available")]
    WindowNotAvailable,

    /// Failed to get document object
    #[error("failed to get document: document is not available")]
    DocumentNotAvailable,

    /// Failed to request animation frame
    #[error("failed to request animation frame: {0}")]
    RequestFailed(String),

    /// Failed to cancel animation frame
    #[error("failed to cancel animation frame: {0}")]
    CancelFailed(String),

    /// Failed to add visibility change listener
    #[error("failed to add visibility listener: {0}")]
    VisibilityListenerFailed(String),

    /// Failed to remove visibility change listener
    #[error("failed to remove visibility listener: {0}")]
    VisibilityListenerRemoveFailed(String),

    /// Failed to cast closure
    #[error("failed to cast closure: type mismatch")]
    ClosureCastFailed,
}

/// RAF animation handle for cleanup
#[derive(Clone)]
pub struct AnimationHandle {
    window: Window,
    document: Document,
    request_id: Rc<RefCell<Option<i32>>>,
    visibility_listener: VisibilityClosure,
    state_signal: RwSignal<AnimationState>,
}

impl AnimationHandle {
    /// Stop the animation loop
    ///
    /// # Errors
    ///
    /// Returns error if cancellation or listener removal fails
    pub fn stop(&self) -> Result<(), RafError> {
        let _ = self.state_signal.try_set(AnimationState::Stopped);

        if let Some(listener) = self.visibility_listener.borrow_mut().take() {
            self.document
                .remove_event_listener_with_callback(
                    VISIBILITY_EVENT,
                    listener.as_ref().unchecked_ref(),
                )
                .map_err(|e| RafError::VisibilityListenerRemoveFailed(format!("{e:?}")))?;
        }

        if let Some(id) = self.request_id.borrow_mut().take() {
            self.window
                .cancel_animation_frame(id)
                .map_err(|e| RafError::CancelFailed(format!("{e:?}")))?;
        }

        Ok(())
    }

    /// Pause the animation loop
    pub fn pause(&self) {
        self.state_signal.set(AnimationState::Paused);
    }

    /// Resume the animation loop
    pub fn resume(&self) {
        self.state_signal.set(AnimationState::Running);
    }

    /// Get current animation state
    #[must_use]
    pub fn state(&self) -> AnimationState {
        self.state_signal.get_untracked()
    }
}

/// Start `RequestAnimationFrame` loop
///
/// Calls `render_fn` every frame with timing information. While the tab is
/// hidden frames are skipped; the first frame after becoming visible again
/// carries the whole hidden interval as its delta, so callers should clamp.
///
/// # Errors
///
/// Returns error if:
/// - Window or document are not available
/// - RAF scheduling fails
/// - Visibility API setup fails
///
/// # Example
///
/// ```no_run
/// use reel_ui::motion::raf::start_animation_loop;
///
/// let handle = start_animation_loop(move |timing| {
///     let _seconds = timing.delta_secs();
/// })?;
///
/// // Later: cleanup
/// handle.stop()?;
/// # Ok::<(), reel_ui::motion::raf::RafError>(())
/// ```
pub fn start_animation_loop<F>(render_fn: F) -> Result<AnimationHandle, RafError>
where
    F: Fn(FrameTiming) + 'static,
{
    let window = get_window()?;
    let document = get_document(&window)?;

    let state_signal = RwSignal::new(AnimationState::Running);

    // Shared state for RAF callback
    let request_id = Rc::new(RefCell::new(None::<i32>));
    let request_id_clone = request_id.clone();

    let timing = Rc::new(RefCell::new(None::<FrameTiming>));

    let closure: RafClosure = Rc::new(RefCell::new(None));
    let closure_clone = closure.clone();

    let window_clone = window.clone();
    let render_fn = Rc::new(render_fn);

    *closure.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
        let state = state_signal
            .try_get_untracked()
            .unwrap_or(AnimationState::Stopped);
        if state == AnimationState::Stopped {
            return;
        }

        // Keep the loop alive while paused so it can resume without a restart
        if state == AnimationState::Running {
            let current_timing = timing
                .borrow()
                .map_or_else(|| FrameTiming::initial(timestamp), |t| t.next(timestamp));
            *timing.borrow_mut() = Some(current_timing);

            render_fn(current_timing);
        }

        let next_id = schedule_next_frame(&window_clone, &closure_clone);
        if let Ok(id) = next_id {
            *request_id_clone.borrow_mut() = Some(id);
        }
    }) as Box<dyn FnMut(f64)>));

    let first_id = schedule_next_frame(&window, &closure)?;
    *request_id.borrow_mut() = Some(first_id);

    let listener = setup_visibility_listener(&document, state_signal)?;

    Ok(AnimationHandle {
        window,
        document,
        request_id,
        visibility_listener: Rc::new(RefCell::new(Some(listener))),
        state_signal,
    })
}

/// Get window object
fn get_window() -> Result<Window, RafError> {
    web_sys::window().ok_or(RafError::WindowNotAvailable)
}

/// Get document from window
fn get_document(window: &Window) -> Result<Document, RafError> {
    window.document().ok_or(RafError::DocumentNotAvailable)
}

/// Schedule next RAF frame
fn schedule_next_frame(window: &Window, closure: &RafClosure) -> Result<i32, RafError> {
    closure
        .borrow()
        .as_ref()
        .ok_or(RafError::ClosureCastFailed)
        .and_then(|cb| {
            window
                .request_animation_frame(cb.as_ref().unchecked_ref())
                .map_err(|e| RafError::RequestFailed(format!("{e:?}")))
        })
}

/// Setup Page Visibility API listener
///
/// Pauses the loop when the tab is hidden, resumes when visible. The returned
/// closure must outlive the registration.
fn setup_visibility_listener(
    document: &Document,
    state_signal: RwSignal<AnimationState>,
) -> Result<Closure<dyn FnMut()>, RafError> {
    let closure = Closure::wrap(Box::new(move || {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        let is_hidden = document.hidden();

        let Some(current_state) = state_signal.try_get_untracked() else {
            return;
        };
        if is_hidden && current_state == AnimationState::Running {
            state_signal.set(AnimationState::Paused);
        } else if !is_hidden && current_state == AnimationState::Paused {
            state_signal.set(AnimationState::Running);
        }
    }) as Box<dyn FnMut()>);

    document
        .add_event_listener_with_callback(VISIBILITY_EVENT, closure.as_ref().unchecked_ref())
        .map_err(|e| RafError::VisibilityListenerFailed(format!("{e:?}")))?;

    Ok(closure)
}
