//! Shared page state
//!
//! The motion config and slide catalog are loaded once at mount. The pointer
//! tracker is the single source of pointer position: a window listener writes
//! it, and the particle field, cursor and hero read it.
//!
//! Use `provide_landing_state()` at the root and `use_landing_state()` below it.

use leptos::ev;
use leptos::prelude::*;
use reel_core::{Catalog, MotionConfig, PointerTracker};

use crate::error::{Result, UiError, log_error};
use crate::interaction::pointer_sample;

/// Page-wide state shared through context
#[derive(Debug, Clone, Copy)]
pub struct LandingState {
    pub config: MotionConfig,
    pub catalog: StoredValue<Catalog>,
    pub pointer: RwSignal<PointerTracker>,
}

impl LandingState {
    /// Loads the embedded config and catalog
    ///
    /// An unusable catalog is logged and replaced by an empty one; the hero
    /// then renders its placeholder slide.
    #[must_use]
    pub fn load() -> Self {
        let config = MotionConfig::embedded();
        let catalog = Catalog::embedded().unwrap_or_else(|e| {
            log_error("loading slide catalog", &UiError::from(e));
            Catalog::default()
        });
        let (width, height) = viewport_size().unwrap_or_else(|e| {
            log_error("reading viewport size", &e);
            (0.0, 0.0)
        });

        Self {
            config,
            catalog: StoredValue::new(catalog),
            pointer: RwSignal::new(PointerTracker::new(width, height)),
        }
    }
}

/// Creates the page state, provides it as context and starts pointer tracking
pub fn provide_landing_state() -> LandingState {
    let state = LandingState::load();
    provide_context(state);
    track_pointer(state.pointer);
    state
}

/// Reads the page state provided by the root component
///
/// Falls back to a freshly loaded state when rendered outside `App`.
#[must_use]
pub fn use_landing_state() -> LandingState {
    use_context::<LandingState>().unwrap_or_else(LandingState::load)
}

/// Window inner size in CSS pixels
///
/// # Errors
///
/// Returns `WindowNotAvailable` outside a browser or when the size is unreadable.
pub fn viewport_size() -> Result<(f64, f64)> {
    let window = web_sys::window().ok_or(UiError::WindowNotAvailable)?;
    let width = window.inner_width().ok().and_then(|w| w.as_f64());
    let height = window.inner_height().ok().and_then(|h| h.as_f64());
    width.zip(height).ok_or(UiError::WindowNotAvailable)
}

/// Keeps `pointer` current with window mouse moves and resizes
fn track_pointer(pointer: RwSignal<PointerTracker>) {
    let on_move = window_event_listener(ev::mousemove, move |event| {
        let sample = pointer_sample(&event);
        pointer.update(|tracker| tracker.record(sample.client_x, sample.client_y));
    });
    release_on_cleanup(on_move, WindowListenerHandle::remove);

    let on_resize = window_event_listener(ev::resize, move |_| {
        if let Ok((width, height)) = viewport_size() {
            pointer.update(|tracker| tracker.resize(width, height));
        }
    });
    release_on_cleanup(on_resize, WindowListenerHandle::remove);
}

/// Holds a browser resource until the current reactive owner is cleaned up,
/// then hands it to `release`
///
/// Works for listener handles, timers and animation loops alike, none of
/// which can be moved into a `Send` cleanup closure directly.
pub fn release_on_cleanup<T: 'static>(
    resource: T,
    release: impl FnOnce(T) + Send + Sync + 'static,
) {
    let slot = StoredValue::new_local(Some(resource));
    on_cleanup(move || {
        if let Some(resource) = slot.try_update_value(Option::take).flatten() {
            release(resource);
        }
    });
}
