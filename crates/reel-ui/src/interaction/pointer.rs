//! Pointer and wheel event extraction
//!
//! Turns `web_sys` events into the plain values the motion core works with.
//! Client coordinates are passed through untouched; element geometry comes
//! from `getBoundingClientRect`.

use reel_core::{Point, Rect};
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent, WheelEvent};

/// Errors reading pointer geometry from an event
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PointerError {
    /// Event has no current target (listener detached mid-dispatch)
    #[error("event has no current target")]
    NoCurrentTarget,

    /// Current target is not an element
    #[error("event target is not an element")]
    NotAnElement,
}

/// Pointer position of a mouse event in client pixels
///
/// # Examples
///
/// ```
/// use reel_ui::interaction::pointer::PointerSample;
///
/// let sample = PointerSample { client_x: 120.0, client_y: 80.0 };
/// assert!((sample.point().x - 120.0).abs() < f64::EPSILON);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub client_x: f64,
    pub client_y: f64,
}

impl PointerSample {
    #[must_use]
    pub const fn point(self) -> Point {
        Point::new(self.client_x, self.client_y)
    }
}

/// Vertical scroll of a wheel event (positive = down)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelSample {
    pub delta_y: f64,
}

/// Extracts the client-space pointer position from a mouse event
#[must_use]
pub fn pointer_sample(event: &MouseEvent) -> PointerSample {
    PointerSample {
        client_x: f64::from(event.client_x()),
        client_y: f64::from(event.client_y()),
    }
}

/// Extracts the scroll delta from a wheel event
#[must_use]
pub fn wheel_sample(event: &WheelEvent) -> WheelSample {
    WheelSample {
        delta_y: event.delta_y(),
    }
}

/// Bounding box of an element in client pixels
#[must_use]
pub fn element_rect(element: &Element) -> Rect {
    let rect = element.get_bounding_client_rect();
    Rect::new(rect.left(), rect.top(), rect.width(), rect.height())
}

/// Bounding box of the element the listener is attached to
///
/// # Errors
///
/// Returns an error if the event has no current target or it is not an element.
pub fn current_target_rect(event: &MouseEvent) -> Result<Rect, PointerError> {
    event
        .current_target()
        .ok_or(PointerError::NoCurrentTarget)?
        .dyn_into::<Element>()
        .map(|element| element_rect(&element))
        .map_err(|_| PointerError::NotAnElement)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_sample_point() {
        let sample = PointerSample {
            client_x: 100.0,
            client_y: 200.0,
        };
        assert_eq!(sample.point(), Point::new(100.0, 200.0));
    }

    #[test]
    fn test_wheel_sample_equality() {
        let down = WheelSample { delta_y: 50.0 };
        let up = WheelSample { delta_y: -50.0 };
        assert_ne!(down, up);
        assert_eq!(down, WheelSample { delta_y: 50.0 });
    }

    #[test]
    fn test_pointer_error_display() {
        assert_eq!(
            PointerError::NotAnElement.to_string(),
            "event target is not an element"
        );
    }
}
