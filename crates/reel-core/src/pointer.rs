//! Pointer tracking and the pointer-driven effects built on it
//!
//! The tracker stores the raw client-space pointer position. Consumers derive
//! what they need from it:
//! - particles read it in percentage space ([`PointerTracker::percent`]),
//! - the cursor follower reads it in pixels, offset to centre the cursor,
//! - the hero reads it relative to its own bounding box as a tilt fraction.

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::geometry::Point;
use crate::result::Result;
use crate::spring::{SpringConfig, deserialize_tilt_spring};

/// Axis-aligned box in client pixels, e.g. from `getBoundingClientRect`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// Whether the box has a usable, non-zero area
    #[must_use]
    pub fn has_area(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Last known pointer position and viewport size
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerTracker {
    client: Point,
    viewport_width: f64,
    viewport_height: f64,
}

impl PointerTracker {
    /// Starts at client (0, 0) until the first move event arrives
    #[must_use]
    pub const fn new(viewport_width: f64, viewport_height: f64) -> Self {
        Self {
            client: Point::origin(),
            viewport_width,
            viewport_height,
        }
    }

    /// Records a pointer-move event; non-finite coordinates are dropped
    pub fn record(&mut self, client_x: f64, client_y: f64) {
        let point = Point::new(client_x, client_y);
        if point.is_finite() {
            self.client = point;
        }
    }

    /// Records a window resize
    pub fn resize(&mut self, viewport_width: f64, viewport_height: f64) {
        self.viewport_width = viewport_width;
        self.viewport_height = viewport_height;
    }

    /// Raw client-space position in pixels
    #[must_use]
    pub const fn client(&self) -> Point {
        self.client
    }

    /// Position as a percentage of the viewport, `None` for a degenerate viewport
    #[must_use]
    pub fn percent(&self) -> Option<Point> {
        normalize_to_viewport(self.client, self.viewport_width, self.viewport_height)
    }
}

/// Converts a client position to viewport percentage space
#[must_use]
pub fn normalize_to_viewport(client: Point, width: f64, height: f64) -> Option<Point> {
    Rect::new(0.0, 0.0, width, height)
        .has_area()
        .then(|| Point::new(client.x / width * 100.0, client.y / height * 100.0))
}

/// Custom cursor configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CursorConfig {
    pub spring: SpringConfig,
    /// Half the cursor size, subtracted so the cursor centres on the pointer
    pub offset_px: f64,
}

impl CursorConfig {
    /// Where the cursor element should head for a given pointer position
    #[must_use]
    pub fn target_for(&self, client: Point) -> Point {
        client - Point::new(self.offset_px, self.offset_px)
    }

    /// # Errors
    ///
    /// Returns `InvalidConfig` for a bad spring or non-finite offset.
    pub fn validate(&self) -> Result<()> {
        self.spring.validate()?;
        if !self.offset_px.is_finite() {
            return Err(Error::invalid_config(
                "cursor.offset_px",
                format!("must be finite, got: {}", self.offset_px),
            ));
        }
        Ok(())
    }
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            spring: SpringConfig::cursor(),
            offset_px: 10.0,
        }
    }
}

/// Active card tilt configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TiltConfig {
    /// Missing keys in a partial table come from the tilt preset
    #[serde(deserialize_with = "deserialize_tilt_spring")]
    pub spring: SpringConfig,
    /// Rotation at the edge of the hero, in degrees
    pub max_angle_deg: f64,
    /// Backdrop gradient shift at the edge of the hero, in pixels
    pub backdrop_shift_px: f64,
}

impl TiltConfig {
    /// # Errors
    ///
    /// Returns `InvalidConfig` for a bad spring or non-finite angles.
    pub fn validate(&self) -> Result<()> {
        self.spring.validate()?;
        if !self.max_angle_deg.is_finite() {
            return Err(Error::invalid_config(
                "tilt.max_angle_deg",
                format!("must be finite, got: {}", self.max_angle_deg),
            ));
        }
        if !self.backdrop_shift_px.is_finite() {
            return Err(Error::invalid_config(
                "tilt.backdrop_shift_px",
                format!("must be finite, got: {}", self.backdrop_shift_px),
            ));
        }
        Ok(())
    }
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self {
            spring: SpringConfig::tilt(),
            max_angle_deg: 15.0,
            backdrop_shift_px: 30.0,
        }
    }
}

/// Pointer offset from the centre of `bounds` as a fraction in [-0.5, 0.5]
///
/// Returns `None` when the box has no area.
#[must_use]
pub fn tilt_fraction(client: Point, bounds: &Rect) -> Option<Point> {
    bounds.has_area().then(|| {
        Point::new(
            ((client.x - bounds.left) / bounds.width - 0.5).clamp(-0.5, 0.5),
            ((client.y - bounds.top) / bounds.height - 0.5).clamp(-0.5, 0.5),
        )
    })
}

/// Card rotation in degrees for a tilt fraction
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TiltAngles {
    pub rotate_x_deg: f64,
    pub rotate_y_deg: f64,
}

/// Maps a tilt fraction to rotations
///
/// Pointer below centre tips the card back (negative `rotateX`), pointer to
/// the right turns it right (positive `rotateY`).
#[must_use]
pub fn tilt_angles(fraction: Point, max_angle_deg: f64) -> TiltAngles {
    let span = max_angle_deg * 2.0;
    TiltAngles {
        rotate_x_deg: -fraction.y * span,
        rotate_y_deg: fraction.x * span,
    }
}

/// Magnetic hover configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MagneticConfig {
    /// Fraction of the pointer's offset from centre the element follows
    pub strength: f64,
    /// Lighter pull used by the ingredient chips in the details overlay
    pub ingredient_strength: f64,
}

impl Default for MagneticConfig {
    fn default() -> Self {
        Self {
            strength: 0.3,
            ingredient_strength: 0.15,
        }
    }
}

impl MagneticConfig {
    /// # Errors
    ///
    /// Returns `InvalidConfig` unless strength is finite and in [0, 1].
    pub fn validate(&self) -> Result<()> {
        let strengths = [
            ("magnetic.strength", self.strength),
            ("magnetic.ingredient_strength", self.ingredient_strength),
        ];
        for (field, value) in strengths {
            if !(0.0..=1.0).contains(&value) {
                return Err(Error::invalid_config(
                    field,
                    format!("must be within [0, 1], got: {value}"),
                ));
            }
        }
        Ok(())
    }
}

/// Translation that pulls an element towards the pointer
#[must_use]
pub fn magnetic_offset(client: Point, bounds: &Rect, strength: f64) -> Point {
    if !bounds.has_area() || !client.is_finite() {
        return Point::origin();
    }
    (client - bounds.center()).scale(strength)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_percent_space() {
        let mut tracker = PointerTracker::new(1000.0, 500.0);
        assert_eq!(tracker.percent(), Some(Point::origin()));

        tracker.record(250.0, 250.0);
        assert_eq!(tracker.percent(), Some(Point::new(25.0, 50.0)));
    }

    #[test]
    fn test_zero_viewport_has_no_percent() {
        let tracker = PointerTracker::new(0.0, 800.0);
        assert_eq!(tracker.percent(), None);
    }

    #[test]
    fn test_non_finite_moves_are_dropped() {
        let mut tracker = PointerTracker::new(100.0, 100.0);
        tracker.record(10.0, 20.0);
        tracker.record(f64::NAN, 5.0);
        assert_eq!(tracker.client(), Point::new(10.0, 20.0));
    }

    #[test]
    fn test_cursor_target_is_centred() {
        let config = CursorConfig::default();
        assert_eq!(
            config.target_for(Point::new(110.0, 60.0)),
            Point::new(100.0, 50.0)
        );
    }

    #[test]
    fn test_tilt_fraction_corners() {
        let bounds = Rect::new(100.0, 100.0, 200.0, 100.0);

        let centre = tilt_fraction(Point::new(200.0, 150.0), &bounds).unwrap();
        assert!(centre.x.abs() < EPSILON && centre.y.abs() < EPSILON);

        let top_left = tilt_fraction(Point::new(100.0, 100.0), &bounds).unwrap();
        assert!((top_left.x + 0.5).abs() < EPSILON);
        assert!((top_left.y + 0.5).abs() < EPSILON);

        assert!(tilt_fraction(Point::origin(), &Rect::new(0.0, 0.0, 0.0, 10.0)).is_none());
    }

    #[test]
    fn test_tilt_angles_range() {
        let angles = tilt_angles(Point::new(0.5, 0.5), 15.0);
        assert!((angles.rotate_y_deg - 15.0).abs() < EPSILON);
        assert!((angles.rotate_x_deg + 15.0).abs() < EPSILON);

        let angles = tilt_angles(Point::new(-0.5, -0.5), 15.0);
        assert!((angles.rotate_y_deg + 15.0).abs() < EPSILON);
        assert!((angles.rotate_x_deg - 15.0).abs() < EPSILON);
    }

    #[test]
    fn test_magnetic_offset() {
        let bounds = Rect::new(0.0, 0.0, 100.0, 40.0);
        let offset = magnetic_offset(Point::new(100.0, 20.0), &bounds, 0.3);
        assert!((offset.x - 15.0).abs() < EPSILON);
        assert!(offset.y.abs() < EPSILON);

        let none = magnetic_offset(Point::new(1.0, 1.0), &Rect::new(0.0, 0.0, 0.0, 0.0), 0.3);
        assert_eq!(none, Point::origin());
    }

    #[test]
    fn test_config_validation() {
        assert!(CursorConfig::default().validate().is_ok());
        assert!(TiltConfig::default().validate().is_ok());
        assert!(MagneticConfig::default().validate().is_ok());
        let too_strong = MagneticConfig {
            strength: 1.5,
            ..MagneticConfig::default()
        };
        assert!(too_strong.validate().is_err());
        let negative_chips = MagneticConfig {
            ingredient_strength: -0.1,
            ..MagneticConfig::default()
        };
        assert!(negative_chips.validate().is_err());
    }

    #[test]
    fn test_ingredient_strength_is_lighter_by_default() {
        let magnetic = MagneticConfig::default();
        assert!(magnetic.ingredient_strength < magnetic.strength);
        assert!((magnetic.ingredient_strength - 0.15).abs() < EPSILON);
    }

    #[test]
    fn test_partial_tilt_spring_fills_from_tilt_preset() {
        let tilt: TiltConfig = toml::from_str("[spring]\nstiffness = 120.0").unwrap();
        let preset = SpringConfig::tilt();
        assert!((tilt.spring.stiffness - 120.0).abs() < EPSILON);
        assert!((tilt.spring.damping - preset.damping).abs() < EPSILON);
        assert!((tilt.spring.mass - preset.mass).abs() < EPSILON);
        assert!(tilt.validate().is_ok());

        let missing: TiltConfig = toml::from_str("max_angle_deg = 10.0").unwrap();
        assert_eq!(missing.spring, preset);

        assert!(toml::from_str::<TiltConfig>("[spring]\nbounce = 1.0").is_err());
    }
}
