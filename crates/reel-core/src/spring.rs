//! Damped spring follower
//!
//! Drives the custom cursor and the card tilt. Each axis is an independent
//! mass-spring-damper pulled toward a target:
//!
//! ```text
//! a = (-stiffness * (x - target) - damping * v) / mass
//! v += a * dt
//! x += v * dt
//! ```
//!
//! Integration is semi-implicit Euler in fixed sub-steps so a stiff spring
//! stays stable at low frame rates.

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::geometry::Point;
use crate::result::Result;

/// Largest integration step in seconds
const MAX_SUBSTEP_S: f64 = 1.0 / 120.0;

/// Frame deltas above this are clamped (e.g. a tab coming back from the background)
const MAX_FRAME_S: f64 = 0.1;

/// Below this distance and speed the spring counts as settled
const REST_EPSILON: f64 = 0.01;

/// Spring physical parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

impl SpringConfig {
    /// Creates a new `SpringConfig` with validation
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if any parameter is non-finite, if stiffness or
    /// mass is not positive, or if damping is negative.
    pub fn new(stiffness: f64, damping: f64, mass: f64) -> Result<Self> {
        let config = Self {
            stiffness,
            damping,
            mass,
        };
        config.validate()?;
        Ok(config)
    }

    /// Cursor follower spring: snappy with a short lag
    #[must_use]
    pub const fn cursor() -> Self {
        Self {
            stiffness: 200.0,
            damping: 25.0,
            mass: 1.0,
        }
    }

    /// Card tilt spring: softer and heavily damped
    #[must_use]
    pub const fn tilt() -> Self {
        Self {
            stiffness: 100.0,
            damping: 30.0,
            mass: 1.0,
        }
    }

    /// # Errors
    ///
    /// Returns `InvalidConfig` naming the first offending parameter.
    pub fn validate(&self) -> Result<()> {
        if !self.stiffness.is_finite() || self.stiffness <= 0.0 {
            return Err(Error::invalid_config(
                "spring.stiffness",
                format!("must be finite and positive, got: {}", self.stiffness),
            ));
        }
        if !self.damping.is_finite() || self.damping < 0.0 {
            return Err(Error::invalid_config(
                "spring.damping",
                format!("must be finite and non-negative, got: {}", self.damping),
            ));
        }
        if !self.mass.is_finite() || self.mass <= 0.0 {
            return Err(Error::invalid_config(
                "spring.mass",
                format!("must be finite and positive, got: {}", self.mass),
            ));
        }
        Ok(())
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::cursor()
    }
}

/// A spring table in which every key is optional
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SpringOverrides {
    stiffness: Option<f64>,
    damping: Option<f64>,
    mass: Option<f64>,
}

impl SpringOverrides {
    fn over(self, base: SpringConfig) -> SpringConfig {
        SpringConfig {
            stiffness: self.stiffness.unwrap_or(base.stiffness),
            damping: self.damping.unwrap_or(base.damping),
            mass: self.mass.unwrap_or(base.mass),
        }
    }
}

/// Reads a spring table, filling missing keys from [`SpringConfig::tilt`]
///
/// # Errors
///
/// Returns the deserializer's error for unknown keys or non-numeric values.
pub(crate) fn deserialize_tilt_spring<'de, D>(
    deserializer: D,
) -> std::result::Result<SpringConfig, D::Error>
where
    D: serde::Deserializer<'de>,
{
    SpringOverrides::deserialize(deserializer).map(|overrides| overrides.over(SpringConfig::tilt()))
}

/// Single-axis spring state
#[derive(Debug, Clone, Copy, PartialEq)]
struct Axis {
    value: f64,
    velocity: f64,
}

impl Axis {
    const fn at(value: f64) -> Self {
        Self {
            value,
            velocity: 0.0,
        }
    }

    fn integrate(self, target: f64, config: &SpringConfig, dt: f64) -> Self {
        let spring = -config.stiffness * (self.value - target);
        let damper = -config.damping * self.velocity;
        let acceleration = (spring + damper) / config.mass;
        let velocity = self.velocity + acceleration * dt;
        Self {
            value: self.value + velocity * dt,
            velocity,
        }
    }

    fn is_settled(self, target: f64) -> bool {
        (self.value - target).abs() < REST_EPSILON && self.velocity.abs() < REST_EPSILON
    }
}

/// A 2D point that chases a target with spring dynamics
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringFollower {
    config: SpringConfig,
    x: Axis,
    y: Axis,
    target: Point,
}

impl SpringFollower {
    /// Creates a follower at rest on `initial`
    #[must_use]
    pub const fn new(config: SpringConfig, initial: Point) -> Self {
        Self {
            config,
            x: Axis::at(initial.x),
            y: Axis::at(initial.y),
            target: initial,
        }
    }

    /// Moves the target; the position catches up over subsequent steps
    pub fn set_target(&mut self, target: Point) {
        if target.is_finite() {
            self.target = target;
        }
    }

    /// Places the follower on `position` with no velocity
    pub fn jump_to(&mut self, position: Point) {
        if position.is_finite() {
            self.x = Axis::at(position.x);
            self.y = Axis::at(position.y);
            self.target = position;
        }
    }

    /// Advances the simulation by `dt_s` seconds and returns the new position
    ///
    /// Negative or non-finite deltas are treated as zero; deltas above 100ms
    /// are clamped.
    pub fn step(&mut self, dt_s: f64) -> Point {
        let mut remaining = if dt_s.is_finite() {
            dt_s.clamp(0.0, MAX_FRAME_S)
        } else {
            0.0
        };

        while remaining > 0.0 {
            let dt = remaining.min(MAX_SUBSTEP_S);
            self.x = self.x.integrate(self.target.x, &self.config, dt);
            self.y = self.y.integrate(self.target.y, &self.config, dt);
            remaining -= dt;
        }

        self.position()
    }

    #[must_use]
    pub const fn position(&self) -> Point {
        Point::new(self.x.value, self.y.value)
    }

    #[must_use]
    pub const fn target(&self) -> Point {
        self.target
    }

    #[must_use]
    pub fn is_at_rest(&self) -> bool {
        self.x.is_settled(self.target.x) && self.y.is_settled(self.target.y)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_spring_config_rejects_bad_values() {
        assert!(SpringConfig::new(0.0, 10.0, 1.0).is_err());
        assert!(SpringConfig::new(100.0, -1.0, 1.0).is_err());
        assert!(SpringConfig::new(100.0, 10.0, 0.0).is_err());
        assert!(SpringConfig::new(f64::NAN, 10.0, 1.0).is_err());
        assert!(SpringConfig::new(f64::INFINITY, 10.0, 1.0).is_err());
    }

    #[test]
    fn test_spring_config_accepts_presets() {
        assert!(SpringConfig::cursor().validate().is_ok());
        assert!(SpringConfig::tilt().validate().is_ok());
    }

    #[test]
    fn test_follower_starts_at_rest() {
        let follower = SpringFollower::new(SpringConfig::cursor(), Point::new(5.0, 5.0));
        assert!(follower.is_at_rest());
        assert_eq!(follower.position(), Point::new(5.0, 5.0));
    }

    #[test]
    fn test_follower_lags_behind_target() {
        let mut follower = SpringFollower::new(SpringConfig::cursor(), Point::origin());
        follower.set_target(Point::new(100.0, 0.0));

        let after_one_frame = follower.step(1.0 / 60.0);
        assert!(after_one_frame.x > 0.0);
        assert!(after_one_frame.x < 100.0);
    }

    #[test]
    fn test_follower_converges() {
        let mut follower = SpringFollower::new(SpringConfig::cursor(), Point::origin());
        follower.set_target(Point::new(300.0, -120.0));

        for _ in 0..600 {
            follower.step(1.0 / 60.0);
        }

        let position = follower.position();
        assert!((position.x - 300.0).abs() < 0.05);
        assert!((position.y + 120.0).abs() < 0.05);
        assert!(follower.is_at_rest());
    }

    #[test]
    fn test_follower_ignores_bad_deltas() {
        let mut follower = SpringFollower::new(SpringConfig::cursor(), Point::origin());
        follower.set_target(Point::new(50.0, 50.0));

        assert_eq!(follower.step(-1.0), Point::origin());
        assert_eq!(follower.step(f64::NAN), Point::origin());
    }

    #[test]
    fn test_follower_stays_finite_on_huge_delta() {
        let mut follower = SpringFollower::new(SpringConfig::cursor(), Point::origin());
        follower.set_target(Point::new(1000.0, 1000.0));

        let position = follower.step(30.0);
        assert!(position.is_finite());
        assert!(position.x.abs() < 2000.0);
    }

    #[test]
    fn test_non_finite_target_is_ignored() {
        let mut follower = SpringFollower::new(SpringConfig::tilt(), Point::origin());
        follower.set_target(Point::new(f64::NAN, 1.0));
        assert_eq!(follower.target(), Point::origin());
    }

    #[test]
    fn test_jump_to_resets_velocity() {
        let mut follower = SpringFollower::new(SpringConfig::cursor(), Point::origin());
        follower.set_target(Point::new(100.0, 100.0));
        follower.step(0.05);

        follower.jump_to(Point::new(7.0, 8.0));
        assert!(follower.is_at_rest());
        assert_eq!(follower.step(0.05), Point::new(7.0, 8.0));
    }
}
