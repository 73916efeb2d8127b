//! Ambient particle field with pointer repulsion
//!
//! Particles live in percentage space (0..100 on both axes, relative to the
//! viewport). Every frame each particle is placed at its rest position plus a
//! repulsion offset that depends only on where the pointer is right now:
//!
//! ```text
//! d = |pointer - rest|
//! offset = d < R ? -(pointer - rest) / d * strength * (R - d) / R : 0
//! ```
//!
//! There is no velocity: when the pointer leaves the radius the particle is
//! back at rest on the very next frame.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::geometry::Point;
use crate::result::Result;

/// Repulsion field parameters, in percentage units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RepulsionConfig {
    /// Distance below which the pointer pushes a particle
    pub radius: f64,
    /// Displacement applied when the pointer sits right next to the particle
    pub strength: f64,
}

impl RepulsionConfig {
    /// # Errors
    ///
    /// Returns `InvalidConfig` if radius is not positive or strength is
    /// negative or either is non-finite.
    pub fn new(radius: f64, strength: f64) -> Result<Self> {
        let config = Self { radius, strength };
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// See [`RepulsionConfig::new`].
    pub fn validate(&self) -> Result<()> {
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(Error::invalid_config(
                "particles.repulsion.radius",
                format!("must be finite and positive, got: {}", self.radius),
            ));
        }
        if !self.strength.is_finite() || self.strength < 0.0 {
            return Err(Error::invalid_config(
                "particles.repulsion.strength",
                format!("must be finite and non-negative, got: {}", self.strength),
            ));
        }
        Ok(())
    }
}

impl Default for RepulsionConfig {
    fn default() -> Self {
        Self {
            radius: 20.0,
            strength: 10.0,
        }
    }
}

/// Particle field configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParticleConfig {
    pub count: usize,
    pub repulsion: RepulsionConfig,
}

impl ParticleConfig {
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the repulsion parameters are invalid.
    pub fn validate(&self) -> Result<()> {
        self.repulsion.validate()
    }
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            count: 30,
            repulsion: RepulsionConfig::default(),
        }
    }
}

/// One decorative particle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub id: usize,
    /// Where the particle sits when the pointer is far away
    pub rest: Point,
    /// Current rendered position
    pub position: Point,
    /// Diameter in pixels
    pub size: f64,
    /// Length of one breathing cycle in seconds
    pub duration_s: f64,
    /// Non-positive start offset so particles begin mid-cycle
    pub delay_s: f64,
}

impl Particle {
    /// Draws a particle with randomized placement and animation timing
    pub fn random<R: Rng + ?Sized>(id: usize, rng: &mut R) -> Self {
        let rest = Point::new(rng.gen_range(0.0..100.0), rng.gen_range(0.0..100.0));
        Self {
            id,
            rest,
            position: rest,
            size: rng.gen_range(1.0..5.0),
            duration_s: rng.gen_range(10.0..30.0),
            delay_s: -rng.gen_range(0.0..20.0),
        }
    }

    /// Blur radius in pixels, half the particle size
    #[must_use]
    pub fn blur_px(&self) -> f64 {
        self.size / 2.0
    }
}

/// Displacement a pointer induces on a particle resting at `rest`
///
/// Zero when the pointer is at or beyond the radius, and zero when the
/// pointer sits exactly on the rest position.
#[must_use]
pub fn repulsion_offset(rest: Point, pointer: Point, config: &RepulsionConfig) -> Point {
    let delta = pointer - rest;
    let distance = delta.length();

    if !distance.is_finite() || distance >= config.radius || distance <= f64::EPSILON {
        return Point::origin();
    }

    let force = (config.radius - distance) / config.radius;
    delta.scale(-force * config.strength / distance)
}

/// The full set of particles for one mount of the page
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleField {
    particles: Vec<Particle>,
    repulsion: RepulsionConfig,
}

impl ParticleField {
    /// Generates `config.count` random particles
    pub fn generate<R: Rng + ?Sized>(config: &ParticleConfig, rng: &mut R) -> Self {
        let particles = (0..config.count)
            .map(|id| Particle::random(id, rng))
            .collect::<Vec<_>>();

        tracing::debug!(count = particles.len(), "generated particle field");

        Self {
            particles,
            repulsion: config.repulsion,
        }
    }

    /// Builds a field from explicit particles
    #[must_use]
    pub const fn from_particles(particles: Vec<Particle>, repulsion: RepulsionConfig) -> Self {
        Self {
            particles,
            repulsion,
        }
    }

    /// Recomputes every particle position for the current pointer
    ///
    /// `None` means no pointer is known, and all particles go back to rest.
    pub fn update(&mut self, pointer: Option<Point>) {
        let repulsion = self.repulsion;
        self.particles.iter_mut().for_each(|particle| {
            let offset = pointer
                .map(|p| repulsion_offset(particle.rest, p, &repulsion))
                .unwrap_or_default();
            particle.position = particle.rest + offset;
        });
    }

    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    #[must_use]
    pub const fn repulsion(&self) -> &RepulsionConfig {
        &self.repulsion
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_repulsion_zero_outside_radius() {
        let config = RepulsionConfig::default();
        let rest = Point::new(50.0, 50.0);

        assert_eq!(
            repulsion_offset(rest, Point::new(70.0, 50.0), &config),
            Point::origin()
        );
        assert_eq!(
            repulsion_offset(rest, Point::new(90.0, 90.0), &config),
            Point::origin()
        );
    }

    #[test]
    fn test_repulsion_pushes_away_from_pointer() {
        let config = RepulsionConfig::default();
        let rest = Point::new(50.0, 50.0);

        // Pointer 10 units to the right: force (20 - 10) / 20 = 0.5, offset 5 to the left
        let offset = repulsion_offset(rest, Point::new(60.0, 50.0), &config);
        assert!((offset.x + 5.0).abs() < EPSILON);
        assert!(offset.y.abs() < EPSILON);
    }

    #[test]
    fn test_repulsion_pointer_on_rest_is_zero() {
        let config = RepulsionConfig::default();
        let rest = Point::new(25.0, 75.0);
        assert_eq!(repulsion_offset(rest, rest, &config), Point::origin());
    }

    #[test]
    fn test_repulsion_config_validation() {
        assert!(RepulsionConfig::new(0.0, 10.0).is_err());
        assert!(RepulsionConfig::new(20.0, -1.0).is_err());
        assert!(RepulsionConfig::new(f64::NAN, 10.0).is_err());
        assert!(RepulsionConfig::new(20.0, 0.0).is_ok());
    }

    #[test]
    fn test_generate_respects_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        let field = ParticleField::generate(&ParticleConfig::default(), &mut rng);

        assert_eq!(field.len(), 30);
        for (i, particle) in field.particles().iter().enumerate() {
            assert_eq!(particle.id, i);
            assert!((0.0..100.0).contains(&particle.rest.x));
            assert!((0.0..100.0).contains(&particle.rest.y));
            assert!((1.0..5.0).contains(&particle.size));
            assert!((10.0..30.0).contains(&particle.duration_s));
            assert!(particle.delay_s <= 0.0 && particle.delay_s > -20.0);
            assert_eq!(particle.position, particle.rest);
        }
    }

    #[test]
    fn test_update_moves_only_nearby_particles() {
        let make = |id, x, y| Particle {
            id,
            rest: Point::new(x, y),
            position: Point::new(x, y),
            size: 2.0,
            duration_s: 10.0,
            delay_s: 0.0,
        };
        let mut field = ParticleField::from_particles(
            vec![make(0, 10.0, 10.0), make(1, 90.0, 90.0)],
            RepulsionConfig::default(),
        );

        field.update(Some(Point::new(15.0, 10.0)));
        let near = field.particles()[0];
        let far = field.particles()[1];
        assert!(near.position.x < near.rest.x);
        assert_eq!(far.position, far.rest);

        field.update(None);
        assert_eq!(field.particles()[0].position, field.particles()[0].rest);
    }

    #[test]
    fn test_blur_is_half_size() {
        let mut rng = StdRng::seed_from_u64(1);
        let particle = Particle::random(0, &mut rng);
        assert!((particle.blur_px() * 2.0 - particle.size).abs() < EPSILON);
    }
}
