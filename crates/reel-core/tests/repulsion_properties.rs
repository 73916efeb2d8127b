#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![forbid(unsafe_code)]

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use reel_core::{ParticleConfig, ParticleField, Point, RepulsionConfig, repulsion_offset};

const EPSILON: f64 = 1e-9;

fn percent_point() -> impl Strategy<Value = Point> {
    (0.0..100.0f64, 0.0..100.0f64).prop_map(|(x, y)| Point::new(x, y))
}

proptest! {
    /// Displacement is exactly zero once the pointer is at or beyond the radius
    #[test]
    fn prop_zero_beyond_radius(
        rest in percent_point(),
        angle in 0.0..std::f64::consts::TAU,
        extra in 0.0..200.0f64,
    ) {
        let config = RepulsionConfig::default();
        let distance = config.radius + extra;
        let pointer = rest + Point::new(angle.cos() * distance, angle.sin() * distance);

        // Rounding can land a hair inside the radius; only assert when outside
        prop_assume!(rest.distance_to(pointer) >= config.radius);
        prop_assert_eq!(repulsion_offset(rest, pointer, &config), Point::origin());
    }
}

proptest! {
    /// Inside the radius the particle moves directly away from the pointer by
    /// strength * (R - d) / R
    #[test]
    fn prop_magnitude_and_direction(
        rest in percent_point(),
        angle in 0.0..std::f64::consts::TAU,
        distance in 0.01..19.99f64,
    ) {
        let config = RepulsionConfig::default();
        let pointer = rest + Point::new(angle.cos() * distance, angle.sin() * distance);
        let actual_distance = rest.distance_to(pointer);

        let offset = repulsion_offset(rest, pointer, &config);
        let expected = config.strength * (config.radius - actual_distance) / config.radius;
        prop_assert!((offset.length() - expected).abs() < 1e-6);

        // Away from the pointer: offset and (pointer - rest) point in opposite directions
        let toward = pointer - rest;
        prop_assert!(offset.x * toward.x + offset.y * toward.y <= EPSILON);
    }
}

proptest! {
    /// Displacement never exceeds the configured strength
    #[test]
    fn prop_bounded_by_strength(
        rest in percent_point(),
        pointer in percent_point(),
        radius in 1.0..50.0f64,
        strength in 0.0..30.0f64,
    ) {
        let config = RepulsionConfig::new(radius, strength).unwrap();
        let offset = repulsion_offset(rest, pointer, &config);
        prop_assert!(offset.is_finite());
        prop_assert!(offset.length() <= strength + EPSILON);
    }
}

proptest! {
    /// Field updates are memoryless: same pointer, same layout
    #[test]
    fn prop_update_has_no_momentum(seed in any::<u64>(), a in percent_point(), b in percent_point()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut field = ParticleField::generate(&ParticleConfig::default(), &mut rng);

        field.update(Some(a));
        let first = field.particles().to_vec();
        field.update(Some(b));
        field.update(Some(a));

        prop_assert_eq!(field.particles(), first.as_slice());
    }
}

#[test]
fn test_generated_field_is_deterministic_per_seed() {
    let config = ParticleConfig::default();
    let one = ParticleField::generate(&config, &mut StdRng::seed_from_u64(42));
    let two = ParticleField::generate(&config, &mut StdRng::seed_from_u64(42));
    assert_eq!(one, two);
    assert_eq!(one.len(), config.count);
}
