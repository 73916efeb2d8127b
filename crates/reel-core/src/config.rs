//! Motion configuration
//!
//! All tunable numbers of the page in one TOML document. Every section and
//! key is optional and falls back to the built-in value, so an empty
//! document is the default configuration.

use serde::{Deserialize, Serialize};

use crate::carousel::CarouselConfig;
use crate::error::Error;
use crate::particles::ParticleConfig;
use crate::pointer::{CursorConfig, MagneticConfig, TiltConfig};
use crate::result::{Result, ResultExt};

/// Compile-time embedded configuration
const EMBEDDED_MOTION: &str = include_str!("../assets/motion.toml");

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MotionConfig {
    pub carousel: CarouselConfig,
    pub particles: ParticleConfig,
    pub cursor: CursorConfig,
    pub tilt: TiltConfig,
    pub magnetic: MagneticConfig,
}

impl MotionConfig {
    /// Parses and validates a TOML document
    ///
    /// # Errors
    ///
    /// Returns `ConfigParseFailed` for malformed TOML or unknown keys, and
    /// `InvalidConfig` for out-of-range values.
    pub fn from_toml_str(doc: &str) -> Result<Self> {
        let config = toml::from_str::<Self>(doc)
            .map_err(|e| Error::config_parse_failed(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// The configuration bundled with the page, or defaults if it is unusable
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_toml_str(EMBEDDED_MOTION).or_default_logged(Self::default())
    }

    /// # Errors
    ///
    /// Returns the first `InvalidConfig` found, section by section.
    pub fn validate(&self) -> Result<()> {
        self.carousel.validate()?;
        self.particles.validate()?;
        self.cursor.validate()?;
        self.tilt.validate()?;
        self.magnetic.validate()
    }

    /// Serializes back to TOML
    ///
    /// # Errors
    ///
    /// Returns `ConfigParseFailed` if serialization fails.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config_parse_failed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(
            MotionConfig::from_toml_str("").unwrap(),
            MotionConfig::default()
        );
    }

    #[test]
    fn test_embedded_matches_defaults() {
        assert_eq!(MotionConfig::embedded(), MotionConfig::default());
        assert!(MotionConfig::from_toml_str(EMBEDDED_MOTION).is_ok());
    }

    #[test]
    fn test_partial_override() {
        let config = MotionConfig::from_toml_str(
            r"
            [carousel]
            autoplay_ms = 7000.0

            [particles]
            count = 12
            ",
        )
        .unwrap();

        assert!((config.carousel.autoplay_ms - 7000.0).abs() < f64::EPSILON);
        assert!((config.carousel.transition_ms - 800.0).abs() < f64::EPSILON);
        assert_eq!(config.particles.count, 12);
        assert!((config.particles.repulsion.radius - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_partial_tilt_spring_keeps_tilt_damping() {
        let config = MotionConfig::from_toml_str("[tilt.spring]\nstiffness = 120.0").unwrap();
        assert!((config.tilt.spring.stiffness - 120.0).abs() < f64::EPSILON);
        assert!((config.tilt.spring.damping - 30.0).abs() < f64::EPSILON);
        assert!((config.cursor.spring.damping - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let result = MotionConfig::from_toml_str("[carousel]\nautoplay = 1.0");
        assert!(matches!(result, Err(Error::ConfigParseFailed { .. })));
    }

    #[test]
    fn test_invalid_value_rejected() {
        let result = MotionConfig::from_toml_str("[particles.repulsion]\nradius = -4.0");
        assert!(matches!(
            result,
            Err(Error::InvalidConfig {
                field: "particles.repulsion.radius",
                ..
            })
        ));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = MotionConfig::default();
        let doc = config.to_toml_string().unwrap();
        assert_eq!(MotionConfig::from_toml_str(&doc).unwrap(), config);
    }
}
