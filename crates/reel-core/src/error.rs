//! Core error types for Hero Reel.
//!
//! Nothing in the motion core is allowed to panic: configuration and catalog
//! loading report typed errors, and the UI decides whether to fall back.

use thiserror::Error;

/// Core error type for Hero Reel operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    // Parsing errors
    #[error("motion config parse error: {reason}")]
    ConfigParseFailed { reason: String },

    #[error("slide catalog parse error: {reason}")]
    CatalogParseFailed { reason: String },

    // Validation errors
    #[error("invalid config value for '{field}': {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    #[error("slide catalog is empty")]
    EmptyCatalog,
}

impl Error {
    /// Create a config parse error.
    pub fn config_parse_failed(reason: impl Into<String>) -> Self {
        Self::ConfigParseFailed {
            reason: reason.into(),
        }
    }

    /// Create a catalog parse error.
    pub fn catalog_parse_failed(reason: impl Into<String>) -> Self {
        Self::CatalogParseFailed {
            reason: reason.into(),
        }
    }

    /// Create a validation error for a named config field.
    pub fn invalid_config(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }
}
