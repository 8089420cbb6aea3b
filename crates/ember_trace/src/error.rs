//! Error types for scene construction and configuration.
//!
//! A ray missing everything is not an error; hit queries return `Option`.
//! These errors only come from building primitives or loading settings.

use ember_math::Point3;
use thiserror::Error;

/// Errors that can occur while constructing traceable scene data.
#[derive(Error, Debug)]
pub enum TraceError {
    #[error("Invalid sphere radius {0}: must be finite and non-negative")]
    InvalidRadius(f64),

    #[error("Sphere center must be finite, got {0}")]
    NonFiniteCenter(Point3),

    #[error("Invalid ray interval [{min}, {max}]")]
    InvalidInterval { min: f64, max: f64 },

    #[error("Config parse error: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type for scene construction.
pub type TraceResult<T> = Result<T, TraceError>;
