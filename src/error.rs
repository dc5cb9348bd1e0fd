//! Error types for configuration loading.
//!
//! The simulation itself never fails; only building a [`WaterConfig`]
//! from outside input can.
//!
//! [`WaterConfig`]: crate::config::WaterConfig

use std::fmt;

/// Errors that can occur while loading or validating a configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// The JSON document could not be parsed.
    Parse(serde_json::Error),
    /// Spring spacing must be a positive, finite number of pixels and
    /// yield at most `MAX_SPRINGS` springs.
    InvalidSpacing(f32),
    /// Screen dimensions must both be positive and finite.
    InvalidScreen { width: f32, height: f32 },
    /// Physics timestep must be positive and finite.
    InvalidTimestep(f32),
    /// Curve sampling step must be positive and yield at most
    /// `MAX_CURVE_SAMPLES` samples across the screen.
    InvalidCurveStep(f32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(e) => write!(f, "Failed to parse config: {}", e),
            ConfigError::InvalidSpacing(s) => write!(f, "Spring spacing must be > 0 and not absurdly small, got {}", s),
            ConfigError::InvalidScreen { width, height } => {
                write!(f, "Screen must be non-empty and finite, got {}x{}", width, height)
            }
            ConfigError::InvalidTimestep(dt) => write!(f, "Timestep must be > 0, got {}", dt),
            ConfigError::InvalidCurveStep(s) => write!(f, "Curve step must be > 0 and not absurdly small, got {}", s),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}
