//! Error types for editor configuration.
//!
//! The interaction core itself never fails; only loading and validating
//! settings can.

use thiserror::Error;

/// Errors that can occur while loading or validating settings
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Zoom limits must satisfy `0 < min <= max`
    #[error("Invalid scale range: min {min}, max {max}")]
    InvalidScaleRange { min: f32, max: f32 },

    /// Zoom speed must be greater than 1
    #[error("Invalid scale speed: {0}")]
    InvalidScaleSpeed(f32),

    #[error("Invalid minimum transform size: {0}")]
    InvalidMinTransformSize(f32),
}

/// Result type alias for settings operations
pub type SettingsResult<T> = Result<T, SettingsError>;
