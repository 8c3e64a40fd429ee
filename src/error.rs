//! Error types for crop operations.

use thiserror::Error;

/// Errors that can occur at the crate's I/O and configuration boundaries.
///
/// The geometry engine itself is total over valid inputs and never returns
/// errors; missing preconditions (no image attached yet) are silent no-ops.
#[derive(Error, Debug)]
pub enum CropError {
    /// I/O error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Image decode or encode error
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// JSON parsing or serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Aspect ratio must be a finite positive number
    #[error("invalid aspect ratio: {value}")]
    InvalidRatio {
        /// The rejected ratio value
        value: f32,
    },

    /// Configuration failed validation
    #[error("invalid configuration: {message}")]
    InvalidConfig {
        /// Description of the validation failure
        message: String,
    },

    /// The selection maps to zero source pixels
    #[error("selection covers no pixels")]
    EmptySelection,
}

impl CropError {
    /// Create an invalid configuration error with a message.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}
