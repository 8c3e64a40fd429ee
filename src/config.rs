//! Configuration for the crop engine.
//!
//! Settings serialize to JSON so an embedding application can persist them
//! wherever it keeps its own configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{defaults, limits};
use crate::error::CropError;
use crate::ratio::Ratio;

/// Current configuration file format version.
/// Increment this when making breaking changes to the config format.
pub const CONFIG_VERSION: u32 = 1;

/// Tunable parameters of the crop engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CropConfig {
    /// Version of the configuration file format
    #[serde(default = "default_version")]
    pub version: u32,

    /// Distance from a crop edge within which resize handles activate
    #[serde(default = "default_edge_tolerance")]
    pub edge_tolerance: f32,

    /// Padding between the viewport border and the fitted image
    #[serde(default = "default_container_padding")]
    pub container_padding: f32,

    /// Visual size of the corner and edge handle marks
    #[serde(default = "default_handle_size")]
    pub handle_size: f32,

    /// Aspect-ratio constraint for the selection
    #[serde(default)]
    pub ratio: Ratio,
}

fn default_version() -> u32 {
    CONFIG_VERSION
}

fn default_edge_tolerance() -> f32 {
    defaults::EDGE_TOLERANCE
}

fn default_container_padding() -> f32 {
    defaults::CONTAINER_PADDING
}

fn default_handle_size() -> f32 {
    defaults::HANDLE_SIZE
}

impl CropConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self {
            version: default_version(),
            edge_tolerance: default_edge_tolerance(),
            container_padding: default_container_padding(),
            handle_size: default_handle_size(),
            ratio: Ratio::default(),
        }
    }

    /// The smallest selection the engine will commit from a resize or
    /// redefine gesture.
    pub fn min_crop_size(&self) -> f32 {
        self.handle_size + limits::MIN_SIZE_MARGIN
    }

    /// Check that every field carries a usable value.
    pub fn validate(&self) -> Result<(), CropError> {
        if !self.edge_tolerance.is_finite() || self.edge_tolerance <= 0.0 {
            return Err(CropError::invalid_config(
                "edge_tolerance must be a positive number",
            ));
        }
        if !self.container_padding.is_finite() || self.container_padding < 0.0 {
            return Err(CropError::invalid_config(
                "container_padding must not be negative",
            ));
        }
        if !self.handle_size.is_finite() || self.handle_size <= 0.0 {
            return Err(CropError::invalid_config(
                "handle_size must be a positive number",
            ));
        }
        if let Ratio::Fixed(value) = self.ratio {
            // Re-check hand-constructed values that bypassed Ratio::fixed
            Ratio::fixed(value)?;
        }
        Ok(())
    }

    /// Serialize the configuration to pretty JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize and validate a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, CropError> {
        let config: Self = serde_json::from_str(json)?;

        if config.version > CONFIG_VERSION {
            log::warn!(
                "Config version {} is newer than supported {}",
                config.version,
                CONFIG_VERSION
            );
            return Err(CropError::invalid_config(format!(
                "configuration version {} is newer than supported version {}",
                config.version, CONFIG_VERSION
            )));
        }

        config.validate()?;
        Ok(config)
    }
}

impl Default for CropConfig {
    fn default() -> Self {
        Self::new()
    }
}
