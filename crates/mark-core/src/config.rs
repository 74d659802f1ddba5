use bevy::prelude::Resource;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

// ---------------------------------------------------------------------------
// Serde default functions
// ---------------------------------------------------------------------------

const fn default_speed() -> f32 {
    1.0
}
const fn default_true() -> bool {
    true
}
const fn default_top_down_height() -> f32 {
    10.0
}

// ---------------------------------------------------------------------------
// RigConfig
// ---------------------------------------------------------------------------

/// Tunables for the rover rig.
///
/// Speeds are the per-tick increment applied to a joint's drive target while
/// its key is held.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Resource)]
pub struct RigConfig {
    /// Wheel target increment per tick (default: 1.0).
    #[serde(default = "default_speed")]
    pub driving_speed: f32,

    /// Camera pan/tilt target increment per tick (default: 1.0).
    #[serde(default = "default_speed")]
    pub camera_speed: f32,

    /// Gripper jaw target increment per tick (default: 1.0).
    #[serde(default = "default_speed")]
    pub gripper_speed: f32,

    /// Whether keyboard teleop starts enabled.
    #[serde(default = "default_true")]
    pub teleop_enabled: bool,

    /// Fixed altitude of the top-down camera (default: 10.0).
    #[serde(default = "default_top_down_height")]
    pub top_down_height: f32,
}

impl Default for RigConfig {
    fn default() -> Self {
        Self {
            driving_speed: default_speed(),
            camera_speed: default_speed(),
            gripper_speed: default_speed(),
            teleop_enabled: true,
            top_down_height: default_top_down_height(),
        }
    }
}

impl RigConfig {
    /// Validate configuration. Every numeric field must be finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("driving_speed", self.driving_speed),
            ("camera_speed", self.camera_speed),
            ("gripper_speed", self.gripper_speed),
            ("top_down_height", self.top_down_height),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(ConfigError::InvalidValue {
                    field: field.into(),
                    message: format!("must be finite, got {value}"),
                });
            }
        }
        Ok(())
    }

    /// Load from TOML file.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse from a TOML string and validate.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
