use std::path::PathBuf;

use thiserror::Error;

use crate::types::{CameraSlot, JointRole};

/// Top-level error type for the Mark rig.
#[derive(Debug, Error)]
pub enum MarkError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Recording error: {0}")]
    Record(#[from] RecordError),
}

/// Configuration errors.
///
/// Every reference the rig needs is checked once at construction, so these
/// are the only failures the rig surfaces.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Missing joint: {0}")]
    MissingJoint(JointRole),

    #[error("Missing camera: {0}")]
    MissingCamera(CameraSlot),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

/// Session recording errors.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Recording session already exists: {}", .0.display())]
    SessionExists(PathBuf),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mark_error_from_config_error() {
        let err = ConfigError::MissingJoint(JointRole::LeftWheel);
        let mark_err: MarkError = err.into();
        assert!(matches!(mark_err, MarkError::Config(_)));
        assert!(mark_err.to_string().contains("left_wheel"));
    }

    #[test]
    fn config_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let config_err: ConfigError = io_err.into();
        assert!(matches!(config_err, ConfigError::Io(_)));
    }

    #[test]
    fn config_error_display_messages() {
        assert_eq!(
            ConfigError::MissingJoint(JointRole::CameraPan).to_string(),
            "Missing joint: camera_pan"
        );
        assert_eq!(
            ConfigError::MissingCamera(CameraSlot::Mark).to_string(),
            "Missing camera: mark"
        );
        assert_eq!(
            ConfigError::InvalidValue {
                field: "driving_speed".into(),
                message: "must be finite".into()
            }
            .to_string(),
            "Invalid value for driving_speed: must be finite"
        );
    }

    #[test]
    fn mark_error_from_record_error() {
        let err = RecordError::SessionExists(PathBuf::from("runs/2024-01-01_00-00-00"));
        let mark_err: MarkError = err.into();
        assert!(matches!(mark_err, MarkError::Record(_)));
        assert!(mark_err.to_string().contains("already exists"));
    }
}
