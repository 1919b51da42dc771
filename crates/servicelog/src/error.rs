//! Error types for servicelog.
//!
//! The reminder engine itself never fails; these errors come from loading and
//! validating its inputs and from configuration.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for servicelog operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Snapshot Errors ===
    /// Failed to read a snapshot file.
    #[error("failed to read snapshot at {path}: {source}")]
    SnapshotRead {
        /// Path to the snapshot file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // === Validation Errors ===
    /// A service reminder failed validation.
    #[error("invalid reminder '{id}': {message}")]
    InvalidReminder {
        /// Identifier of the reminder.
        id: String,
        /// Description of the validation failure.
        message: String,
    },

    /// A service history entry failed validation.
    #[error("invalid service record '{id}': {message}")]
    InvalidHistory {
        /// Identifier of the history entry.
        id: String,
        /// Description of the validation failure.
        message: String,
    },

    /// A vehicle failed validation.
    #[error("invalid vehicle '{id}': {message}")]
    InvalidVehicle {
        /// Identifier of the vehicle.
        id: String,
        /// Description of the validation failure.
        message: String,
    },

    // === Lookup Errors ===
    /// The requested vehicle does not exist.
    #[error("vehicle not found: {0}")]
    VehicleNotFound(String),

    /// The garage has no vehicles to select from.
    #[error("no vehicles in snapshot")]
    NoVehicles,

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },
}

/// A specialized Result type for servicelog operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create an invalid reminder error.
    #[must_use]
    pub fn invalid_reminder(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidReminder {
            id: id.into(),
            message: message.into(),
        }
    }

    /// Create an invalid service record error.
    #[must_use]
    pub fn invalid_history(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidHistory {
            id: id.into(),
            message: message.into(),
        }
    }

    /// Create an invalid vehicle error.
    #[must_use]
    pub fn invalid_vehicle(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidVehicle {
            id: id.into(),
            message: message.into(),
        }
    }

    /// Check if this error is an input validation failure.
    #[must_use]
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidReminder { .. } | Self::InvalidHistory { .. } | Self::InvalidVehicle { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::NoVehicles;
        assert_eq!(err.to_string(), "no vehicles in snapshot");

        let err = Error::VehicleNotFound("v9".to_string());
        assert_eq!(err.to_string(), "vehicle not found: v9");
    }

    #[test]
    fn test_invalid_reminder_display() {
        let err = Error::invalid_reminder("r1", "mileage_interval must be positive");
        let msg = err.to_string();
        assert!(msg.contains("r1"));
        assert!(msg.contains("mileage_interval"));
    }

    #[test]
    fn test_invalid_history_display() {
        let err = Error::invalid_history("h1", "negative mileage");
        assert_eq!(err.to_string(), "invalid service record 'h1': negative mileage");
    }

    #[test]
    fn test_invalid_vehicle_display() {
        let err = Error::invalid_vehicle("v1", "negative mileage");
        assert_eq!(err.to_string(), "invalid vehicle 'v1': negative mileage");
    }

    #[test]
    fn test_is_validation_error() {
        assert!(Error::invalid_reminder("r", "x").is_validation_error());
        assert!(Error::invalid_history("h", "x").is_validation_error());
        assert!(Error::invalid_vehicle("v", "x").is_validation_error());
        assert!(!Error::NoVehicles.is_validation_error());
    }

    #[test]
    fn test_from_json_error() {
        let json_result: std::result::Result<i32, serde_json::Error> =
            serde_json::from_str("not valid json");
        if let Err(json_err) = json_result {
            let err: Error = json_err.into();
            assert!(matches!(err, Error::Json(_)));
        }
    }

    #[test]
    fn test_snapshot_read_error_display() {
        let err = Error::SnapshotRead {
            path: PathBuf::from("/tmp/garage.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/tmp/garage.json"));
        assert!(msg.contains("missing"));
    }

    #[test]
    fn test_config_validation_error_display() {
        let err = Error::ConfigValidation {
            message: "display_limit must be greater than 0".to_string(),
        };
        assert!(err.to_string().contains("display_limit"));
    }
}
