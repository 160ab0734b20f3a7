//! Error types for liftlog operations.
//!
//! This module defines [`LiftlogError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Mutations against ids that do not resolve are silent no-ops unless the
//!   store runs in strict mode, where they surface as [`LiftlogError::NotFound`]
//! - Import validation always signals [`LiftlogError::InvalidBundle`] or
//!   [`LiftlogError::InvalidDocument`] and leaves the document untouched
//! - Use `anyhow::Error` (via `LiftlogError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for liftlog operations.
#[derive(Debug, Error)]
pub enum LiftlogError {
    /// A program bundle lacks the expected tag or shape.
    #[error("Invalid program bundle: {message}")]
    InvalidBundle { message: String },

    /// A whole-document import lacks the expected shape.
    #[error("Invalid data file: {message}")]
    InvalidDocument { message: String },

    /// A referenced entity does not exist (strict mode only).
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    /// Today's session is complete and the store refuses further set writes.
    #[error("Today's session for workout '{workout}' is complete")]
    SessionLocked { workout: String },

    /// Failed to parse the config file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// The persistence backend rejected a read or write.
    #[error("Storage error for key '{key}': {message}")]
    Storage { key: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encode/decode error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LiftlogError {
    pub(crate) fn not_found(kind: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            kind,
            id: id.to_string(),
        }
    }
}

/// Result type alias for liftlog operations.
pub type Result<T> = std::result::Result<T, LiftlogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_bundle_displays_message() {
        let err = LiftlogError::InvalidBundle {
            message: "missing program".into(),
        };
        assert!(err.to_string().contains("missing program"));
    }

    #[test]
    fn invalid_document_displays_message() {
        let err = LiftlogError::InvalidDocument {
            message: "`workouts` must be an object".into(),
        };
        assert!(err.to_string().contains("`workouts` must be an object"));
    }

    #[test]
    fn not_found_displays_kind_and_id() {
        let err = LiftlogError::not_found("Workout", "abc123");
        assert_eq!(err.to_string(), "Workout not found: abc123");
    }

    #[test]
    fn session_locked_displays_workout() {
        let err = LiftlogError::SessionLocked {
            workout: "w1".into(),
        };
        assert!(err.to_string().contains("w1"));
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = LiftlogError::ConfigParseError {
            path: PathBuf::from("/data/config.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/data/config.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn storage_error_displays_key() {
        let err = LiftlogError::Storage {
            key: "swt:data:v1".into(),
            message: "disk full".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("swt:data:v1"));
        assert!(msg.contains("disk full"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: LiftlogError = io_err.into();
        assert!(matches!(err, LiftlogError::Io(_)));
    }

    #[test]
    fn json_error_converts() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: LiftlogError = json_err.into();
        assert!(matches!(err, LiftlogError::Json(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(LiftlogError::InvalidBundle {
                message: "test".into(),
            })
        }
        assert!(returns_error().is_err());
    }
}
