use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading model metadata or trained artifacts from disk
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("Artifact not found at {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to deserialize {path}: {source}")]
    Deserialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid artifact {path}: {reason}")]
    Invalid { path: PathBuf, reason: String },
}

/// Errors raised by a single inference call on a loaded artifact
#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("{model} does not support {capability}")]
    Unsupported {
        model: String,
        capability: &'static str,
    },

    #[error("Feature dimension mismatch: model expects {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Model failure: {reason}")]
    Model { reason: String },
}

/// Errors raised while validating an incoming match payload
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("{field} is required")]
    MissingField { field: &'static str },

    #[error("{field} must be a non-empty string")]
    InvalidTeam { field: &'static str },

    #[error("{field} must be an integer, got {value}")]
    InvalidStat { field: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_mismatch_formatting() {
        let error = InferenceError::DimensionMismatch {
            expected: 28,
            actual: 14,
        };

        let msg = error.to_string();
        assert!(msg.contains("28"));
        assert!(msg.contains("14"));
    }

    #[test]
    fn test_artifact_error_names_path() {
        let error = ArtifactError::NotFound {
            path: PathBuf::from("artifacts/goal_diff_regressor.json"),
        };

        assert!(error.to_string().contains("goal_diff_regressor.json"));
    }

    #[test]
    fn test_validation_error_formatting() {
        let error = ValidationError::InvalidStat {
            field: "HTHG",
            value: "two".to_string(),
        };

        assert_eq!(error.to_string(), "HTHG must be an integer, got two");
    }
}
