//! Error types for the signup service

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Result type for store operations
pub type SignupResult<T> = Result<T, SignupError>;

/// Rejections for signup and unregister requests
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SignupError {
    #[error("Activity not found")]
    ActivityNotFound,

    #[error("Student is already signed up for this activity")]
    AlreadySignedUp,

    #[error("Student is not signed up for this activity")]
    NotSignedUp,

    #[error("Activity is full")]
    ActivityFull,
}

impl SignupError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            SignupError::ActivityNotFound => StatusCode::NOT_FOUND,
            SignupError::AlreadySignedUp | SignupError::NotSignedUp | SignupError::ActivityFull => {
                StatusCode::BAD_REQUEST
            }
        }
    }
}

/// Error body returned to clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub detail: String,
}

impl IntoResponse for SignupError {
    fn into_response(self) -> Response {
        let body = Json(ErrorDetail {
            detail: self.to_string(),
        });
        (self.status_code(), body).into_response()
    }
}

/// Startup errors while loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Activity '{0}' must allow at least one participant")]
    ZeroCapacity(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_error_display() {
        let test_cases = vec![
            (SignupError::ActivityNotFound, "Activity not found"),
            (
                SignupError::AlreadySignedUp,
                "Student is already signed up for this activity",
            ),
            (
                SignupError::NotSignedUp,
                "Student is not signed up for this activity",
            ),
            (SignupError::ActivityFull, "Activity is full"),
        ];

        for (error, expected_message) in test_cases {
            assert_eq!(
                error.to_string(),
                expected_message,
                "Display mismatch for {:?}",
                error
            );
        }
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            SignupError::ActivityNotFound.status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            SignupError::AlreadySignedUp.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            SignupError::NotSignedUp.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            SignupError::ActivityFull.status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[tokio::test]
    async fn test_into_response_body() {
        let response = SignupError::AlreadySignedUp.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: ErrorDetail = serde_json::from_slice(&bytes).unwrap();
        assert!(body.detail.contains("already signed up"));
    }

    #[test]
    fn test_config_error_from_json() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{ invalid json }").unwrap_err();
        let err: ConfigError = serde_err.into();
        assert!(matches!(err, ConfigError::Json(_)));
        assert!(err.to_string().starts_with("Invalid catalog JSON"));
    }

    #[test]
    fn test_config_error_zero_capacity_display() {
        let err = ConfigError::ZeroCapacity("Chess Club".to_string());
        assert_eq!(
            err.to_string(),
            "Activity 'Chess Club' must allow at least one participant"
        );
    }
}
