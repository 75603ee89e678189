//! Error types for the cache and its HTTP surface
//!
//! Provides unified error handling using thiserror.

use std::collections::BTreeMap;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

/// Field name to the messages describing what is wrong with it.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

// == Cache Error Enum ==
/// Unified error type for the cache and the service around it.
#[derive(Error, Debug)]
pub enum CacheError {
    /// A cache limit that cannot hold any entry (zero max size)
    #[error("Invalid cache configuration: {0}")]
    InvalidConfig(String),

    /// Key not found in cache, or found expired
    #[error("Key not found: {0}")]
    NotFound(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// One or more request fields failed validation
    #[error("Validation error")]
    Validation(FieldErrors),
}

impl CacheError {
    /// HTTP status this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            CacheError::InvalidConfig(_)
            | CacheError::InvalidRequest(_)
            | CacheError::Validation(_) => StatusCode::BAD_REQUEST,
            CacheError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

// == JSON Rejection Conversion ==
/// Malformed or mistyped request bodies answer in the same JSON error shape
/// as every other failure.
impl From<JsonRejection> for CacheError {
    fn from(rejection: JsonRejection) -> Self {
        CacheError::InvalidRequest(rejection.body_text())
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for CacheError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();

        let body = match self {
            CacheError::Validation(errors) => {
                ErrorResponse::new(message, status.as_u16()).with_errors(errors)
            }
            _ => ErrorResponse::new(message, status.as_u16()),
        };

        (status, Json(body)).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the cache.
pub type Result<T> = std::result::Result<T, CacheError>;

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(error: CacheError) -> (StatusCode, serde_json::Value) {
        let response = error.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_not_found_response() {
        let (status, json) = body_json(CacheError::NotFound("k".to_string())).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["status"], "error");
        assert_eq!(json["code"], 404);
        assert_eq!(json["message"], "Key not found: k");
        assert!(json.get("errors").is_none());
    }

    #[tokio::test]
    async fn test_validation_response_lists_fields() {
        let mut errors = FieldErrors::new();
        errors.insert(
            "max_size".to_string(),
            vec!["max_size must be greater than zero".to_string()],
        );

        let (status, json) = body_json(CacheError::Validation(errors)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], 400);
        assert_eq!(
            json["errors"]["max_size"][0],
            "max_size must be greater than zero"
        );
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            CacheError::InvalidConfig(String::new()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            CacheError::InvalidRequest(String::new()).status_code(),
            StatusCode::BAD_REQUEST
        );
    }
}
