//! Custom error types for the API service

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// A rejected request field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Custom error type for the API service
#[derive(Error, Debug)]
pub enum ApiError {
    /// Resource not found
    #[error("{0} not found")]
    NotFound(&'static str),

    /// Bad request with message
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Request body failed validation
    #[error("Validation failed")]
    Validation(Vec<FieldError>),

    /// Repository error
    #[error("Repository error: {0}")]
    Repository(#[from] content::RepositoryError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::NotFound(resource) => (
                StatusCode::NOT_FOUND,
                json!({ "error": format!("{} not found", resource) }),
            ),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, json!({ "error": msg })),
            ApiError::Validation(details) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "Validation failed", "details": details }),
            ),
            ApiError::Repository(e) => {
                error!("Repository failure: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Internal server error" }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;
