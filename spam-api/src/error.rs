//! Error types for spam-api

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// Result type alias for spam-api operations
pub type Result<T> = std::result::Result<T, ApiError>;

/// spam-api error types
#[derive(Error, Debug)]
pub enum ApiError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Classifier artifact could not be loaded
    #[error("Failed to load model: {0}")]
    ModelLoad(String),

    /// Embedding backend failed
    #[error("Embedding error: {0}")]
    Embedding(String),

    /// Classifier failed or produced an invalid probability
    #[error("Classifier error: {0}")]
    Classifier(String),

    /// HTTP client error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Error body returned to API clients
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!("Request failed: {}", self);
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

impl From<config::ConfigError> for ApiError {
    fn from(e: config::ConfigError) -> Self {
        ApiError::Config(e.to_string())
    }
}
