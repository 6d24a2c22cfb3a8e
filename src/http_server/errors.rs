//! # HTTP API Errors
//!
//! `ApiError` is the one place where failure kinds become status codes.
//! Client errors echo their message; storage errors answer with a fixed
//! per-operation message and keep the engine detail in the logs.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::storage::StorageError;
use crate::validation::ValidationError;

/// Result type for request handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Request handling errors
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Item data or path id failed validation
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Create request without a usable JSON object body
    #[error("No data provided")]
    NoData,

    /// Update request body lacks `quantity`
    #[error("Quantity is required")]
    QuantityRequired,

    /// Search request with a missing or blank `q`
    #[error("Search query is required")]
    SearchQueryRequired,

    /// No row with the requested id
    #[error("Item not found")]
    NotFound,

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Storage failed; `public` is the only text the client sees
    #[error("{public}")]
    Storage {
        public: &'static str,
        #[source]
        source: StorageError,
    },

    /// A handler panicked
    #[error("Something went wrong!")]
    Internal,
}

impl ApiError {
    /// Wraps a storage failure under a client-facing message.
    pub fn storage(public: &'static str) -> impl FnOnce(StorageError) -> ApiError {
        move |source| ApiError::Storage { public, source }
    }

    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NoData => StatusCode::BAD_REQUEST,
            ApiError::QuantityRequired => StatusCode::BAD_REQUEST,
            ApiError::SearchQueryRequired => StatusCode::BAD_REQUEST,

            ApiError::NotFound => StatusCode::NOT_FOUND,

            ApiError::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            ApiError::Storage { public, source } => {
                error!(status = status.as_u16(), error = %source, "{}", public);
            }
            other => {
                error!(status = status.as_u16(), "{}", other);
            }
        }

        let body = Json(ErrorResponse {
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}
