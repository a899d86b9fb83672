//! HTTP error surface
//!
//! Wraps the domain [`OrderError`] and adds the generic conditions the
//! catalog and settings handlers need. Every variant renders as an
//! [`ApiResponse`] envelope with a stable error code.

use axum::response::{IntoResponse, Response};
use http::StatusCode;
use shared::response::ApiResponse;
use shared::OrderError;
use thiserror::Error;

/// Handler-level errors
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Order(#[from] OrderError),

    /// Resource not found
    #[error("{0} not found")]
    NotFound(String),

    /// Malformed request input
    #[error("Validation failed: {0}")]
    Validation(String),
}

impl AppError {
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound(resource.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    fn code(&self) -> &'static str {
        match self {
            Self::Order(e) => e.code(),
            Self::NotFound(_) => "E0003",
            Self::Validation(_) => "E0002",
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            Self::Order(e) => e.status_code(),
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ApiResponse::<()>::error(self.code(), self.to_string());
        (status, axum::Json(body)).into_response()
    }
}

/// Result type for HTTP handlers
pub type AppResult<T> = Result<T, AppError>;
