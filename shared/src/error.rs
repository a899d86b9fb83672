//! Unified error types for the ordering system
//!
//! All order errors are local, recoverable, user-facing conditions:
//! a rejected operation with a message, never fatal to the process.
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 4xxx: Order errors
//! - 9xxx: System / data-source errors

use crate::order::OrderStatus;
use crate::response::ApiResponse;
use axum::response::IntoResponse;
use http::StatusCode;
use thiserror::Error;

/// Ordering domain errors
#[derive(Debug, Error)]
pub enum OrderError {
    /// Submit called on a draft with zero lines
    #[error("Cannot submit an empty order")]
    EmptyOrder,

    /// Status change requested for an unknown order id
    #[error("Order not found: {0}")]
    OrderNotFound(String),

    /// Status change requested on a terminal order
    #[error("Order {order_id} is {from}, cannot transition to {to}")]
    InvalidTransition {
        order_id: String,
        from: OrderStatus,
        to: OrderStatus,
    },

    /// Malformed line item (non-finite price, non-positive quantity, duplicate id)
    #[error("Invalid line item: {0}")]
    InvalidItem(String),

    /// Simulated transport failure from a data source; retryable
    #[error("Data source error: {0}")]
    DataSource(String),
}

impl OrderError {
    /// Stable error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyOrder => "E4001",
            Self::InvalidTransition { .. } => "E4002",
            Self::InvalidItem(_) => "E4003",
            Self::OrderNotFound(_) => "E4004",
            Self::DataSource(_) => "E9002",
        }
    }

    /// HTTP status for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::EmptyOrder | Self::InvalidItem(_) => StatusCode::BAD_REQUEST,
            Self::OrderNotFound(_) => StatusCode::NOT_FOUND,
            Self::InvalidTransition { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::DataSource(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// Whether a caller may retry the operation as-is
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::DataSource(_))
    }
}

impl IntoResponse for OrderError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();
        let body = ApiResponse::<()>::error(self.code(), self.to_string());
        (status, axum::Json(body)).into_response()
    }
}

/// Result type for ordering operations
pub type OrderResult<T> = Result<T, OrderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(OrderError::EmptyOrder.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            OrderError::OrderNotFound("order-1".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        let err = OrderError::InvalidTransition {
            order_id: "order-1".into(),
            from: OrderStatus::Delivered,
            to: OrderStatus::Pending,
        };
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.code(), "E4002");
    }

    #[test]
    fn test_only_data_source_errors_are_retryable() {
        assert!(OrderError::DataSource("timeout".into()).is_retryable());
        assert!(!OrderError::EmptyOrder.is_retryable());
        assert!(!OrderError::OrderNotFound("x".into()).is_retryable());
    }
}
