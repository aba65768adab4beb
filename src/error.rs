//! Error types for the shipment service.
//!
//! Defines a unified error type that maps cleanly to HTTP responses. This is
//! the only place where a failure is turned into a status code.

use std::any::Any;

use axum::{
    extract::rejection::BytesRejection,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// Unified error type for shipment operations.
#[derive(Debug, Error)]
pub enum ShipmentError {
    #[error("Shipment not found")]
    ShipmentNotFound(String),

    #[error("Route not found: {0}")]
    RouteNotFound(String),

    #[error("Method {method} not allowed on {path}")]
    MethodNotAllowed { method: Method, path: String },

    #[error("Malformed request body: {0}")]
    MalformedInput(#[from] serde_json::Error),

    #[error("Unreadable request body: {message}")]
    UnreadableBody { status: StatusCode, message: String },

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body for API clients.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}

impl ShipmentError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ShipmentError::ShipmentNotFound(_) | ShipmentError::RouteNotFound(_) => {
                StatusCode::NOT_FOUND
            }
            ShipmentError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            ShipmentError::MalformedInput(_) => StatusCode::BAD_REQUEST,
            ShipmentError::UnreadableBody { status, .. } => *status,
            ShipmentError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ShipmentError {
    fn into_response(self) -> Response {
        let message = match &self {
            ShipmentError::ShipmentNotFound(id) => {
                tracing::debug!(shipment_id = %id, "Shipment not found");
                self.to_string()
            }
            ShipmentError::MalformedInput(e) => {
                tracing::warn!(error = %e, "Rejected malformed request body");
                self.to_string()
            }
            ShipmentError::UnreadableBody { message, .. } => {
                tracing::warn!(error = %message, "Rejected request body");
                self.to_string()
            }
            ShipmentError::RouteNotFound(_) | ShipmentError::MethodNotAllowed { .. } => {
                self.to_string()
            }
            ShipmentError::Internal(msg) => {
                // Log the actual error but don't expose internals
                tracing::error!(error = %msg, "Internal error");
                "An internal error occurred".to_string()
            }
        };

        (self.status(), Json(ErrorResponse { error: message })).into_response()
    }
}

impl From<BytesRejection> for ShipmentError {
    fn from(rejection: BytesRejection) -> Self {
        ShipmentError::UnreadableBody {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

/// Convert a panic caught at the HTTP boundary into a JSON 500 response.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(msg) = err.downcast_ref::<String>() {
        msg.clone()
    } else if let Some(msg) = err.downcast_ref::<&str>() {
        msg.to_string()
    } else {
        "handler panicked".to_string()
    };

    ShipmentError::Internal(details).into_response()
}

/// Result type alias for shipment operations.
pub type ShipmentResult<T> = Result<T, ShipmentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = ShipmentError::ShipmentNotFound("abc".to_string());
        assert_eq!(err.to_string(), "Shipment not found");
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_malformed_input_is_bad_request() {
        let parse_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = ShipmentError::from(parse_error);
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert!(err.to_string().starts_with("Malformed request body: "));
    }

    #[test]
    fn test_method_not_allowed() {
        let err = ShipmentError::MethodNotAllowed {
            method: Method::PATCH,
            path: "/api/shipments".to_string(),
        };
        assert_eq!(err.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(err.to_string(), "Method PATCH not allowed on /api/shipments");
    }

    #[test]
    fn test_unreadable_body_keeps_status() {
        let err = ShipmentError::UnreadableBody {
            status: StatusCode::PAYLOAD_TOO_LARGE,
            message: "length limit exceeded".to_string(),
        };
        assert_eq!(err.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(
            err.into_response().status(),
            StatusCode::PAYLOAD_TOO_LARGE
        );
    }

    #[test]
    fn test_internal_error_response_hides_details() {
        let response = ShipmentError::Internal("lock poisoned".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_panic_response_is_internal_error() {
        let response = panic_response(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = panic_response(Box::new(String::from("boom")));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
