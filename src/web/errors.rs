//! # Web API Error Types
//!
//! Error types specific to the web API and their HTTP response conversions.
//! Leverages thiserror for structured error handling and Axum's IntoResponse
//! for HTTP conversion. Every error serializes to the storefront envelope
//! `{"success": false, "message": ...}` with the mapped status code.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::error::{CommerceError, StoreError};

/// Web API specific errors with HTTP status code mappings
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{message}")]
    NotFound { message: String },

    #[error("{message}")]
    BadRequest { message: String },

    #[error("{message}")]
    Unauthorized { message: String },

    #[error("{message}")]
    Forbidden { message: String },

    #[error("storage failure: {0}")]
    Storage(#[from] StoreError),

    #[error("{message}")]
    Internal { message: String },
}

impl ApiError {
    /// Create a NotFound error with a custom message
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create a BadRequest error with a custom message
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    /// Create an Unauthorized error with a custom message
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    /// Create a Forbidden error with a custom message
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
        }
    }

    /// Create an Internal error with a custom message
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// HTTP status code this error maps to
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::Forbidden { .. } => StatusCode::FORBIDDEN,
            Self::Storage(_) | Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<CommerceError> for ApiError {
    fn from(error: CommerceError) -> Self {
        match error {
            CommerceError::NotFound { resource } => Self::NotFound {
                message: format!("{resource} not found"),
            },
            CommerceError::Validation(message) => Self::BadRequest { message },
            CommerceError::Storage(source) => Self::Storage(source),
            CommerceError::Configuration(message) => Self::Internal { message },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();
        let body = json!({
            "success": false,
            "message": self.to_string(),
        });

        (status_code, Json(body)).into_response()
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mappings() {
        assert_eq!(
            ApiError::not_found("Order not found").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::bad_request("bad").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::unauthorized("login").status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::forbidden("admins only").status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            ApiError::Storage(StoreError::backend("down")).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_domain_errors_map_to_api_errors() {
        let api: ApiError = CommerceError::not_found("Order").into();
        assert_eq!(api.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(api.to_string(), "Order not found");

        let api: ApiError = CommerceError::validation("order items are required").into();
        assert_eq!(api.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_error_messages_pass_through() {
        let error = ApiError::bad_request("Invalid Coupon Code");
        assert_eq!(error.to_string(), "Invalid Coupon Code");
    }
}
