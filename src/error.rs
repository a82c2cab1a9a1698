//! # Core Error Types
//!
//! Crate-wide error taxonomy shared by the storage seam, fulfillment flows,
//! and analytics assemblers. Web-facing conversions live in `web::errors`.

use thiserror::Error;

/// Failure surfaced by a document store backend.
///
/// The in-memory engine never produces one, but the seam carries it so that
/// alternative backends can report connectivity or query failures without the
/// domain layer inspecting backend-specific error types.
#[derive(Error, Debug, Clone)]
#[error("document store failure: {0}")]
pub struct StoreError(pub String);

impl StoreError {
    pub fn backend(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Errors produced by domain operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// A referenced record does not exist
    #[error("{resource} not found")]
    NotFound { resource: &'static str },

    /// Request payload failed domain validation
    #[error("{0}")]
    Validation(String),

    /// Opaque failure from the document store
    #[error("storage failure: {0}")]
    Storage(#[from] StoreError),

    /// Invalid or missing runtime configuration
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl CommerceError {
    pub fn not_found(resource: &'static str) -> Self {
        Self::NotFound { resource }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, CommerceError>;
