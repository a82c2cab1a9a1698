//! # Web API Request Handlers
//!
//! Contains all HTTP request handlers organized by functional area.
//! Each module handles a specific aspect of the API.

use serde::{Deserialize, Serialize};

pub mod dashboard;
pub mod health;
pub mod orders;
pub mod payments;
pub mod products;
pub mod users;

/// Envelope for write acknowledgements
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}
