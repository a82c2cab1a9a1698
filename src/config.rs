//! # Application Configuration
//!
//! Environment-sourced configuration for the server binary and the order
//! fulfillment pipeline. Values come from `COMMERCE_`-prefixed environment
//! variables (`COMMERCE_PORT=4000`, `COMMERCE_STOCK_MODE=strict`) with
//! explicit defaults for everything else. No config files, no silent
//! fallbacks beyond the documented defaults.

use config::{Config, Environment};
use serde::Deserialize;

use crate::error::{CommerceError, Result};

/// How order placement applies stock decrements across line items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockMode {
    /// Apply decrements one item at a time; a missing product aborts the
    /// loop and leaves earlier decrements in place
    #[default]
    BestEffort,
    /// Verify every referenced product exists before applying any decrement
    Strict,
}

/// Runtime settings for the HTTP server and fulfillment pipeline
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Interface the server binds to
    #[serde(default = "default_host")]
    pub host: String,

    /// TCP port for the HTTP listener
    #[serde(default = "default_port")]
    pub port: u16,

    /// Per-request timeout applied by the timeout layer
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Stock reduction behavior during order placement
    #[serde(default)]
    pub stock_mode: StockMode,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    4000
}

fn default_request_timeout_secs() -> u64 {
    30
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            request_timeout_secs: default_request_timeout_secs(),
            stock_mode: StockMode::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from `COMMERCE_*` environment variables
    pub fn load() -> Result<Self> {
        let settings = Config::builder()
            .add_source(Environment::with_prefix("COMMERCE").try_parsing(true))
            .build()
            .map_err(|e| CommerceError::Configuration(e.to_string()))?;

        settings
            .try_deserialize()
            .map_err(|e| CommerceError::Configuration(e.to_string()))
    }

    /// Socket address string for the TCP listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
