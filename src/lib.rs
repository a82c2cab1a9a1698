#![allow(clippy::doc_markdown)] // Allow technical terms in docs
#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # Commerce Core
//!
//! Rust backend for an e-commerce storefront and its admin dashboard.
//!
//! ## Overview
//!
//! The crate serves two kinds of traffic from one process: shopper traffic
//! (catalog browsing, order placement, discount lookup) and admin traffic
//! (dashboard reports, catalog and account management). The dashboard
//! reports are expensive multi-read aggregations, so every report is
//! computed once, cached under a stable key, and invalidated synchronously
//! by the writes that change its inputs.
//!
//! ## Architecture
//!
//! Derived data flows one way: store reads are fanned out concurrently,
//! joined, folded into report payloads by the analytics engine, and parked
//! in the [`cache`] until a write evicts them. Writes go through the
//! [`fulfillment`] service (orders) or the catalog handlers (products),
//! which name the affected cache keys explicitly; nothing expires by time.
//!
//! ## Module Organization
//!
//! - [`models`] - Products, users, orders, and coupons
//! - [`store`] - Storage seams and the in-memory document store
//! - [`analytics`] - Chart binning, percentages, and report assembly
//! - [`cache`] - Derived data cache and invalidation coordinator
//! - [`fulfillment`] - Order placement and lifecycle service
//! - [`web`] - Axum REST API
//! - [`config`] - Configuration management
//! - [`error`] - Structured error handling
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use commerce_core::config::AppConfig;
//! use commerce_core::web::{create_app, state::AppState};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::load()?;
//! let address = config.bind_address();
//!
//! let app = create_app(AppState::new(config));
//!
//! let listener = tokio::net::TcpListener::bind(&address).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

pub mod analytics;
pub mod cache;
pub mod config;
pub mod error;
pub mod fulfillment;
pub mod logging;
pub mod models;
pub mod store;
pub mod web;

pub use analytics::{BarCharts, DashboardStats, LineCharts, PieCharts, ReportAssembler};
pub use cache::{InvalidationRequest, ResultCache};
pub use config::{AppConfig, StockMode};
pub use error::{CommerceError, Result, StoreError};
pub use fulfillment::Fulfillment;
