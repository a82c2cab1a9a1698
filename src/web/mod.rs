//! # Web API Module
//!
//! Axum-based REST API for the storefront and its admin dashboard.
//! Provides HTTP endpoints for shoppers (catalog, orders, discounts) and
//! administrators (reports, catalog and account management).
//!
//! ## Architecture Overview
//!
//! - **Cache-first reads**: hot endpoints consult the derived data cache
//!   before the store; writes invalidate the affected keys synchronously
//! - **Admin gate**: administrative endpoints authenticate through the
//!   `id` query parameter resolved against the user store
//! - **Typed errors**: every failure serializes to the
//!   `{"success": false, "message": ...}` envelope with a mapped status
//!
//! ## Core Components
//!
//! - [`routes`] - HTTP route definitions and organization
//! - [`handlers`] - Request handlers for different endpoint groups
//! - [`extractors`] - Admin gate and shared request extractors
//! - [`state`] - Shared application state and storage seams
//! - [`errors`] - Web-specific error types and responses

pub mod errors;
pub mod extractors;
pub mod handlers;
pub mod routes;
pub mod state;

use std::time::Duration;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use state::AppState;

/// Create the main Axum application with all routes and middleware
///
/// This is the entry point for the web API, setting up:
/// - All route definitions
/// - Middleware stack (timeout, CORS, tracing)
/// - Shared application state
///
/// # Arguments
/// * `app_state` - Shared application state including the storage seams and cache
///
/// # Returns
/// * `Router` - Configured Axum router ready for serving
pub fn create_app(app_state: AppState) -> Router {
    let request_timeout = Duration::from_secs(app_state.config.request_timeout_secs);

    Router::new()
        .merge(routes::health_routes())
        .nest("/api/v1", routes::api_v1_routes())
        .layer(TimeoutLayer::new(request_timeout))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
