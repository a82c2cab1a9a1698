//! # Web API Route Definitions
//!
//! Defines the HTTP route structure for the storefront API.
//! Routes are organized into logical groups with proper versioning.

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::web::handlers;
use crate::web::state::AppState;

/// Create API v1 routes
///
/// All v1 routes are prefixed with `/api/v1` and include:
/// - Dashboard API - Admin analytics reports (stats, pie, bar, line)
/// - Orders API - Placement, lookup, and lifecycle management
/// - Products API - Catalog management and storefront search
/// - Users API - Account registration and administration
/// - Payments API - Discount code management and lookup
///
/// Admin-only endpoints authenticate through the
/// [`AdminUser`](crate::web::extractors::AdminUser) extractor declared in
/// their handler signatures.
pub fn api_v1_routes() -> Router<AppState> {
    Router::new()
        // Dashboard API (admin)
        .route("/dashboard/stats", get(handlers::dashboard::get_stats))
        .route("/dashboard/pie", get(handlers::dashboard::get_pie_charts))
        .route("/dashboard/bar", get(handlers::dashboard::get_bar_charts))
        .route("/dashboard/line", get(handlers::dashboard::get_line_charts))
        // Orders API
        .route("/order/new", post(handlers::orders::place_order))
        .route("/order/my-order", get(handlers::orders::my_orders))
        .route("/order/all-orders", get(handlers::orders::all_orders))
        .route("/order/:id", get(handlers::orders::get_order))
        .route("/order/:id", put(handlers::orders::process_order))
        .route("/order/:id", delete(handlers::orders::delete_order))
        // Products API
        .route("/product/new", post(handlers::products::create_product))
        .route("/product/latest", get(handlers::products::latest_products))
        .route("/product/categories", get(handlers::products::categories))
        .route(
            "/product/admin-products",
            get(handlers::products::admin_products),
        )
        .route("/product/all", get(handlers::products::search_products))
        .route("/product/:id", get(handlers::products::get_product))
        .route("/product/:id", put(handlers::products::update_product))
        .route("/product/:id", delete(handlers::products::delete_product))
        // Users API
        .route("/user/new", post(handlers::users::create_user))
        .route("/user/all", get(handlers::users::all_users))
        .route("/user/:id", get(handlers::users::get_user))
        .route("/user/:id", delete(handlers::users::delete_user))
        // Payments API
        .route(
            "/payment/coupon/new",
            post(handlers::payments::create_coupon),
        )
        .route("/payment/discount", get(handlers::payments::apply_discount))
        .route("/payment/coupon/all", get(handlers::payments::all_coupons))
        .route(
            "/payment/coupon/:id",
            delete(handlers::payments::delete_coupon),
        )
}

/// Create health routes
///
/// Health endpoints live at the root, outside the versioned API:
/// - `/health` - Basic liveness check
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::basic_health))
}
