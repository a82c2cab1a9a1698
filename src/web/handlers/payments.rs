//! # Coupon and Discount Handlers
//!
//! HTTP handlers for discount codes. Coupon lookups hit the store directly;
//! the collection is tiny and admin-managed, so it is not worth a cache key.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use super::MessageResponse;
use crate::models::{Coupon, NewCoupon};
use crate::web::errors::{ApiError, ApiResult};
use crate::web::extractors::AdminUser;
use crate::web::state::AppState;

#[derive(Debug, Deserialize)]
pub struct DiscountQuery {
    pub coupon: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DiscountResponse {
    pub success: bool,
    pub discount: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CouponsResponse {
    pub success: bool,
    pub coupons: Vec<Coupon>,
}

/// Create a discount code: POST /api/v1/payment/coupon/new
pub async fn create_coupon(
    _admin: AdminUser,
    State(state): State<AppState>,
    Json(draft): Json<NewCoupon>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    if draft.code.is_empty() || draft.amount <= 0 {
        return Err(ApiError::bad_request("Please enter both coupon and amount"));
    }

    let coupon = state.coupons.insert(draft.into_coupon()).await?;

    info!(coupon_id = %coupon.id, code = %coupon.code, "coupon created");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::ok(format!(
            "Coupon {} Created Successfully",
            coupon.code
        ))),
    ))
}

/// Resolve a code to its discount amount: GET /api/v1/payment/discount?coupon=...
pub async fn apply_discount(
    State(state): State<AppState>,
    Query(query): Query<DiscountQuery>,
) -> ApiResult<Json<DiscountResponse>> {
    let coupon = state
        .coupons
        .find_by_code(&query.coupon)
        .await?
        .ok_or_else(|| ApiError::bad_request("Invalid Coupon Code"))?;

    Ok(Json(DiscountResponse {
        success: true,
        discount: coupon.amount,
    }))
}

/// Every discount code: GET /api/v1/payment/coupon/all
pub async fn all_coupons(
    _admin: AdminUser,
    State(state): State<AppState>,
) -> ApiResult<Json<CouponsResponse>> {
    let coupons = state.coupons.all().await?;
    Ok(Json(CouponsResponse {
        success: true,
        coupons,
    }))
}

/// Remove a discount code: DELETE /api/v1/payment/coupon/:id
pub async fn delete_coupon(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(coupon_id): Path<Uuid>,
) -> ApiResult<Json<MessageResponse>> {
    let coupon = state
        .coupons
        .find(coupon_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Invalid Coupon ID"))?;

    state.coupons.delete(coupon_id).await?;

    Ok(Json(MessageResponse::ok(format!(
        "Coupon {} Deleted Successfully",
        coupon.code
    ))))
}
