//! # Order Handlers
//!
//! HTTP handlers for order placement, lookup, and lifecycle management.
//! Writes go through the [`Fulfillment`](crate::fulfillment::Fulfillment)
//! service, which persists, adjusts stock, and invalidates the affected
//! cache keys. Reads are cache-first under the keys in
//! [`cache::keys`](crate::cache::keys).

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use super::MessageResponse;
use crate::cache::keys;
use crate::models::{NewOrder, Order};
use crate::web::errors::{ApiError, ApiResult};
use crate::web::extractors::AdminUser;
use crate::web::state::AppState;

#[derive(Debug, Deserialize)]
pub struct UserKey {
    pub id: Uuid,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct OrdersResponse {
    pub success: bool,
    pub orders: Vec<Order>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct OrderResponse {
    pub success: bool,
    pub order: Order,
}

/// Place a new order: POST /api/v1/order/new
pub async fn place_order(
    State(state): State<AppState>,
    Json(draft): Json<NewOrder>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    let order = state.fulfillment.place_order(draft, Utc::now()).await?;

    info!(order_id = %order.id, user_id = %order.user_id, "order placed via web API");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::ok("Order Placed Successfully")),
    ))
}

/// Orders belonging to the calling user: GET /api/v1/order/my-order?id=...
pub async fn my_orders(
    State(state): State<AppState>,
    Query(query): Query<UserKey>,
) -> ApiResult<Json<OrdersResponse>> {
    let key = keys::my_orders(query.id);

    let orders = match state.cache.get::<Vec<Order>>(&key) {
        Some(orders) => orders,
        None => {
            let orders = state.orders.for_user(query.id).await?;
            state.cache.set(key, orders.clone());
            orders
        }
    };

    Ok(Json(OrdersResponse {
        success: true,
        orders,
    }))
}

/// Every order in the system: GET /api/v1/order/all-orders
pub async fn all_orders(
    _admin: AdminUser,
    State(state): State<AppState>,
) -> ApiResult<Json<OrdersResponse>> {
    let orders = match state.cache.get::<Vec<Order>>(keys::ALL_ORDERS) {
        Some(orders) => orders,
        None => {
            let orders = state.orders.all().await?;
            state.cache.set(keys::ALL_ORDERS, orders.clone());
            orders
        }
    };

    Ok(Json(OrdersResponse {
        success: true,
        orders,
    }))
}

/// One order by id: GET /api/v1/order/:id
pub async fn get_order(
    State(state): State<AppState>,
    Path(order_id): Path<Uuid>,
) -> ApiResult<Json<OrderResponse>> {
    let key = keys::order(order_id);

    let order = match state.cache.get::<Order>(&key) {
        Some(order) => order,
        None => {
            let order = state
                .orders
                .find(order_id)
                .await?
                .ok_or_else(|| ApiError::not_found("Order not found"))?;
            state.cache.set(key, order.clone());
            order
        }
    };

    Ok(Json(OrderResponse {
        success: true,
        order,
    }))
}

/// Advance an order one fulfillment stage: PUT /api/v1/order/:id
pub async fn process_order(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(order_id): Path<Uuid>,
) -> ApiResult<Json<MessageResponse>> {
    state.fulfillment.process_order(order_id).await?;
    Ok(Json(MessageResponse::ok("Order Processed Successfully")))
}

/// Remove an order: DELETE /api/v1/order/:id
pub async fn delete_order(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(order_id): Path<Uuid>,
) -> ApiResult<Json<MessageResponse>> {
    state.fulfillment.delete_order(order_id).await?;
    Ok(Json(MessageResponse::ok("Order Deleted Successfully")))
}
