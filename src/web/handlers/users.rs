//! # User Account Handlers
//!
//! HTTP handlers for account registration and administration. Registration
//! is an upsert: posting an id that already exists greets the account again
//! instead of creating a duplicate, so identity-provider callbacks can
//! repeat safely.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use super::MessageResponse;
use crate::models::{NewUser, User};
use crate::web::errors::{ApiError, ApiResult};
use crate::web::extractors::AdminUser;
use crate::web::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct UsersResponse {
    pub success: bool,
    pub users: Vec<User>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UserResponse {
    pub success: bool,
    pub user: User,
}

/// Register an account: POST /api/v1/user/new
pub async fn create_user(
    State(state): State<AppState>,
    Json(draft): Json<NewUser>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    if let Some(id) = draft.id {
        if let Some(existing) = state.users.find(id).await? {
            return Ok((
                StatusCode::OK,
                Json(MessageResponse::ok(format!("Welcome, {}", existing.name))),
            ));
        }
    }

    if draft.name.is_empty() || draft.email.is_empty() || draft.photo.is_empty() {
        return Err(ApiError::bad_request("Please add all fields"));
    }

    let user = state.users.insert(draft.into_user(Utc::now())).await?;

    info!(user_id = %user.id, role = ?user.role, "user registered");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::ok(format!("Welcome, {}", user.name))),
    ))
}

/// Every account: GET /api/v1/user/all
pub async fn all_users(
    _admin: AdminUser,
    State(state): State<AppState>,
) -> ApiResult<Json<UsersResponse>> {
    let users = state.users.all().await?;
    Ok(Json(UsersResponse {
        success: true,
        users,
    }))
}

/// One account by id: GET /api/v1/user/:id
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> ApiResult<Json<UserResponse>> {
    let user = state
        .users
        .find(user_id)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    Ok(Json(UserResponse {
        success: true,
        user,
    }))
}

/// Remove an account: DELETE /api/v1/user/:id
pub async fn delete_user(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> ApiResult<Json<MessageResponse>> {
    let removed = state.users.delete(user_id).await?;
    if !removed {
        return Err(ApiError::not_found("User not found"));
    }

    Ok(Json(MessageResponse::ok("User Deleted Successfully")))
}
