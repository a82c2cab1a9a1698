//! # Custom Axum Extractors
//!
//! Extractors shared by the admin endpoints. The admin gate runs as an
//! extractor rather than router middleware because several paths mix public
//! and admin methods (`/order/:id` serves a public GET next to admin PUT and
//! DELETE); declaring [`AdminUser`] in the handler signature gates exactly
//! the methods that need it.

use axum::async_trait;
use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use axum::http::Uri;
use serde::Deserialize;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::models::User;
use crate::web::errors::ApiError;
use crate::web::state::AppState;

#[derive(Debug, Deserialize)]
struct AdminKey {
    id: Option<Uuid>,
}

/// Pull the caller id out of the query string.
///
/// `?id=` absent entirely is "not logged in"; a present but malformed id is
/// treated as an unknown account.
fn caller_id(uri: &Uri) -> Result<Uuid, ApiError> {
    let Query(params) = Query::<AdminKey>::try_from_uri(uri)
        .map_err(|_| ApiError::unauthorized("Invalid id, please log in again"))?;

    params
        .id
        .ok_or_else(|| ApiError::unauthorized("Please log in first"))
}

/// Authenticated administrator extractor
///
/// The caller identifies itself through the `id` query parameter; the
/// referenced account must exist and carry the admin role. Missing or
/// unknown ids are a 401, a known non-admin id is a 403.
pub struct AdminUser {
    pub user: User,
}

#[async_trait]
impl FromRequestParts<AppState> for AdminUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let id = caller_id(&parts.uri)?;

        let user = state
            .users
            .find(id)
            .await?
            .ok_or_else(|| ApiError::unauthorized("Invalid id, please log in again"))?;

        if !user.is_admin() {
            warn!(user_id = %id, "non-admin request to admin endpoint");
            return Err(ApiError::forbidden("Admin access required"));
        }

        debug!(user_id = %id, "admin request authorized");

        Ok(Self { user })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_caller_id_parses_uuid() {
        let id = Uuid::new_v4();
        let uri: Uri = format!("/api/v1/user/all?id={id}").parse().unwrap();
        assert_eq!(caller_id(&uri).unwrap(), id);
    }

    #[test]
    fn test_missing_id_is_unauthorized() {
        let uri: Uri = "/api/v1/user/all".parse().unwrap();
        let error = caller_id(&uri).unwrap_err();
        assert_eq!(error.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(error.to_string(), "Please log in first");
    }

    #[test]
    fn test_malformed_id_is_unauthorized() {
        let uri: Uri = "/api/v1/user/all?id=not-a-uuid".parse().unwrap();
        let error = caller_id(&uri).unwrap_err();
        assert_eq!(error.status_code(), StatusCode::UNAUTHORIZED);
    }
}
