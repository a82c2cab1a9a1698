//! # Product Catalog Handlers
//!
//! HTTP handlers for the product catalog. The hot storefront reads (latest,
//! categories, admin listing, single product) are cache-first; search is
//! served straight from the store because its keyspace is unbounded. Every
//! write invalidates the product listing keys, the touched per-product key,
//! and the admin report keys.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use super::MessageResponse;
use crate::cache::keys;
use crate::cache::InvalidationRequest;
use crate::models::{NewProduct, Product, ProductUpdate};
use crate::store::{ProductQuery, PRODUCTS_PER_PAGE};
use crate::web::errors::{ApiError, ApiResult};
use crate::web::extractors::AdminUser;
use crate::web::state::AppState;

/// How many products the storefront landing strip shows
const LATEST_PRODUCT_COUNT: usize = 5;

#[derive(Debug, Serialize, Deserialize)]
pub struct ProductsResponse {
    pub success: bool,
    pub products: Vec<Product>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub success: bool,
    pub products: Vec<Product>,
    pub total_page: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProductResponse {
    pub success: bool,
    pub product: Product,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: Vec<String>,
}

/// Create a catalog entry: POST /api/v1/product/new
pub async fn create_product(
    _admin: AdminUser,
    State(state): State<AppState>,
    Json(draft): Json<NewProduct>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    if draft.name.is_empty() || draft.photo.is_empty() || draft.category.is_empty() {
        return Err(ApiError::bad_request("Please enter all fields"));
    }

    let product = state.products.insert(draft.into_product(Utc::now())).await?;
    state
        .cache
        .invalidate(&InvalidationRequest::product_write(Vec::new()));

    info!(product_id = %product.id, category = %product.category, "product created");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::ok("Product Created Successfully")),
    ))
}

/// Newest catalog entries: GET /api/v1/product/latest
pub async fn latest_products(State(state): State<AppState>) -> ApiResult<Json<ProductsResponse>> {
    let products = match state.cache.get::<Vec<Product>>(keys::LATEST_PRODUCTS) {
        Some(products) => products,
        None => {
            let products = state.products.latest(LATEST_PRODUCT_COUNT).await?;
            state.cache.set(keys::LATEST_PRODUCTS, products.clone());
            products
        }
    };

    Ok(Json(ProductsResponse {
        success: true,
        products,
    }))
}

/// Distinct category names: GET /api/v1/product/categories
pub async fn categories(State(state): State<AppState>) -> ApiResult<Json<CategoriesResponse>> {
    let categories = match state.cache.get::<Vec<String>>(keys::CATEGORIES) {
        Some(categories) => categories,
        None => {
            let categories = state.products.distinct_categories().await?;
            state.cache.set(keys::CATEGORIES, categories.clone());
            categories
        }
    };

    Ok(Json(CategoriesResponse {
        success: true,
        categories,
    }))
}

/// Full catalog for administration: GET /api/v1/product/admin-products
pub async fn admin_products(
    _admin: AdminUser,
    State(state): State<AppState>,
) -> ApiResult<Json<ProductsResponse>> {
    let products = match state.cache.get::<Vec<Product>>(keys::ALL_PRODUCTS) {
        Some(products) => products,
        None => {
            let products = state.products.all().await?;
            state.cache.set(keys::ALL_PRODUCTS, products.clone());
            products
        }
    };

    Ok(Json(ProductsResponse {
        success: true,
        products,
    }))
}

/// Filtered catalog search: GET /api/v1/product/all
///
/// Uncached: the filter combinations form an unbounded keyspace. The page
/// of results and the unpaged match count are fetched concurrently.
pub async fn search_products(
    State(state): State<AppState>,
    Query(query): Query<ProductQuery>,
) -> ApiResult<Json<SearchResponse>> {
    let (products, matched) = tokio::try_join!(
        state.products.search(&query),
        state.products.search_count(&query)
    )?;

    let total_page = matched.div_ceil(PRODUCTS_PER_PAGE as u64);

    Ok(Json(SearchResponse {
        success: true,
        products,
        total_page,
    }))
}

/// One catalog entry: GET /api/v1/product/:id
pub async fn get_product(
    State(state): State<AppState>,
    Path(product_id): Path<Uuid>,
) -> ApiResult<Json<ProductResponse>> {
    let key = keys::product(product_id);

    let product = match state.cache.get::<Product>(&key) {
        Some(product) => product,
        None => {
            let product = state
                .products
                .find(product_id)
                .await?
                .ok_or_else(|| ApiError::not_found("Product not found"))?;
            state.cache.set(key, product.clone());
            product
        }
    };

    Ok(Json(ProductResponse {
        success: true,
        product,
    }))
}

/// Update a catalog entry: PUT /api/v1/product/:id
pub async fn update_product(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(product_id): Path<Uuid>,
    Json(update): Json<ProductUpdate>,
) -> ApiResult<Json<MessageResponse>> {
    let mut product = state
        .products
        .find(product_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Product not found"))?;

    product.apply(update);
    state.products.update(product).await?;
    state
        .cache
        .invalidate(&InvalidationRequest::product_write(vec![product_id]));

    Ok(Json(MessageResponse::ok("Product Updated Successfully")))
}

/// Remove a catalog entry: DELETE /api/v1/product/:id
pub async fn delete_product(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(product_id): Path<Uuid>,
) -> ApiResult<Json<MessageResponse>> {
    let removed = state.products.delete(product_id).await?;
    if !removed {
        return Err(ApiError::not_found("Product not found"));
    }

    state
        .cache
        .invalidate(&InvalidationRequest::product_write(vec![product_id]));

    Ok(Json(MessageResponse::ok("Product Deleted Successfully")))
}
