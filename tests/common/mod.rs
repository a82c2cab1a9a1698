//! Shared infrastructure for the HTTP integration tests.
//!
//! Builds the full router over seeded in-memory stores so tests exercise the
//! public surface without binding a socket. Requests go through
//! `tower::ServiceExt::oneshot`, so each test drives the same middleware and
//! extractor chain the server binary serves.

// Each integration test binary compiles its own copy of this module and uses
// a subset of the helpers.
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use chrono::{DateTime, NaiveDate, Utc};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use commerce_core::config::AppConfig;
use commerce_core::models::{
    Coupon, Gender, NewCoupon, NewOrder, Order, OrderItem, OrderStatus, Product, ShippingInfo,
    Role, User,
};
use commerce_core::store::{
    CouponStore, DateRange, MemoryStore, OrderStore, ProductQuery, ProductStore, StoreResult,
    UserStore,
};
use commerce_core::web::create_app;
use commerce_core::web::state::AppState;

/// Router plus direct access to the backing store for seeding and for writes
/// that deliberately bypass cache invalidation.
pub fn test_app() -> (Router, Arc<MemoryStore>) {
    test_app_with(AppConfig::default())
}

pub fn test_app_with(config: AppConfig) -> (Router, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let state = AppState::with_stores(
        config,
        store.clone(),
        store.clone(),
        store.clone(),
        store.clone(),
    );
    (create_app(state), store)
}

/// Same as [`test_app`], but product and order store calls increment the
/// returned counter. The user and coupon seams stay raw so the admin gate's
/// per-request lookup does not register, which lets tests prove a cached
/// report read issues zero store traffic.
pub fn counting_app() -> (Router, Arc<MemoryStore>, Arc<AtomicUsize>) {
    let store = Arc::new(MemoryStore::new());
    let calls = Arc::new(AtomicUsize::new(0));
    let counting = Arc::new(CountingStore {
        inner: store.clone(),
        calls: calls.clone(),
    });
    let state = AppState::with_stores(
        AppConfig::default(),
        counting.clone(),
        store.clone(),
        counting.clone(),
        store.clone(),
    );
    (create_app(state), store, calls)
}

/// Issue one request and decode the JSON body.
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let (status, bytes) = send_raw(app, method, uri, body).await;
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("response body should be JSON")
    };
    (status, json)
}

/// Issue one request and return the raw body bytes, for byte-identity checks
/// on cached payloads.
pub async fn send_raw(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Vec<u8>) {
    let request = match body {
        Some(json) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .expect("request should build"),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .expect("request should build"),
    };

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("router should produce a response");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    (status, bytes.to_vec())
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

pub fn dob(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub async fn seed_user(
    store: &MemoryStore,
    name: &str,
    role: Role,
    gender: Gender,
    dob: NaiveDate,
) -> User {
    let user = User {
        id: Uuid::new_v4(),
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        photo: format!("{}.png", name.to_lowercase()),
        gender,
        role,
        dob,
        created_at: Utc::now(),
    };
    UserStore::insert(store, user).await.expect("user should insert")
}

pub async fn seed_admin(store: &MemoryStore) -> User {
    seed_user(store, "Aditi", Role::Admin, Gender::Female, dob(1988, 4, 12)).await
}

pub async fn seed_shopper(store: &MemoryStore) -> User {
    seed_user(store, "Ravi", Role::User, Gender::Male, dob(1996, 9, 3)).await
}

pub async fn seed_product(
    store: &MemoryStore,
    name: &str,
    category: &str,
    price: i64,
    stock: i64,
) -> Product {
    seed_product_at(store, name, category, price, stock, Utc::now()).await
}

pub async fn seed_product_at(
    store: &MemoryStore,
    name: &str,
    category: &str,
    price: i64,
    stock: i64,
    created_at: DateTime<Utc>,
) -> Product {
    let product = Product {
        id: Uuid::new_v4(),
        name: name.to_string(),
        photo: format!("{}.jpg", name.to_lowercase().replace(' ', "-")),
        price,
        stock,
        category: category.to_lowercase(),
        created_at,
    };
    ProductStore::insert(store, product)
        .await
        .expect("product should insert")
}

pub fn shipping() -> ShippingInfo {
    ShippingInfo {
        address: "14 Marine Drive".to_string(),
        city: "Mumbai".to_string(),
        state: "Maharashtra".to_string(),
        country: "India".to_string(),
        pin_code: 400_001,
    }
}

pub fn line_item(product: &Product, quantity: u32) -> OrderItem {
    OrderItem {
        product_id: product.id,
        name: product.name.clone(),
        photo: product.photo.clone(),
        price: product.price,
        quantity,
    }
}

/// Order draft with a 10% tax line, no shipping charge, and no discount.
pub fn order_draft(user: &User, product: &Product, quantity: u32) -> NewOrder {
    let subtotal = product.price * i64::from(quantity);
    NewOrder {
        user_id: user.id,
        shipping_info: shipping(),
        items: vec![line_item(product, quantity)],
        subtotal,
        tax: subtotal / 10,
        shipping_charges: 0,
        discount: 0,
        total: subtotal + subtotal / 10,
    }
}

pub async fn seed_order_at(
    store: &MemoryStore,
    user: &User,
    product: &Product,
    quantity: u32,
    created_at: DateTime<Utc>,
) -> Order {
    let order = order_draft(user, product, quantity).into_order(created_at);
    OrderStore::insert(store, order)
        .await
        .expect("order should insert")
}

pub async fn seed_coupon(store: &MemoryStore, code: &str, amount: i64) -> Coupon {
    let coupon = NewCoupon {
        code: code.to_string(),
        amount,
    }
    .into_coupon();
    CouponStore::insert(store, coupon)
        .await
        .expect("coupon should insert")
}

/// A record timestamp guaranteed to fall inside the current calendar month
/// whenever the assembler computes its ranges, even right after a month
/// rollover.
pub fn this_month() -> DateTime<Utc> {
    let now = Utc::now();
    DateRange::current_month(now)
        .start
        .max(now - chrono::Duration::minutes(1))
}

/// A timestamp safely inside the previous calendar month.
pub fn last_month() -> DateTime<Utc> {
    DateRange::previous_month(Utc::now()).start + chrono::Duration::hours(1)
}

/// Store decorator that counts every trait method call.
pub struct CountingStore {
    inner: Arc<MemoryStore>,
    calls: Arc<AtomicUsize>,
}

impl CountingStore {
    fn tick(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl ProductStore for CountingStore {
    async fn insert(&self, product: Product) -> StoreResult<Product> {
        self.tick();
        ProductStore::insert(self.inner.as_ref(), product).await
    }

    async fn find(&self, id: Uuid) -> StoreResult<Option<Product>> {
        self.tick();
        ProductStore::find(self.inner.as_ref(), id).await
    }

    async fn update(&self, product: Product) -> StoreResult<Option<Product>> {
        self.tick();
        ProductStore::update(self.inner.as_ref(), product).await
    }

    async fn delete(&self, id: Uuid) -> StoreResult<bool> {
        self.tick();
        ProductStore::delete(self.inner.as_ref(), id).await
    }

    async fn all(&self) -> StoreResult<Vec<Product>> {
        self.tick();
        ProductStore::all(self.inner.as_ref()).await
    }

    async fn latest(&self, limit: usize) -> StoreResult<Vec<Product>> {
        self.tick();
        ProductStore::latest(self.inner.as_ref(), limit).await
    }

    async fn created_between(&self, range: &DateRange) -> StoreResult<Vec<Product>> {
        self.tick();
        ProductStore::created_between(self.inner.as_ref(), range).await
    }

    async fn count(&self) -> StoreResult<u64> {
        self.tick();
        ProductStore::count(self.inner.as_ref()).await
    }

    async fn count_in_category(&self, category: &str) -> StoreResult<u64> {
        self.tick();
        self.inner.count_in_category(category).await
    }

    async fn count_out_of_stock(&self) -> StoreResult<u64> {
        self.tick();
        self.inner.count_out_of_stock().await
    }

    async fn distinct_categories(&self) -> StoreResult<Vec<String>> {
        self.tick();
        self.inner.distinct_categories().await
    }

    async fn search(&self, query: &ProductQuery) -> StoreResult<Vec<Product>> {
        self.tick();
        self.inner.search(query).await
    }

    async fn search_count(&self, query: &ProductQuery) -> StoreResult<u64> {
        self.tick();
        self.inner.search_count(query).await
    }
}

#[async_trait]
impl OrderStore for CountingStore {
    async fn insert(&self, order: Order) -> StoreResult<Order> {
        self.tick();
        OrderStore::insert(self.inner.as_ref(), order).await
    }

    async fn find(&self, id: Uuid) -> StoreResult<Option<Order>> {
        self.tick();
        OrderStore::find(self.inner.as_ref(), id).await
    }

    async fn update(&self, order: Order) -> StoreResult<Option<Order>> {
        self.tick();
        OrderStore::update(self.inner.as_ref(), order).await
    }

    async fn delete(&self, id: Uuid) -> StoreResult<bool> {
        self.tick();
        OrderStore::delete(self.inner.as_ref(), id).await
    }

    async fn all(&self) -> StoreResult<Vec<Order>> {
        self.tick();
        OrderStore::all(self.inner.as_ref()).await
    }

    async fn for_user(&self, user_id: Uuid) -> StoreResult<Vec<Order>> {
        self.tick();
        self.inner.for_user(user_id).await
    }

    async fn created_between(&self, range: &DateRange) -> StoreResult<Vec<Order>> {
        self.tick();
        OrderStore::created_between(self.inner.as_ref(), range).await
    }

    async fn count_by_status(&self, status: OrderStatus) -> StoreResult<u64> {
        self.tick();
        self.inner.count_by_status(status).await
    }

    async fn latest(&self, limit: usize) -> StoreResult<Vec<Order>> {
        self.tick();
        OrderStore::latest(self.inner.as_ref(), limit).await
    }
}
