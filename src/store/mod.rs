//! # Document Store Seam
//!
//! Per-collection async traits consumed by the report assemblers, the
//! fulfillment pipeline, and the web handlers. The traits model exactly the
//! capabilities the aggregations need: date-range subsets, counts, distinct
//! values, and latest-N reads. `memory::MemoryStore` is the in-process
//! implementation the server and tests run on; a persistent backend slots in
//! behind the same traits.

pub mod memory;

use async_trait::async_trait;
use chrono::{DateTime, Datelike, Months, TimeZone, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::models::{Coupon, Gender, Order, OrderStatus, Product, Role, User};

pub use crate::error::StoreError;
pub use memory::MemoryStore;

/// Result type alias for store operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Page size for catalog search results
pub const PRODUCTS_PER_PAGE: usize = 8;

/// Half-open time window `[start, end)` used for month-scoped queries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DateRange {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// First day of the month containing `now`, up to `now`
    pub fn current_month(now: DateTime<Utc>) -> Self {
        Self {
            start: month_start(now),
            end: now,
        }
    }

    /// The full previous calendar month
    pub fn previous_month(now: DateTime<Utc>) -> Self {
        let end = month_start(now);
        let start = month_start(end - chrono::Duration::days(1));
        Self { start, end }
    }

    /// `[now - months, now)`
    pub fn trailing_months(now: DateTime<Utc>, months: u32) -> Self {
        let start = now
            .checked_sub_months(Months::new(months))
            .unwrap_or(DateTime::<Utc>::MIN_UTC);
        Self { start, end: now }
    }

    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant < self.end
    }
}

/// Midnight on the first day of the month containing `instant`.
/// Day one of a valid month always exists, so the fallback arm is unreachable.
fn month_start(instant: DateTime<Utc>) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(instant.year(), instant.month(), 1, 0, 0, 0)
        .single()
        .unwrap_or(instant)
}

/// Sort direction for catalog search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceSort {
    Asc,
    Desc,
}

/// Filters for catalog search; doubles as the query-string shape of the
/// public search endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductQuery {
    /// Case-insensitive substring match on the product name
    pub search: Option<String>,
    /// Upper price bound, inclusive
    pub price: Option<i64>,
    pub category: Option<String>,
    pub sort: Option<PriceSort>,
    /// One-based page index
    pub page: Option<u32>,
}

#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn insert(&self, product: Product) -> StoreResult<Product>;
    async fn find(&self, id: Uuid) -> StoreResult<Option<Product>>;
    /// Replace an existing record; `None` when the id is unknown
    async fn update(&self, product: Product) -> StoreResult<Option<Product>>;
    async fn delete(&self, id: Uuid) -> StoreResult<bool>;
    async fn all(&self) -> StoreResult<Vec<Product>>;
    /// Newest records first, at most `limit`
    async fn latest(&self, limit: usize) -> StoreResult<Vec<Product>>;
    async fn created_between(&self, range: &DateRange) -> StoreResult<Vec<Product>>;
    async fn count(&self) -> StoreResult<u64>;
    async fn count_in_category(&self, category: &str) -> StoreResult<u64>;
    async fn count_out_of_stock(&self) -> StoreResult<u64>;
    async fn distinct_categories(&self) -> StoreResult<Vec<String>>;
    async fn search(&self, query: &ProductQuery) -> StoreResult<Vec<Product>>;
    /// Total records matching `query` with paging ignored; drives page math
    async fn search_count(&self, query: &ProductQuery) -> StoreResult<u64>;
}

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn insert(&self, user: User) -> StoreResult<User>;
    async fn find(&self, id: Uuid) -> StoreResult<Option<User>>;
    async fn delete(&self, id: Uuid) -> StoreResult<bool>;
    async fn all(&self) -> StoreResult<Vec<User>>;
    async fn created_between(&self, range: &DateRange) -> StoreResult<Vec<User>>;
    async fn count(&self) -> StoreResult<u64>;
    async fn count_by_gender(&self, gender: Gender) -> StoreResult<u64>;
    async fn count_by_role(&self, role: Role) -> StoreResult<u64>;
}

#[async_trait]
pub trait OrderStore: Send + Sync {
    async fn insert(&self, order: Order) -> StoreResult<Order>;
    async fn find(&self, id: Uuid) -> StoreResult<Option<Order>>;
    /// Replace an existing record; `None` when the id is unknown
    async fn update(&self, order: Order) -> StoreResult<Option<Order>>;
    async fn delete(&self, id: Uuid) -> StoreResult<bool>;
    async fn all(&self) -> StoreResult<Vec<Order>>;
    async fn for_user(&self, user_id: Uuid) -> StoreResult<Vec<Order>>;
    async fn created_between(&self, range: &DateRange) -> StoreResult<Vec<Order>>;
    async fn count_by_status(&self, status: OrderStatus) -> StoreResult<u64>;
    /// Newest records first, at most `limit`
    async fn latest(&self, limit: usize) -> StoreResult<Vec<Order>>;
}

#[async_trait]
pub trait CouponStore: Send + Sync {
    async fn insert(&self, coupon: Coupon) -> StoreResult<Coupon>;
    async fn find(&self, id: Uuid) -> StoreResult<Option<Coupon>>;
    async fn find_by_code(&self, code: &str) -> StoreResult<Option<Coupon>>;
    async fn all(&self) -> StoreResult<Vec<Coupon>>;
    async fn delete(&self, id: Uuid) -> StoreResult<bool>;
}
