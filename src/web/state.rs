//! # Web API Application State
//!
//! Defines the shared state for the web API: the storage seams, the derived
//! data cache, and the services built on top of them. Cloned per request;
//! every field is an `Arc` or a handle over `Arc`s.

use std::sync::Arc;

use tracing::info;

use crate::analytics::ReportAssembler;
use crate::cache::ResultCache;
use crate::config::AppConfig;
use crate::fulfillment::Fulfillment;
use crate::store::memory::MemoryStore;
use crate::store::{CouponStore, OrderStore, ProductStore, UserStore};

/// Shared application state for the web API
///
/// This state is shared across all request handlers and contains:
/// - The four storage seams (products, users, orders, coupons)
/// - The shared derived data cache
/// - The report assembler and order fulfillment services
#[derive(Clone)]
pub struct AppState {
    /// Server configuration
    pub config: Arc<AppConfig>,

    /// Product catalog storage seam
    pub products: Arc<dyn ProductStore>,

    /// User account storage seam
    pub users: Arc<dyn UserStore>,

    /// Order storage seam
    pub orders: Arc<dyn OrderStore>,

    /// Coupon storage seam
    pub coupons: Arc<dyn CouponStore>,

    /// Derived data cache shared by reads and invalidation
    pub cache: Arc<ResultCache>,

    /// Admin report assembler (cache-first)
    pub reports: ReportAssembler,

    /// Order lifecycle service (placement, processing, deletion)
    pub fulfillment: Fulfillment,
}

impl AppState {
    /// Create application state backed by a fresh in-memory store.
    ///
    /// All four storage seams share the same [`MemoryStore`] so catalog,
    /// account, and order data stay consistent across handlers.
    pub fn new(config: AppConfig) -> Self {
        let store = Arc::new(MemoryStore::new());

        info!(
            stock_mode = ?config.stock_mode,
            "Creating web application state with in-memory store"
        );

        Self::with_stores(config, store.clone(), store.clone(), store.clone(), store)
    }

    /// Create application state over caller-provided storage seams.
    ///
    /// The seams may point at the same backing store or at independent ones;
    /// tests use this to wrap seams with instrumented decorators.
    pub fn with_stores(
        config: AppConfig,
        products: Arc<dyn ProductStore>,
        users: Arc<dyn UserStore>,
        orders: Arc<dyn OrderStore>,
        coupons: Arc<dyn CouponStore>,
    ) -> Self {
        let cache = Arc::new(ResultCache::new());
        let reports = ReportAssembler::new(
            products.clone(),
            users.clone(),
            orders.clone(),
            cache.clone(),
        );
        let fulfillment = Fulfillment::new(
            orders.clone(),
            products.clone(),
            cache.clone(),
            config.stock_mode,
        );

        Self {
            config: Arc::new(config),
            products,
            users,
            orders,
            coupons,
            cache,
            reports,
            fulfillment,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_shares_one_cache() {
        let state = AppState::new(AppConfig::default());

        state.cache.set("probe", 1u64);
        let other = state.clone();
        assert_eq!(other.cache.get::<u64>("probe"), Some(1));
    }
}
