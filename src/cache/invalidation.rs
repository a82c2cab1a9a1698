//! # Invalidation Coordinator
//!
//! Maps write operations to the exact set of cache keys they make stale.
//! Every order-mutating write invalidates with the order and admin scopes;
//! the product scope is added only when stock or catalog data changed.
//! Reads never invalidate.

use uuid::Uuid;

use super::{keys, ResultCache};

/// Scopes affected by a write, resolved to concrete cache keys
#[derive(Debug, Clone, Default)]
pub struct InvalidationRequest {
    pub product: bool,
    pub order: bool,
    pub admin: bool,
    pub user_id: Option<Uuid>,
    pub order_id: Option<Uuid>,
    pub product_ids: Vec<Uuid>,
}

impl InvalidationRequest {
    /// A write to the orders collection on behalf of a user. Order listings
    /// and every admin report go stale.
    pub fn order_write(user_id: Uuid, order_id: Option<Uuid>) -> Self {
        Self {
            order: true,
            admin: true,
            user_id: Some(user_id),
            order_id,
            ..Default::default()
        }
    }

    /// A catalog or stock change. Product listings, the affected product
    /// entries, and every admin report go stale.
    pub fn product_write(product_ids: Vec<Uuid>) -> Self {
        Self {
            product: true,
            admin: true,
            product_ids,
            ..Default::default()
        }
    }

    /// Add the product scope to an existing request (order placement also
    /// decrements stock)
    pub fn with_products(mut self, product_ids: Vec<Uuid>) -> Self {
        self.product = true;
        self.product_ids = product_ids;
        self
    }

    /// Every key this request removes. Scoped keys are emitted only when the
    /// corresponding id is present; an absent id names a key no read path
    /// can ever populate.
    pub fn affected_keys(&self) -> Vec<String> {
        let mut affected = Vec::new();

        if self.product {
            affected.push(keys::LATEST_PRODUCTS.to_string());
            affected.push(keys::CATEGORIES.to_string());
            affected.push(keys::ALL_PRODUCTS.to_string());
            for product_id in &self.product_ids {
                affected.push(keys::product(*product_id));
            }
        }

        if self.order {
            affected.push(keys::ALL_ORDERS.to_string());
            if let Some(user_id) = self.user_id {
                affected.push(keys::my_orders(user_id));
            }
            if let Some(order_id) = self.order_id {
                affected.push(keys::order(order_id));
            }
        }

        if self.admin {
            affected.push(keys::ADMIN_STATS.to_string());
            affected.push(keys::ADMIN_PIE_CHARTS.to_string());
            affected.push(keys::ADMIN_BAR_CHARTS.to_string());
            affected.push(keys::ADMIN_LINE_CHARTS.to_string());
        }

        affected
    }
}

impl ResultCache {
    /// Drop every entry the request names. Writes call this synchronously
    /// before responding, so the next read observes the write.
    pub fn invalidate(&self, request: &InvalidationRequest) -> usize {
        let affected = request.affected_keys();
        let removed = self.delete(&affected);
        tracing::debug!(
            removed,
            product = request.product,
            order = request.order,
            admin = request.admin,
            "cache invalidated"
        );
        removed
    }
}
