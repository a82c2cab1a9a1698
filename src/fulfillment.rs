//! # Order Fulfillment
//!
//! Order placement, status advancement, and deletion. Every mutation ends
//! with a synchronous cache invalidation so the next read recomputes;
//! placement also decrements stock per line item.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::cache::{InvalidationRequest, ResultCache};
use crate::config::StockMode;
use crate::error::{CommerceError, Result};
use crate::models::{NewOrder, Order, OrderItem};
use crate::store::{OrderStore, ProductStore};

/// Executes order lifecycle operations against the document store and keeps
/// the derived-data cache coherent
#[derive(Clone)]
pub struct Fulfillment {
    orders: Arc<dyn OrderStore>,
    products: Arc<dyn ProductStore>,
    cache: Arc<ResultCache>,
    stock_mode: StockMode,
}

impl Fulfillment {
    pub fn new(
        orders: Arc<dyn OrderStore>,
        products: Arc<dyn ProductStore>,
        cache: Arc<ResultCache>,
        stock_mode: StockMode,
    ) -> Self {
        Self {
            orders,
            products,
            cache,
            stock_mode,
        }
    }

    /// Place a new order: validate, persist, decrement stock, invalidate.
    ///
    /// Stock reduction runs after the order is persisted; if it aborts on a
    /// missing product the order is already stored and earlier decrements
    /// stay applied (see `reduce_stock`).
    pub async fn place_order(&self, draft: NewOrder, now: DateTime<Utc>) -> Result<Order> {
        if draft.items.is_empty() {
            return Err(CommerceError::validation("order items are required"));
        }
        if draft.total <= 0 {
            return Err(CommerceError::validation("order total must be positive"));
        }

        let order = self.orders.insert(draft.into_order(now)).await?;
        tracing::info!(
            order_id = %order.id,
            user_id = %order.user_id,
            total = order.total,
            items = order.items.len(),
            "order placed"
        );

        self.reduce_stock(&order.items).await?;

        let product_ids = order.items.iter().map(|item| item.product_id).collect();
        let request =
            InvalidationRequest::order_write(order.user_id, None).with_products(product_ids);
        self.cache.invalidate(&request);

        Ok(order)
    }

    /// Advance an order one fulfillment stage. A delivered order holds its
    /// state and the call still succeeds, so repeated processing requests
    /// are idempotent.
    pub async fn process_order(&self, order_id: Uuid) -> Result<Order> {
        let mut order = self
            .orders
            .find(order_id)
            .await?
            .ok_or_else(|| CommerceError::not_found("order"))?;

        let previous = order.status;
        order.status = order.status.advanced();
        let order = self
            .orders
            .update(order)
            .await?
            .ok_or_else(|| CommerceError::not_found("order"))?;
        tracing::info!(
            order_id = %order.id,
            from = %previous,
            to = %order.status,
            "order processed"
        );

        self.cache
            .invalidate(&InvalidationRequest::order_write(order.user_id, Some(order.id)));
        Ok(order)
    }

    /// Remove an order entirely
    pub async fn delete_order(&self, order_id: Uuid) -> Result<Order> {
        let order = self
            .orders
            .find(order_id)
            .await?
            .ok_or_else(|| CommerceError::not_found("order"))?;
        self.orders.delete(order.id).await?;
        tracing::info!(order_id = %order.id, "order deleted");

        self.cache
            .invalidate(&InvalidationRequest::order_write(order.user_id, Some(order.id)));
        Ok(order)
    }

    /// Decrement stock for each line item.
    ///
    /// Best-effort mode processes items in sequence and the first missing
    /// product aborts the loop with earlier decrements already applied, a
    /// documented consistency gap carried from the storefront's original
    /// behavior. Strict mode verifies every product id up front so a bad
    /// reference decrements nothing. Neither mode clamps stock at zero.
    async fn reduce_stock(&self, items: &[OrderItem]) -> Result<()> {
        if self.stock_mode == StockMode::Strict {
            for item in items {
                if self.products.find(item.product_id).await?.is_none() {
                    return Err(CommerceError::not_found("product"));
                }
            }
        }

        for item in items {
            let mut product = self
                .products
                .find(item.product_id)
                .await?
                .ok_or_else(|| CommerceError::not_found("product"))?;
            product.stock -= item.quantity as i64;
            self.products.update(product).await?;
        }
        Ok(())
    }
}
