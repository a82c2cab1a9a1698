//! Cache key names shared by the read paths and the invalidation
//! coordinator. Key text is part of the system contract: the coordinator
//! computes eviction sets from these same constants and formatters, so a
//! read path inventing its own key would never be invalidated.

use uuid::Uuid;

pub const ADMIN_STATS: &str = "admin-stats";
pub const ADMIN_PIE_CHARTS: &str = "admin-pie-charts";
pub const ADMIN_BAR_CHARTS: &str = "admin-bar-charts";
pub const ADMIN_LINE_CHARTS: &str = "admin-line-charts";

pub const LATEST_PRODUCTS: &str = "latest-product";
pub const CATEGORIES: &str = "categories";
pub const ALL_PRODUCTS: &str = "all-products";

pub const ALL_ORDERS: &str = "all-orders";

/// Key for one user's order listing
pub fn my_orders(user_id: Uuid) -> String {
    format!("my-orders-{user_id}")
}

/// Key for a single order
pub fn order(order_id: Uuid) -> String {
    format!("order-{order_id}")
}

/// Key for a single product
pub fn product(product_id: Uuid) -> String {
    format!("products-{product_id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scoped_key_formats() {
        let id = Uuid::nil();
        assert_eq!(
            my_orders(id),
            "my-orders-00000000-0000-0000-0000-000000000000"
        );
        assert_eq!(order(id), "order-00000000-0000-0000-0000-000000000000");
        assert_eq!(product(id), "products-00000000-0000-0000-0000-000000000000");
    }
}
