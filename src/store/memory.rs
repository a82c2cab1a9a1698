//! # In-Memory Document Store
//!
//! Backs the storage seam with dashmap collections. Every query method
//! produces deterministic ordering (creation time, then id) so repeated
//! reads over unchanged data serialize identically.

use dashmap::DashMap;
use std::collections::BTreeSet;
use uuid::Uuid;

use async_trait::async_trait;

use super::{
    CouponStore, DateRange, OrderStore, PriceSort, ProductQuery, ProductStore, StoreResult,
    UserStore, PRODUCTS_PER_PAGE,
};
use crate::models::{Coupon, Gender, Order, OrderStatus, Product, Role, User};

/// Process-local document store holding every collection
#[derive(Debug, Default)]
pub struct MemoryStore {
    products: DashMap<Uuid, Product>,
    users: DashMap<Uuid, User>,
    orders: DashMap<Uuid, Order>,
    coupons: DashMap<Uuid, Coupon>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All products matching the search filters, unsorted and unpaged
    fn matching_products(&self, query: &ProductQuery) -> Vec<Product> {
        let needle = query.search.as_deref().map(str::to_lowercase);

        self.products
            .iter()
            .map(|e| e.value().clone())
            .filter(|p| match &needle {
                Some(needle) => p.name.to_lowercase().contains(needle),
                None => true,
            })
            .filter(|p| query.price.map_or(true, |max| p.price <= max))
            .filter(|p| query.category.as_deref().map_or(true, |c| p.category == c))
            .collect()
    }
}

fn sorted_products(mut records: Vec<Product>) -> Vec<Product> {
    records.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
    records
}

fn sorted_users(mut records: Vec<User>) -> Vec<User> {
    records.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
    records
}

fn sorted_orders(mut records: Vec<Order>) -> Vec<Order> {
    records.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
    records
}

#[async_trait]
impl ProductStore for MemoryStore {
    async fn insert(&self, product: Product) -> StoreResult<Product> {
        self.products.insert(product.id, product.clone());
        Ok(product)
    }

    async fn find(&self, id: Uuid) -> StoreResult<Option<Product>> {
        Ok(self.products.get(&id).map(|entry| entry.value().clone()))
    }

    async fn update(&self, product: Product) -> StoreResult<Option<Product>> {
        if !self.products.contains_key(&product.id) {
            return Ok(None);
        }
        self.products.insert(product.id, product.clone());
        Ok(Some(product))
    }

    async fn delete(&self, id: Uuid) -> StoreResult<bool> {
        Ok(self.products.remove(&id).is_some())
    }

    async fn all(&self) -> StoreResult<Vec<Product>> {
        Ok(sorted_products(
            self.products.iter().map(|e| e.value().clone()).collect(),
        ))
    }

    async fn latest(&self, limit: usize) -> StoreResult<Vec<Product>> {
        let mut records = sorted_products(self.products.iter().map(|e| e.value().clone()).collect());
        records.reverse();
        records.truncate(limit);
        Ok(records)
    }

    async fn created_between(&self, range: &DateRange) -> StoreResult<Vec<Product>> {
        Ok(sorted_products(
            self.products
                .iter()
                .filter(|e| range.contains(e.value().created_at))
                .map(|e| e.value().clone())
                .collect(),
        ))
    }

    async fn count(&self) -> StoreResult<u64> {
        Ok(self.products.len() as u64)
    }

    async fn count_in_category(&self, category: &str) -> StoreResult<u64> {
        Ok(self
            .products
            .iter()
            .filter(|e| e.value().category == category)
            .count() as u64)
    }

    async fn count_out_of_stock(&self) -> StoreResult<u64> {
        Ok(self
            .products
            .iter()
            .filter(|e| e.value().is_out_of_stock())
            .count() as u64)
    }

    async fn distinct_categories(&self) -> StoreResult<Vec<String>> {
        let categories: BTreeSet<String> = self
            .products
            .iter()
            .map(|e| e.value().category.clone())
            .collect();
        Ok(categories.into_iter().collect())
    }

    async fn search(&self, query: &ProductQuery) -> StoreResult<Vec<Product>> {
        let mut results = sorted_products(self.matching_products(query));
        match query.sort {
            Some(PriceSort::Asc) => results.sort_by_key(|p| p.price),
            Some(PriceSort::Desc) => results.sort_by_key(|p| std::cmp::Reverse(p.price)),
            None => {}
        }

        let page = query.page.unwrap_or(1).max(1) as usize;
        Ok(results
            .into_iter()
            .skip((page - 1) * PRODUCTS_PER_PAGE)
            .take(PRODUCTS_PER_PAGE)
            .collect())
    }

    async fn search_count(&self, query: &ProductQuery) -> StoreResult<u64> {
        Ok(self.matching_products(query).len() as u64)
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn insert(&self, user: User) -> StoreResult<User> {
        self.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find(&self, id: Uuid) -> StoreResult<Option<User>> {
        Ok(self.users.get(&id).map(|entry| entry.value().clone()))
    }

    async fn delete(&self, id: Uuid) -> StoreResult<bool> {
        Ok(self.users.remove(&id).is_some())
    }

    async fn all(&self) -> StoreResult<Vec<User>> {
        Ok(sorted_users(
            self.users.iter().map(|e| e.value().clone()).collect(),
        ))
    }

    async fn created_between(&self, range: &DateRange) -> StoreResult<Vec<User>> {
        Ok(sorted_users(
            self.users
                .iter()
                .filter(|e| range.contains(e.value().created_at))
                .map(|e| e.value().clone())
                .collect(),
        ))
    }

    async fn count(&self) -> StoreResult<u64> {
        Ok(self.users.len() as u64)
    }

    async fn count_by_gender(&self, gender: Gender) -> StoreResult<u64> {
        Ok(self
            .users
            .iter()
            .filter(|e| e.value().gender == gender)
            .count() as u64)
    }

    async fn count_by_role(&self, role: Role) -> StoreResult<u64> {
        Ok(self.users.iter().filter(|e| e.value().role == role).count() as u64)
    }
}

#[async_trait]
impl OrderStore for MemoryStore {
    async fn insert(&self, order: Order) -> StoreResult<Order> {
        self.orders.insert(order.id, order.clone());
        Ok(order)
    }

    async fn find(&self, id: Uuid) -> StoreResult<Option<Order>> {
        Ok(self.orders.get(&id).map(|entry| entry.value().clone()))
    }

    async fn update(&self, order: Order) -> StoreResult<Option<Order>> {
        if !self.orders.contains_key(&order.id) {
            return Ok(None);
        }
        self.orders.insert(order.id, order.clone());
        Ok(Some(order))
    }

    async fn delete(&self, id: Uuid) -> StoreResult<bool> {
        Ok(self.orders.remove(&id).is_some())
    }

    async fn all(&self) -> StoreResult<Vec<Order>> {
        Ok(sorted_orders(
            self.orders.iter().map(|e| e.value().clone()).collect(),
        ))
    }

    async fn for_user(&self, user_id: Uuid) -> StoreResult<Vec<Order>> {
        Ok(sorted_orders(
            self.orders
                .iter()
                .filter(|e| e.value().user_id == user_id)
                .map(|e| e.value().clone())
                .collect(),
        ))
    }

    async fn created_between(&self, range: &DateRange) -> StoreResult<Vec<Order>> {
        Ok(sorted_orders(
            self.orders
                .iter()
                .filter(|e| range.contains(e.value().created_at))
                .map(|e| e.value().clone())
                .collect(),
        ))
    }

    async fn count_by_status(&self, status: OrderStatus) -> StoreResult<u64> {
        Ok(self
            .orders
            .iter()
            .filter(|e| e.value().status == status)
            .count() as u64)
    }

    async fn latest(&self, limit: usize) -> StoreResult<Vec<Order>> {
        let mut records = sorted_orders(self.orders.iter().map(|e| e.value().clone()).collect());
        records.reverse();
        records.truncate(limit);
        Ok(records)
    }
}

#[async_trait]
impl CouponStore for MemoryStore {
    async fn insert(&self, coupon: Coupon) -> StoreResult<Coupon> {
        self.coupons.insert(coupon.id, coupon.clone());
        Ok(coupon)
    }

    async fn find(&self, id: Uuid) -> StoreResult<Option<Coupon>> {
        Ok(self.coupons.get(&id).map(|entry| entry.value().clone()))
    }

    async fn find_by_code(&self, code: &str) -> StoreResult<Option<Coupon>> {
        Ok(self
            .coupons
            .iter()
            .find(|e| e.value().code == code)
            .map(|e| e.value().clone()))
    }

    async fn all(&self) -> StoreResult<Vec<Coupon>> {
        let mut records: Vec<Coupon> = self.coupons.iter().map(|e| e.value().clone()).collect();
        records.sort_by(|a, b| a.code.cmp(&b.code).then(a.id.cmp(&b.id)));
        Ok(records)
    }

    async fn delete(&self, id: Uuid) -> StoreResult<bool> {
        Ok(self.coupons.remove(&id).is_some())
    }
}
