//! # Product Model
//!
//! Catalog records with purchasable stock. Stock is signed because order
//! placement applies best-effort decrements without clamping (see
//! `fulfillment`); a burst of concurrent orders can briefly oversell.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::TimeStamped;

/// A catalog entry available for purchase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub photo: String,
    pub price: i64,
    pub stock: i64,
    pub category: String,
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Whether the product should count toward the out-of-stock total
    pub fn is_out_of_stock(&self) -> bool {
        self.stock <= 0
    }
}

impl TimeStamped for Product {
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// New product for creation (without generated fields)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub photo: String,
    pub price: i64,
    pub stock: i64,
    pub category: String,
}

impl NewProduct {
    /// Materialize a full record with a generated id and creation timestamp.
    /// Categories are normalized to lowercase so distinct-category queries
    /// treat "Laptop" and "laptop" as one bucket.
    pub fn into_product(self, now: DateTime<Utc>) -> Product {
        Product {
            id: Uuid::new_v4(),
            name: self.name,
            photo: self.photo,
            price: self.price,
            stock: self.stock,
            category: self.category.to_lowercase(),
            created_at: now,
        }
    }
}

/// Partial update applied to an existing product
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub photo: Option<String>,
    pub price: Option<i64>,
    pub stock: Option<i64>,
    pub category: Option<String>,
}

impl Product {
    /// Apply the present fields of a partial update in place
    pub fn apply(&mut self, update: ProductUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(photo) = update.photo {
            self.photo = photo;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(stock) = update.stock {
            self.stock = stock;
        }
        if let Some(category) = update.category {
            self.category = category.to_lowercase();
        }
    }
}
