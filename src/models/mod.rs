//! # Domain Models
//!
//! Commerce records held in the document store and served over the API.
//! Analytics payload types live in `analytics::assembler`; these are the
//! source records the assemblers aggregate over.

use chrono::{DateTime, Utc};

pub mod coupon;
pub mod order;
pub mod product;
pub mod user;

// Re-export core models for easy access
pub use coupon::{Coupon, NewCoupon};
pub use order::{NewOrder, Order, OrderItem, OrderStatus, ShippingInfo};
pub use product::{NewProduct, Product, ProductUpdate};
pub use user::{Gender, NewUser, Role, User};

/// Record carrying a creation timestamp, consumed by the chart binning engine.
pub trait TimeStamped {
    fn created_at(&self) -> DateTime<Utc>;
}
