//! # Order Model
//!
//! Orders and their fulfillment status. Status progression is strictly
//! linear: `Processing` → `Shipped` → `Delivered`, one step per processing
//! request, with `Delivered` terminal. Advancing a delivered order is a
//! no-op that still reports success, so repeated processing requests are
//! idempotent.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::TimeStamped;
use crate::error::CommerceError;

/// Fulfillment stage of an order.
///
/// Serialized with capitalized variant names (`"Processing"`) because that is
/// the wire format the storefront clients already consume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum OrderStatus {
    #[default]
    Processing,
    Shipped,
    Delivered,
}

impl OrderStatus {
    /// Next stage in the linear progression; `Delivered` holds
    pub fn advanced(self) -> Self {
        match self {
            Self::Processing => Self::Shipped,
            Self::Shipped => Self::Delivered,
            Self::Delivered => Self::Delivered,
        }
    }

    /// Terminal states admit no further transitions
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Delivered)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Processing => "Processing",
            Self::Shipped => "Shipped",
            Self::Delivered => "Delivered",
        };
        write!(f, "{s}")
    }
}

impl FromStr for OrderStatus {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Processing" | "processing" => Ok(Self::Processing),
            "Shipped" | "shipped" => Ok(Self::Shipped),
            "Delivered" | "delivered" => Ok(Self::Delivered),
            other => Err(CommerceError::validation(format!(
                "unknown order status: {other}"
            ))),
        }
    }
}

/// Delivery destination captured at checkout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingInfo {
    pub address: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub pin_code: u32,
}

/// One purchased line item. Price and photo are denormalized copies taken at
/// checkout so the order renders stably after catalog edits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: Uuid,
    pub name: String,
    pub photo: String,
    pub price: i64,
    pub quantity: u32,
}

/// A placed order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: Uuid,
    pub user_id: Uuid,
    pub shipping_info: ShippingInfo,
    pub items: Vec<OrderItem>,
    pub subtotal: i64,
    pub tax: i64,
    pub shipping_charges: i64,
    pub discount: i64,
    pub total: i64,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

impl TimeStamped for Order {
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// New order for placement (without generated fields)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    pub user_id: Uuid,
    pub shipping_info: ShippingInfo,
    pub items: Vec<OrderItem>,
    pub subtotal: i64,
    pub tax: i64,
    #[serde(default)]
    pub shipping_charges: i64,
    #[serde(default)]
    pub discount: i64,
    pub total: i64,
}

impl NewOrder {
    pub fn into_order(self, now: DateTime<Utc>) -> Order {
        Order {
            id: Uuid::new_v4(),
            user_id: self.user_id,
            shipping_info: self.shipping_info,
            items: self.items,
            subtotal: self.subtotal,
            tax: self.tax,
            shipping_charges: self.shipping_charges,
            discount: self.discount,
            total: self.total,
            status: OrderStatus::default(),
            created_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_progression() {
        let status = OrderStatus::Processing;
        let shipped = status.advanced();
        let delivered = shipped.advanced();

        assert_eq!(shipped, OrderStatus::Shipped);
        assert_eq!(delivered, OrderStatus::Delivered);
    }

    #[test]
    fn test_delivered_is_terminal_and_holds() {
        let status = OrderStatus::Delivered;
        assert!(status.is_terminal());
        assert_eq!(status.advanced(), OrderStatus::Delivered);
    }

    #[test]
    fn test_non_terminal_states() {
        assert!(!OrderStatus::Processing.is_terminal());
        assert!(!OrderStatus::Shipped.is_terminal());
    }

    #[test]
    fn test_wire_format_is_capitalized() {
        let json = serde_json::to_string(&OrderStatus::Processing).unwrap();
        assert_eq!(json, "\"Processing\"");

        let parsed: OrderStatus = serde_json::from_str("\"Delivered\"").unwrap();
        assert_eq!(parsed, OrderStatus::Delivered);
    }

    #[test]
    fn test_from_str_accepts_both_casings() {
        assert_eq!(
            "Shipped".parse::<OrderStatus>().unwrap(),
            OrderStatus::Shipped
        );
        assert_eq!(
            "shipped".parse::<OrderStatus>().unwrap(),
            OrderStatus::Shipped
        );
        assert!("Cancelled".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn test_new_order_defaults() {
        let draft = NewOrder {
            user_id: Uuid::new_v4(),
            shipping_info: ShippingInfo {
                address: "12 Harbor Lane".to_string(),
                city: "Pune".to_string(),
                state: "MH".to_string(),
                country: "India".to_string(),
                pin_code: 411001,
            },
            items: vec![],
            subtotal: 1000,
            tax: 180,
            shipping_charges: 0,
            discount: 0,
            total: 1180,
        };

        let order = draft.into_order(Utc::now());
        assert_eq!(order.status, OrderStatus::Processing);
        assert_eq!(order.total, 1180);
    }

    #[test]
    fn test_wire_casing_for_nested_fields() {
        let json = serde_json::to_value(ShippingInfo {
            address: "a".to_string(),
            city: "b".to_string(),
            state: "c".to_string(),
            country: "d".to_string(),
            pin_code: 1,
        })
        .unwrap();
        assert!(json.get("pinCode").is_some());
    }
}
