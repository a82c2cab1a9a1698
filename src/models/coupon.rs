//! # Coupon Model

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A flat-amount discount code
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coupon {
    pub id: Uuid,
    pub code: String,
    pub amount: i64,
}

/// New coupon for creation (without generated fields)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCoupon {
    pub code: String,
    pub amount: i64,
}

impl NewCoupon {
    pub fn into_coupon(self) -> Coupon {
        Coupon {
            id: Uuid::new_v4(),
            code: self.code,
            amount: self.amount,
        }
    }
}
