//! Coupon entity - a discount code attached to a shop

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Coupon entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coupon {
    pub id: Snowflake,
    pub shop_id: Snowflake,
    pub code: String,
    pub description: String,
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Coupon {
    pub fn new(id: Snowflake, shop_id: Snowflake, code: String, description: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            shop_id,
            code,
            description,
            expires_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// A coupon without an expiry never expires
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|at| at <= now)
    }
}
