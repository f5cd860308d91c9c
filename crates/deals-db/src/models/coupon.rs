//! Coupon database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for coupons table
#[derive(Debug, Clone, FromRow)]
pub struct CouponModel {
    pub id: i64,
    pub shop_id: i64,
    pub code: String,
    pub description: String,
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
