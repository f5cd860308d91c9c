//! Deal database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for deals table
#[derive(Debug, Clone, FromRow)]
pub struct DealModel {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub url: String,
    pub original_price: i64,
    pub discounted_price: i64,
    pub discount_percentage: i32,
    pub shop_id: i64,
    pub category_id: i64,
    pub tags: Vec<String>,
    pub status: String,
    pub submitter_id: i64,
    pub upvotes: i64,
    pub downvotes: i64,
    pub heat_score: i64,
    pub views: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Cached counter columns, as returned by the vote transaction
#[derive(Debug, Clone, Copy, FromRow)]
pub struct DealCountersModel {
    pub upvotes: i64,
    pub downvotes: i64,
    pub heat_score: i64,
}
