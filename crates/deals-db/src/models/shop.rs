//! Shop database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for shops table
#[derive(Debug, Clone, FromRow)]
pub struct ShopModel {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub website_url: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
