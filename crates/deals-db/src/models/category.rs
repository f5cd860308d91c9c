//! Category database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for categories table
#[derive(Debug, Clone, FromRow)]
pub struct CategoryModel {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
