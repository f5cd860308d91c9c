//! Shop entity - a merchant deals are posted for

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Shop entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shop {
    pub id: Snowflake,
    pub name: String,
    /// URL-safe identifier, unique across shops
    pub slug: String,
    pub website_url: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Shop {
    pub fn new(id: Snowflake, name: String, slug: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            slug,
            website_url: None,
            description: None,
            created_at: now,
            updated_at: now,
        }
    }
}
