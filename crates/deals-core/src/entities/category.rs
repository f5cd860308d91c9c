//! Category entity - a browsing section for deals

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Category entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: Snowflake,
    pub name: String,
    /// URL-safe identifier, unique across categories
    pub slug: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Category {
    pub fn new(id: Snowflake, name: String, slug: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            slug,
            description: None,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_creation() {
        let category = Category::new(
            Snowflake::new(1),
            "Electronics".to_string(),
            "electronics".to_string(),
        );
        assert_eq!(category.name, "Electronics");
        assert_eq!(category.slug, "electronics");
    }
}
