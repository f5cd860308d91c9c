//! Comment entity - a user comment on a deal

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Maximum comment length in characters
pub const MAX_COMMENT_LEN: usize = 2000;

/// Comment entity
///
/// `parent_id` records referential nesting only; tree assembly is a display
/// concern and happens client-side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: Snowflake,
    pub deal_id: Snowflake,
    pub author_id: Snowflake,
    pub parent_id: Option<Snowflake>,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn new(
        id: Snowflake,
        deal_id: Snowflake,
        author_id: Snowflake,
        parent_id: Option<Snowflake>,
        content: String,
    ) -> Self {
        Self {
            id,
            deal_id,
            author_id,
            parent_id,
            content,
            created_at: Utc::now(),
        }
    }

    #[inline]
    pub fn is_reply(&self) -> bool {
        self.parent_id.is_some()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.content.trim().is_empty()
    }
}
