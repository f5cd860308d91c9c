//! Comment entity <-> model mapper

use deals_core::entities::Comment;
use deals_core::value_objects::Snowflake;

use crate::models::CommentModel;

impl From<CommentModel> for Comment {
    fn from(model: CommentModel) -> Self {
        Comment {
            id: Snowflake::new(model.id),
            deal_id: Snowflake::new(model.deal_id),
            author_id: Snowflake::new(model.author_id),
            parent_id: model.parent_id.map(Snowflake::new),
            content: model.content,
            created_at: model.created_at,
        }
    }
}
