//! PostgreSQL implementation of CommentRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use deals_core::entities::Comment;
use deals_core::traits::{CommentRepository, RepoResult};
use deals_core::value_objects::Snowflake;

use crate::models::CommentModel;

use super::error::{comment_not_found, map_db_error};

/// PostgreSQL implementation of CommentRepository
#[derive(Clone)]
pub struct PgCommentRepository {
    pool: PgPool,
}

impl PgCommentRepository {
    /// Create a new PgCommentRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Comment>> {
        let result = sqlx::query_as::<_, CommentModel>(
            r"
            SELECT id, deal_id, author_id, parent_id, content, created_at
            FROM comments
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Comment::from))
    }

    #[instrument(skip(self))]
    async fn find_by_deal(&self, deal_id: Snowflake) -> RepoResult<Vec<Comment>> {
        let results = sqlx::query_as::<_, CommentModel>(
            r"
            SELECT id, deal_id, author_id, parent_id, content, created_at
            FROM comments
            WHERE deal_id = $1
            ORDER BY created_at
            ",
        )
        .bind(deal_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Comment::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, comment: &Comment) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO comments (id, deal_id, author_id, parent_id, content, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(comment.id.into_inner())
        .bind(comment.deal_id.into_inner())
        .bind(comment.author_id.into_inner())
        .bind(comment.parent_id.map(Snowflake::into_inner))
        .bind(&comment.content)
        .bind(comment.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM comments WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(comment_not_found(id));
        }
        Ok(())
    }
}
