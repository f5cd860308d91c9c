//! Comment service
//!
//! Flat comments on approved deals. `parent_id` is stored as referential
//! nesting only; no tree assembly happens server-side.

use deals_core::entities::{Comment, MAX_COMMENT_LEN};
use deals_core::error::DomainError;
use deals_core::value_objects::Snowflake;
use tracing::{info, instrument};

use crate::dto::{CommentResponse, CreateCommentRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::require_admin;

/// Comment service
pub struct CommentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommentService<'a> {
    /// Create a new CommentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Comment on an approved deal
    #[instrument(skip(self, request))]
    pub async fn create_comment(
        &self,
        deal_id: Snowflake,
        author_id: Snowflake,
        request: CreateCommentRequest,
    ) -> ServiceResult<CommentResponse> {
        let deal = self
            .ctx
            .deal_repo()
            .find_by_id(deal_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Deal", deal_id.to_string()))?;

        if !deal.is_approved() {
            return Err(ServiceError::Domain(DomainError::DealNotApproved));
        }

        if request.content.trim().is_empty() {
            return Err(ServiceError::validation("Comment cannot be empty"));
        }
        if request.content.chars().count() > MAX_COMMENT_LEN {
            return Err(ServiceError::Domain(DomainError::ContentTooLong {
                max: MAX_COMMENT_LEN,
            }));
        }

        // A reply must target a comment on the same deal
        if let Some(parent_id) = request.parent_id {
            let parent = self
                .ctx
                .comment_repo()
                .find_by_id(parent_id)
                .await?
                .ok_or_else(|| ServiceError::not_found("Comment", parent_id.to_string()))?;
            if parent.deal_id != deal_id {
                return Err(ServiceError::not_found("Comment", parent_id.to_string()));
            }
        }

        let comment = Comment::new(
            self.ctx.generate_id(),
            deal_id,
            author_id,
            request.parent_id,
            request.content,
        );

        self.ctx.comment_repo().create(&comment).await?;

        info!(comment_id = %comment.id, deal_id = %deal_id, author_id = %author_id, "Comment created");

        Ok(CommentResponse::from(&comment))
    }

    /// All comments on a deal, oldest first
    #[instrument(skip(self))]
    pub async fn list_comments(&self, deal_id: Snowflake) -> ServiceResult<Vec<CommentResponse>> {
        self.ctx
            .deal_repo()
            .find_by_id(deal_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Deal", deal_id.to_string()))?;

        let comments = self.ctx.comment_repo().find_by_deal(deal_id).await?;

        Ok(comments.iter().map(CommentResponse::from).collect())
    }

    /// Delete a comment; allowed for the author and admins
    #[instrument(skip(self))]
    pub async fn delete_comment(
        &self,
        comment_id: Snowflake,
        actor_id: Snowflake,
    ) -> ServiceResult<()> {
        let comment = self
            .ctx
            .comment_repo()
            .find_by_id(comment_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Comment", comment_id.to_string()))?;

        if comment.author_id != actor_id {
            require_admin(self.ctx, actor_id).await?;
        }

        self.ctx.comment_repo().delete(comment_id).await?;

        info!(comment_id = %comment_id, actor_id = %actor_id, "Comment deleted");
        Ok(())
    }
}
