//! Vote service
//!
//! The vote-operation boundary: cast/change/retract votes, look up the
//! caller's vote state, and trigger counter recounts. The caller identity
//! is always an explicit `user_id` resolved upstream; nothing here reads
//! ambient auth state.

use deals_core::error::DomainError;
use deals_core::value_objects::{Snowflake, VoteDirection};
use tracing::{error, info, instrument};

use crate::dto::{VoteReceiptResponse, VoteStateResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::require_admin;

/// Vote service
pub struct VoteService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> VoteService<'a> {
    /// Create a new VoteService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Apply a vote action for an authenticated user.
    ///
    /// The repository runs the ledger lookup, transition resolution, ledger
    /// write, and counter update as one transaction; this layer only
    /// normalizes the error surface and logs the applied transition.
    #[instrument(skip(self))]
    pub async fn cast_vote(
        &self,
        deal_id: Snowflake,
        user_id: Snowflake,
        direction: VoteDirection,
    ) -> ServiceResult<VoteReceiptResponse> {
        let outcome = self
            .ctx
            .vote_repo()
            .cast(deal_id, user_id, direction)
            .await
            .map_err(|e| match e {
                // Storage detail must not cross the vote boundary
                DomainError::DatabaseError(detail) => {
                    error!(deal_id = %deal_id, user_id = %user_id, detail = %detail,
                        "Vote transaction surfaced a storage error");
                    ServiceError::Domain(DomainError::VoteFailed)
                }
                other => ServiceError::Domain(other),
            })?;

        info!(
            deal_id = %deal_id,
            user_id = %user_id,
            action = outcome.transition.kind(),
            heat_score = outcome.counters.heat_score,
            "Vote applied"
        );

        Ok(VoteReceiptResponse::from_outcome(deal_id, &outcome))
    }

    /// The caller's current vote on a deal (`up` | `down` | null)
    #[instrument(skip(self))]
    pub async fn get_vote_state(
        &self,
        deal_id: Snowflake,
        user_id: Snowflake,
    ) -> ServiceResult<VoteStateResponse> {
        // Missing deal is NotFound, not an empty vote state
        self.ctx
            .deal_repo()
            .find_by_id(deal_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Deal", deal_id.to_string()))?;

        let vote = self.ctx.vote_repo().find(deal_id, user_id).await?;

        Ok(VoteStateResponse::new(deal_id, vote.map(|v| v.direction)))
    }

    /// Recompute a deal's cached counters from the full ledger (admin only)
    #[instrument(skip(self))]
    pub async fn recount(
        &self,
        deal_id: Snowflake,
        actor_id: Snowflake,
    ) -> ServiceResult<VoteReceiptResponse> {
        require_admin(self.ctx, actor_id).await?;

        let counters = self.ctx.vote_repo().recount(deal_id).await?;

        info!(
            deal_id = %deal_id,
            actor_id = %actor_id,
            heat_score = counters.heat_score,
            "Counters recounted from ledger"
        );

        Ok(VoteReceiptResponse {
            deal_id: deal_id.to_string(),
            action: "recounted".to_string(),
            user_vote: None,
            upvotes: counters.upvotes,
            downvotes: counters.downvotes,
            heat_score: counters.heat_score,
        })
    }
}
