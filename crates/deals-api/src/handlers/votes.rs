//! Vote handlers
//!
//! Casting/changing/retracting votes, the caller's vote state, and the
//! admin counter recount. All vote routes require authentication; the
//! extractor rejects anonymous callers with 401 before the service runs.

use axum::extract::{Path, State};
use axum::Json;
use deals_service::{CastVoteRequest, VoteReceiptResponse, VoteService, VoteStateResponse};

use crate::extractors::AuthUser;
use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

/// Cast, change, or retract a vote. Re-selecting the current direction
/// retracts it (toggle semantics).
///
/// POST /deals/{deal_id}/vote
pub async fn cast_vote(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(deal_id): Path<String>,
    Json(request): Json<CastVoteRequest>,
) -> ApiResult<Json<VoteReceiptResponse>> {
    let deal_id = deal_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid deal_id format"))?;

    let service = VoteService::new(state.service_context());
    let receipt = service
        .cast_vote(deal_id, auth.user_id, request.direction)
        .await?;
    Ok(Json(receipt))
}

/// The caller's current vote on a deal
///
/// GET /deals/{deal_id}/vote
pub async fn get_vote_state(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(deal_id): Path<String>,
) -> ApiResult<Json<VoteStateResponse>> {
    let deal_id = deal_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid deal_id format"))?;

    let service = VoteService::new(state.service_context());
    let vote_state = service.get_vote_state(deal_id, auth.user_id).await?;
    Ok(Json(vote_state))
}

/// Recompute a deal's cached counters from the ledger (admin)
///
/// POST /admin/deals/{deal_id}/recount
pub async fn recount(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(deal_id): Path<String>,
) -> ApiResult<Json<VoteReceiptResponse>> {
    let deal_id = deal_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid deal_id format"))?;

    let service = VoteService::new(state.service_context());
    let receipt = service.recount(deal_id, auth.user_id).await?;
    Ok(Json(receipt))
}
