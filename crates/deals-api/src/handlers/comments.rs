//! Comment handlers

use axum::extract::{Path, State};
use axum::Json;
use deals_service::{CommentResponse, CommentService, CreateCommentRequest};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created, NoContent};
use crate::state::AppState;

/// Comment on an approved deal
///
/// POST /deals/{deal_id}/comments
pub async fn create_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(deal_id): Path<String>,
    ValidatedJson(request): ValidatedJson<CreateCommentRequest>,
) -> ApiResult<Created<Json<CommentResponse>>> {
    let deal_id = deal_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid deal_id format"))?;

    let service = CommentService::new(state.service_context());
    let comment = service.create_comment(deal_id, auth.user_id, request).await?;
    Ok(Created(Json(comment)))
}

/// List comments on a deal, oldest first
///
/// GET /deals/{deal_id}/comments
pub async fn list_comments(
    State(state): State<AppState>,
    Path(deal_id): Path<String>,
) -> ApiResult<Json<Vec<CommentResponse>>> {
    let deal_id = deal_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid deal_id format"))?;

    let service = CommentService::new(state.service_context());
    let comments = service.list_comments(deal_id).await?;
    Ok(Json(comments))
}

/// Delete a comment (author or admin)
///
/// DELETE /comments/{comment_id}
pub async fn delete_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(comment_id): Path<String>,
) -> ApiResult<NoContent> {
    let comment_id = comment_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid comment_id format"))?;

    let service = CommentService::new(state.service_context());
    service.delete_comment(comment_id, auth.user_id).await?;
    Ok(NoContent)
}
