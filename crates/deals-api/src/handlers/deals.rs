//! Deal handlers
//!
//! Public browsing and submission, plus the admin moderation queue.

use axum::extract::{Path, Query, State};
use axum::Json;
use deals_core::entities::DealStatus;
use deals_core::traits::DealSort;
use deals_service::{DealListQuery, DealResponse, DealService, SubmitDealRequest, UpdateDealRequest};
use serde::Deserialize;

use crate::extractors::{AuthUser, OptionalAuthUser, Pagination, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created, NoContent};
use crate::state::AppState;

/// Filter parameters for the public deal listing
#[derive(Debug, Deserialize)]
pub struct DealListParams {
    #[serde(default)]
    pub sort: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub shop: Option<String>,
    #[serde(default)]
    pub tag: Option<String>,
}

fn parse_sort(value: Option<&str>) -> Result<DealSort, ApiError> {
    match value {
        None | Some("hot") => Ok(DealSort::Hot),
        Some("newest") => Ok(DealSort::Newest),
        Some("discount") => Ok(DealSort::Discount),
        Some("price") => Ok(DealSort::Price),
        Some(other) => Err(ApiError::invalid_query(format!("Unknown sort mode: {other}"))),
    }
}

/// List approved deals
///
/// GET /deals?sort=hot&category=...&shop=...&tag=...&limit=...&offset=...
pub async fn list_deals(
    State(state): State<AppState>,
    Query(params): Query<DealListParams>,
    pagination: Pagination,
) -> ApiResult<Json<Vec<DealResponse>>> {
    let sort = parse_sort(params.sort.as_deref())?;

    let category_id = params
        .category
        .map(|s| s.parse())
        .transpose()
        .map_err(|_| ApiError::invalid_query("Invalid category id"))?;
    let shop_id = params
        .shop
        .map(|s| s.parse())
        .transpose()
        .map_err(|_| ApiError::invalid_query("Invalid shop id"))?;

    let service = DealService::new(state.service_context());
    let deals = service
        .list_deals(DealListQuery {
            category_id,
            shop_id,
            tag: params.tag,
            sort,
            limit: pagination.limit,
            offset: pagination.offset,
        })
        .await?;

    Ok(Json(deals))
}

/// Deal detail (bumps the view counter)
///
/// GET /deals/{deal_id}
pub async fn get_deal(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    Path(deal_id): Path<String>,
) -> ApiResult<Json<DealResponse>> {
    let deal_id = deal_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid deal_id format"))?;

    let service = DealService::new(state.service_context());
    let deal = service.get_deal(deal_id, auth.user_id()).await?;
    Ok(Json(deal))
}

/// Submit a new deal
///
/// POST /deals
pub async fn submit_deal(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<SubmitDealRequest>,
) -> ApiResult<Created<Json<DealResponse>>> {
    let service = DealService::new(state.service_context());
    let deal = service.submit_deal(auth.user_id, request).await?;
    Ok(Created(Json(deal)))
}

/// Update a deal (submitter or admin)
///
/// PATCH /deals/{deal_id}
pub async fn update_deal(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(deal_id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateDealRequest>,
) -> ApiResult<Json<DealResponse>> {
    let deal_id = deal_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid deal_id format"))?;

    let service = DealService::new(state.service_context());
    let deal = service.update_deal(deal_id, auth.user_id, request).await?;
    Ok(Json(deal))
}

// ============================================================================
// Moderation (admin)
// ============================================================================

/// Status filter for the moderation queue
#[derive(Debug, Deserialize)]
pub struct ModerationParams {
    #[serde(default)]
    pub status: Option<String>,
}

/// Moderation queue listing
///
/// GET /admin/deals?status=pending
pub async fn list_deals_for_moderation(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<ModerationParams>,
    pagination: Pagination,
) -> ApiResult<Json<Vec<DealResponse>>> {
    let status = match params.status.as_deref() {
        None => None,
        Some(s) => Some(
            DealStatus::parse(s)
                .ok_or_else(|| ApiError::invalid_query(format!("Unknown status: {s}")))?,
        ),
    };

    let service = DealService::new(state.service_context());
    let deals = service
        .list_deals_for_moderation(auth.user_id, status, pagination.limit, pagination.offset)
        .await?;

    Ok(Json(deals))
}

/// Approve a pending deal
///
/// POST /admin/deals/{deal_id}/approve
pub async fn approve_deal(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(deal_id): Path<String>,
) -> ApiResult<NoContent> {
    let deal_id = deal_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid deal_id format"))?;

    let service = DealService::new(state.service_context());
    service.approve_deal(deal_id, auth.user_id).await?;
    Ok(NoContent)
}

/// Reject a pending deal
///
/// POST /admin/deals/{deal_id}/reject
pub async fn reject_deal(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(deal_id): Path<String>,
) -> ApiResult<NoContent> {
    let deal_id = deal_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid deal_id format"))?;

    let service = DealService::new(state.service_context());
    service.reject_deal(deal_id, auth.user_id).await?;
    Ok(NoContent)
}

/// Delete a deal
///
/// DELETE /admin/deals/{deal_id}
pub async fn delete_deal(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(deal_id): Path<String>,
) -> ApiResult<NoContent> {
    let deal_id = deal_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid deal_id format"))?;

    let service = DealService::new(state.service_context());
    service.delete_deal(deal_id, auth.user_id).await?;
    Ok(NoContent)
}
