//! Shop handlers

use axum::extract::{Path, State};
use axum::Json;
use deals_service::{CreateShopRequest, ShopResponse, ShopService, UpdateShopRequest};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created, NoContent};
use crate::state::AppState;

/// List all shops
///
/// GET /shops
pub async fn list_shops(State(state): State<AppState>) -> ApiResult<Json<Vec<ShopResponse>>> {
    let service = ShopService::new(state.service_context());
    let shops = service.list_shops().await?;
    Ok(Json(shops))
}

/// Shop detail by slug
///
/// GET /shops/{slug}
pub async fn get_shop(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> ApiResult<Json<ShopResponse>> {
    let service = ShopService::new(state.service_context());
    let shop = service.get_shop_by_slug(&slug).await?;
    Ok(Json(shop))
}

/// Create a shop (admin)
///
/// POST /admin/shops
pub async fn create_shop(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateShopRequest>,
) -> ApiResult<Created<Json<ShopResponse>>> {
    let service = ShopService::new(state.service_context());
    let shop = service.create_shop(auth.user_id, request).await?;
    Ok(Created(Json(shop)))
}

/// Update a shop (admin)
///
/// PATCH /admin/shops/{shop_id}
pub async fn update_shop(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(shop_id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateShopRequest>,
) -> ApiResult<Json<ShopResponse>> {
    let shop_id = shop_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid shop_id format"))?;

    let service = ShopService::new(state.service_context());
    let shop = service.update_shop(shop_id, auth.user_id, request).await?;
    Ok(Json(shop))
}

/// Delete a shop (admin)
///
/// DELETE /admin/shops/{shop_id}
pub async fn delete_shop(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(shop_id): Path<String>,
) -> ApiResult<NoContent> {
    let shop_id = shop_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid shop_id format"))?;

    let service = ShopService::new(state.service_context());
    service.delete_shop(shop_id, auth.user_id).await?;
    Ok(NoContent)
}
