//! Coupon handlers

use axum::extract::{Path, State};
use axum::Json;
use deals_service::{CouponResponse, CouponService, CreateCouponRequest, UpdateCouponRequest};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created, NoContent};
use crate::state::AppState;

/// Active coupons for a shop
///
/// GET /shops/{slug}/coupons
pub async fn list_shop_coupons(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> ApiResult<Json<Vec<CouponResponse>>> {
    let service = CouponService::new(state.service_context());
    let coupons = service.list_coupons_by_slug(&slug).await?;
    Ok(Json(coupons))
}

/// All coupons for a shop, expired included (admin)
///
/// GET /admin/shops/{shop_id}/coupons
pub async fn list_all_coupons(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(shop_id): Path<String>,
) -> ApiResult<Json<Vec<CouponResponse>>> {
    let shop_id = shop_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid shop_id format"))?;

    let service = CouponService::new(state.service_context());
    let coupons = service.list_all_coupons(shop_id, auth.user_id).await?;
    Ok(Json(coupons))
}

/// Create a coupon (admin)
///
/// POST /admin/coupons
pub async fn create_coupon(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateCouponRequest>,
) -> ApiResult<Created<Json<CouponResponse>>> {
    let service = CouponService::new(state.service_context());
    let coupon = service.create_coupon(auth.user_id, request).await?;
    Ok(Created(Json(coupon)))
}

/// Update a coupon (admin)
///
/// PATCH /admin/coupons/{coupon_id}
pub async fn update_coupon(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(coupon_id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateCouponRequest>,
) -> ApiResult<Json<CouponResponse>> {
    let coupon_id = coupon_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid coupon_id format"))?;

    let service = CouponService::new(state.service_context());
    let coupon = service
        .update_coupon(coupon_id, auth.user_id, request)
        .await?;
    Ok(Json(coupon))
}

/// Delete a coupon (admin)
///
/// DELETE /admin/coupons/{coupon_id}
pub async fn delete_coupon(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(coupon_id): Path<String>,
) -> ApiResult<NoContent> {
    let coupon_id = coupon_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid coupon_id format"))?;

    let service = CouponService::new(state.service_context());
    service.delete_coupon(coupon_id, auth.user_id).await?;
    Ok(NoContent)
}
