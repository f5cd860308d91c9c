//! Category handlers

use axum::extract::{Path, State};
use axum::Json;
use deals_service::{
    CategoryResponse, CategoryService, CreateCategoryRequest, UpdateCategoryRequest,
};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created, NoContent};
use crate::state::AppState;

/// List all categories
///
/// GET /categories
pub async fn list_categories(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<CategoryResponse>>> {
    let service = CategoryService::new(state.service_context());
    let categories = service.list_categories().await?;
    Ok(Json(categories))
}

/// Category detail by slug
///
/// GET /categories/{slug}
pub async fn get_category(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> ApiResult<Json<CategoryResponse>> {
    let service = CategoryService::new(state.service_context());
    let category = service.get_category_by_slug(&slug).await?;
    Ok(Json(category))
}

/// Create a category (admin)
///
/// POST /admin/categories
pub async fn create_category(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateCategoryRequest>,
) -> ApiResult<Created<Json<CategoryResponse>>> {
    let service = CategoryService::new(state.service_context());
    let category = service.create_category(auth.user_id, request).await?;
    Ok(Created(Json(category)))
}

/// Update a category (admin)
///
/// PATCH /admin/categories/{category_id}
pub async fn update_category(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(category_id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateCategoryRequest>,
) -> ApiResult<Json<CategoryResponse>> {
    let category_id = category_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid category_id format"))?;

    let service = CategoryService::new(state.service_context());
    let category = service
        .update_category(category_id, auth.user_id, request)
        .await?;
    Ok(Json(category))
}

/// Delete a category (admin)
///
/// DELETE /admin/categories/{category_id}
pub async fn delete_category(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(category_id): Path<String>,
) -> ApiResult<NoContent> {
    let category_id = category_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid category_id format"))?;

    let service = CategoryService::new(state.service_context());
    service.delete_category(category_id, auth.user_id).await?;
    Ok(NoContent)
}
