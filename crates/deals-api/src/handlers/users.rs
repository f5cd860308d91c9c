//! User handlers

use axum::extract::{Path, State};
use axum::Json;
use deals_service::{AuthService, CurrentUserResponse, UserResponse};

use crate::extractors::AuthUser;
use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

/// The authenticated user's own profile
///
/// GET /users/@me
pub async fn get_current_user(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<CurrentUserResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.current_user(auth.user_id).await?;
    Ok(Json(response))
}

/// Public profile lookup
///
/// GET /users/{user_id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<UserResponse>> {
    let user_id = user_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid user_id format"))?;

    let service = AuthService::new(state.service_context());
    let response = service.get_user(user_id).await?;
    Ok(Json(response))
}
