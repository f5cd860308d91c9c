//! Role checks shared by moderation and catalog services

use deals_core::entities::User;
use deals_core::value_objects::Snowflake;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Resolve the acting user and require the admin role
pub(crate) async fn require_admin(ctx: &ServiceContext, user_id: Snowflake) -> ServiceResult<User> {
    let user = ctx
        .user_repo()
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

    if !user.is_admin() {
        return Err(ServiceError::permission_denied("administrator role required"));
    }

    Ok(user)
}
