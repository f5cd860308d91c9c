//! Authentication service
//!
//! Handles user registration, login, and stateless token refresh.

use deals_common::auth::{hash_password, validate_password_strength, verify_password};
use deals_core::entities::User;
use deals_core::Snowflake;
use tracing::{info, instrument, warn};

use crate::dto::{
    AuthResponse, CurrentUserResponse, LoginRequest, RefreshTokenRequest, RegisterRequest,
    UserResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user
    #[instrument(skip(self, request), fields(username = %request.username, email = %request.email))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<AuthResponse> {
        validate_password_strength(&request.password).map_err(ServiceError::from)?;

        if self.ctx.user_repo().email_exists(&request.email).await? {
            return Err(ServiceError::conflict("Email already registered"));
        }

        let password_hash =
            hash_password(&request.password).map_err(|e| ServiceError::internal(e.to_string()))?;

        let user = User::new(self.ctx.generate_id(), request.username, request.email);
        self.ctx.user_repo().create(&user, &password_hash).await?;

        info!(user_id = %user.id, "User registered");

        self.issue_tokens(&user)
    }

    /// Login with email and password
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<AuthResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| {
                warn!(email = %request.email, "Login failed: user not found");
                ServiceError::App(deals_common::AppError::InvalidCredentials)
            })?;

        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user.id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = %user.id, "Login failed: no password hash");
                ServiceError::App(deals_common::AppError::InvalidCredentials)
            })?;

        let is_valid = verify_password(&request.password, &password_hash)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        if !is_valid {
            warn!(user_id = %user.id, "Login failed: invalid password");
            return Err(ServiceError::App(deals_common::AppError::InvalidCredentials));
        }

        info!(user_id = %user.id, "User logged in");

        self.issue_tokens(&user)
    }

    /// Exchange a refresh token for a new pair.
    ///
    /// The token is validated by signature and expiry; the user must still
    /// exist.
    #[instrument(skip(self, request))]
    pub async fn refresh_tokens(&self, request: RefreshTokenRequest) -> ServiceResult<AuthResponse> {
        let claims = self
            .ctx
            .jwt_service()
            .validate_refresh_token(&request.refresh_token)
            .map_err(ServiceError::from)?;
        let user_id = claims.user_id().map_err(ServiceError::from)?;

        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        info!(user_id = %user.id, "Tokens refreshed");

        self.issue_tokens(&user)
    }

    /// The authenticated user's own profile
    #[instrument(skip(self))]
    pub async fn current_user(&self, user_id: Snowflake) -> ServiceResult<CurrentUserResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        Ok(CurrentUserResponse::from(&user))
    }

    /// Public profile for any user
    #[instrument(skip(self))]
    pub async fn get_user(&self, user_id: Snowflake) -> ServiceResult<UserResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        Ok(UserResponse::from(&user))
    }

    fn issue_tokens(&self, user: &User) -> ServiceResult<AuthResponse> {
        let token_pair = self
            .ctx
            .jwt_service()
            .generate_token_pair(user.id)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        Ok(AuthResponse::new(
            token_pair.access_token,
            token_pair.refresh_token,
            token_pair.expires_in,
            CurrentUserResponse::from(user),
        ))
    }
}

#[cfg(test)]
mod tests {
    // Exercised end-to-end by the API integration tests.
}
