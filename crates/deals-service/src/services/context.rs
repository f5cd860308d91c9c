//! Service context - dependency container for services
//!
//! Holds all repositories and other dependencies needed by services.

use std::sync::Arc;

use deals_common::auth::JwtService;
use deals_core::traits::{
    CategoryRepository, CommentRepository, CouponRepository, DealRepository, ShopRepository,
    UserRepository, VoteRepository,
};
use deals_core::SnowflakeGenerator;
use deals_db::PgPool;

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Database repositories
/// - JWT service for authentication
/// - Snowflake generator for ID generation
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool
    pool: PgPool,

    // Repositories
    user_repo: Arc<dyn UserRepository>,
    deal_repo: Arc<dyn DealRepository>,
    vote_repo: Arc<dyn VoteRepository>,
    comment_repo: Arc<dyn CommentRepository>,
    shop_repo: Arc<dyn ShopRepository>,
    category_repo: Arc<dyn CategoryRepository>,
    coupon_repo: Arc<dyn CouponRepository>,

    // Services
    jwt_service: Arc<JwtService>,
    snowflake_generator: Arc<SnowflakeGenerator>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        pool: PgPool,
        user_repo: Arc<dyn UserRepository>,
        deal_repo: Arc<dyn DealRepository>,
        vote_repo: Arc<dyn VoteRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        shop_repo: Arc<dyn ShopRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        coupon_repo: Arc<dyn CouponRepository>,
        jwt_service: Arc<JwtService>,
        snowflake_generator: Arc<SnowflakeGenerator>,
    ) -> Self {
        Self {
            pool,
            user_repo,
            deal_repo,
            vote_repo,
            comment_repo,
            shop_repo,
            category_repo,
            coupon_repo,
            jwt_service,
            snowflake_generator,
        }
    }

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // === Repositories ===

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the deal repository
    pub fn deal_repo(&self) -> &dyn DealRepository {
        self.deal_repo.as_ref()
    }

    /// Get the vote repository
    pub fn vote_repo(&self) -> &dyn VoteRepository {
        self.vote_repo.as_ref()
    }

    /// Get the comment repository
    pub fn comment_repo(&self) -> &dyn CommentRepository {
        self.comment_repo.as_ref()
    }

    /// Get the shop repository
    pub fn shop_repo(&self) -> &dyn ShopRepository {
        self.shop_repo.as_ref()
    }

    /// Get the category repository
    pub fn category_repo(&self) -> &dyn CategoryRepository {
        self.category_repo.as_ref()
    }

    /// Get the coupon repository
    pub fn coupon_repo(&self) -> &dyn CouponRepository {
        self.coupon_repo.as_ref()
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Generate a new Snowflake ID
    pub fn generate_id(&self) -> deals_core::Snowflake {
        self.snowflake_generator.generate()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("repositories", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    user_repo: Option<Arc<dyn UserRepository>>,
    deal_repo: Option<Arc<dyn DealRepository>>,
    vote_repo: Option<Arc<dyn VoteRepository>>,
    comment_repo: Option<Arc<dyn CommentRepository>>,
    shop_repo: Option<Arc<dyn ShopRepository>>,
    category_repo: Option<Arc<dyn CategoryRepository>>,
    coupon_repo: Option<Arc<dyn CouponRepository>>,
    jwt_service: Option<Arc<JwtService>>,
    snowflake_generator: Option<Arc<SnowflakeGenerator>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn deal_repo(mut self, repo: Arc<dyn DealRepository>) -> Self {
        self.deal_repo = Some(repo);
        self
    }

    pub fn vote_repo(mut self, repo: Arc<dyn VoteRepository>) -> Self {
        self.vote_repo = Some(repo);
        self
    }

    pub fn comment_repo(mut self, repo: Arc<dyn CommentRepository>) -> Self {
        self.comment_repo = Some(repo);
        self
    }

    pub fn shop_repo(mut self, repo: Arc<dyn ShopRepository>) -> Self {
        self.shop_repo = Some(repo);
        self
    }

    pub fn category_repo(mut self, repo: Arc<dyn CategoryRepository>) -> Self {
        self.category_repo = Some(repo);
        self
    }

    pub fn coupon_repo(mut self, repo: Arc<dyn CouponRepository>) -> Self {
        self.coupon_repo = Some(repo);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn snowflake_generator(mut self, generator: Arc<SnowflakeGenerator>) -> Self {
        self.snowflake_generator = Some(generator);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        use super::error::ServiceError;

        Ok(ServiceContext::new(
            self.pool
                .ok_or_else(|| ServiceError::validation("pool is required"))?,
            self.user_repo
                .ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            self.deal_repo
                .ok_or_else(|| ServiceError::validation("deal_repo is required"))?,
            self.vote_repo
                .ok_or_else(|| ServiceError::validation("vote_repo is required"))?,
            self.comment_repo
                .ok_or_else(|| ServiceError::validation("comment_repo is required"))?,
            self.shop_repo
                .ok_or_else(|| ServiceError::validation("shop_repo is required"))?,
            self.category_repo
                .ok_or_else(|| ServiceError::validation("category_repo is required"))?,
            self.coupon_repo
                .ok_or_else(|| ServiceError::validation("coupon_repo is required"))?,
            self.jwt_service
                .ok_or_else(|| ServiceError::validation("jwt_service is required"))?,
            self.snowflake_generator
                .ok_or_else(|| ServiceError::validation("snowflake_generator is required"))?,
        ))
    }
}
