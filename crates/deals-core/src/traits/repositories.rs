//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs; the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{Category, Comment, Coupon, Deal, DealCounters, DealStatus, Shop, User, Vote};
use crate::error::DomainError;
use crate::value_objects::{Snowflake, VoteDirection, VoteTransition};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Check if email is already taken
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Create a new user
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()>;

    /// Update an existing user
    async fn update(&self, user: &User) -> RepoResult<()>;

    /// Delete a user
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: Snowflake) -> RepoResult<Option<String>>;
}

// ============================================================================
// Deal Repository
// ============================================================================

/// Sort mode for deal listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DealSort {
    /// Heat score descending (the default "Hot" ordering)
    #[default]
    Hot,
    /// Creation time descending
    Newest,
    /// Discount percentage descending
    Discount,
    /// Discounted price ascending
    Price,
}

/// Filter and ordering options for deal listings
#[derive(Debug, Clone, Default)]
pub struct DealQuery {
    pub status: Option<DealStatus>,
    pub category_id: Option<Snowflake>,
    pub shop_id: Option<Snowflake>,
    pub tag: Option<String>,
    pub sort: DealSort,
    pub limit: i64,
    pub offset: i64,
}

#[async_trait]
pub trait DealRepository: Send + Sync {
    /// Find deal by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Deal>>;

    /// List deals matching the query, ordered by the query's sort mode.
    /// Reads the cached counters only; never touches the vote ledger.
    async fn list(&self, query: &DealQuery) -> RepoResult<Vec<Deal>>;

    /// Create a new deal
    async fn create(&self, deal: &Deal) -> RepoResult<()>;

    /// Update an existing deal's content fields (never the vote counters)
    async fn update(&self, deal: &Deal) -> RepoResult<()>;

    /// Set the moderation status
    async fn set_status(&self, id: Snowflake, status: DealStatus) -> RepoResult<()>;

    /// Delete a deal (votes and comments cascade at the storage layer)
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;

    /// Bump the view counter. Independent of the vote transaction and its
    /// counters; must never share a transaction with voting.
    async fn increment_views(&self, id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Vote Repository
// ============================================================================

/// Result of an applied vote action: the transition that took place and the
/// deal's counters as committed by the same transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoteOutcome {
    pub transition: VoteTransition,
    pub counters: DealCounters,
}

#[async_trait]
pub trait VoteRepository: Send + Sync {
    /// Apply a vote action for (deal, user) as a single atomic unit:
    /// read the ledger entry, resolve the transition, write the ledger,
    /// and apply the score delta to the deal's cached counters.
    ///
    /// Concurrent duplicate inserts for the same (deal, user) are resolved
    /// internally by re-reading the ledger and retrying; callers never see
    /// the conflict unless the retry itself fails.
    async fn cast(
        &self,
        deal_id: Snowflake,
        user_id: Snowflake,
        direction: VoteDirection,
    ) -> RepoResult<VoteOutcome>;

    /// The caller's current vote on a deal, if any
    async fn find(&self, deal_id: Snowflake, user_id: Snowflake) -> RepoResult<Option<Vote>>;

    /// All ledger rows for a deal
    async fn find_by_deal(&self, deal_id: Snowflake) -> RepoResult<Vec<Vote>>;

    /// Recompute the deal's counters from its full ledger (+2 per up, -1
    /// per down) and overwrite the cache. Maintenance operation.
    async fn recount(&self, deal_id: Snowflake) -> RepoResult<DealCounters>;
}

// ============================================================================
// Comment Repository
// ============================================================================

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Find comment by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Comment>>;

    /// List comments on a deal, oldest first
    async fn find_by_deal(&self, deal_id: Snowflake) -> RepoResult<Vec<Comment>>;

    /// Create a new comment
    async fn create(&self, comment: &Comment) -> RepoResult<()>;

    /// Delete a comment
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Shop Repository
// ============================================================================

#[async_trait]
pub trait ShopRepository: Send + Sync {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Shop>>;

    async fn find_by_slug(&self, slug: &str) -> RepoResult<Option<Shop>>;

    async fn list(&self) -> RepoResult<Vec<Shop>>;

    async fn create(&self, shop: &Shop) -> RepoResult<()>;

    async fn update(&self, shop: &Shop) -> RepoResult<()>;

    async fn delete(&self, id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Category Repository
// ============================================================================

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Category>>;

    async fn find_by_slug(&self, slug: &str) -> RepoResult<Option<Category>>;

    async fn list(&self) -> RepoResult<Vec<Category>>;

    async fn create(&self, category: &Category) -> RepoResult<()>;

    async fn update(&self, category: &Category) -> RepoResult<()>;

    async fn delete(&self, id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Coupon Repository
// ============================================================================

#[async_trait]
pub trait CouponRepository: Send + Sync {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Coupon>>;

    /// Coupons for a shop; with `only_active` set, expired ones are skipped
    async fn find_by_shop(&self, shop_id: Snowflake, only_active: bool) -> RepoResult<Vec<Coupon>>;

    async fn create(&self, coupon: &Coupon) -> RepoResult<()>;

    async fn update(&self, coupon: &Coupon) -> RepoResult<()>;

    async fn delete(&self, id: Snowflake) -> RepoResult<()>;
}
