//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::Snowflake;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Deal not found: {0}")]
    DealNotFound(Snowflake),

    #[error("User not found: {0}")]
    UserNotFound(Snowflake),

    #[error("Comment not found: {0}")]
    CommentNotFound(Snowflake),

    #[error("Shop not found: {0}")]
    ShopNotFound(Snowflake),

    #[error("Category not found: {0}")]
    CategoryNotFound(Snowflake),

    #[error("Coupon not found: {0}")]
    CouponNotFound(Snowflake),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Discounted price must be below the original price")]
    InvalidPricing,

    #[error("Content too long: max {max} characters")]
    ContentTooLong { max: usize },

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Administrator access required")]
    AdminRequired,

    #[error("Not the deal submitter")]
    NotDealSubmitter,

    #[error("Not the comment author")]
    NotCommentAuthor,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Email already in use")]
    EmailAlreadyExists,

    #[error("Slug already in use: {0}")]
    SlugAlreadyExists(String),

    /// Lost insert race on the vote ledger's (deal, user) uniqueness.
    /// Internal signal only: the vote repository re-reads and retries.
    #[error("Concurrent vote detected")]
    VoteConflict,

    // =========================================================================
    // Business Rule Violations
    // =========================================================================
    #[error("Deal is not approved")]
    DealNotApproved,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    /// The atomic ledger + counter transaction failed and was rolled back.
    /// Storage detail is logged at the failure site, never surfaced.
    #[error("Vote could not be applied")]
    VoteFailed,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::DealNotFound(_) => "UNKNOWN_DEAL",
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::CommentNotFound(_) => "UNKNOWN_COMMENT",
            Self::ShopNotFound(_) => "UNKNOWN_SHOP",
            Self::CategoryNotFound(_) => "UNKNOWN_CATEGORY",
            Self::CouponNotFound(_) => "UNKNOWN_COUPON",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidPricing => "INVALID_PRICING",
            Self::ContentTooLong { .. } => "CONTENT_TOO_LONG",

            // Authorization
            Self::AdminRequired => "ADMIN_REQUIRED",
            Self::NotDealSubmitter => "NOT_DEAL_SUBMITTER",
            Self::NotCommentAuthor => "NOT_COMMENT_AUTHOR",

            // Conflict
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::SlugAlreadyExists(_) => "SLUG_ALREADY_EXISTS",
            Self::VoteConflict => "VOTE_CONFLICT",

            // Business Rules
            Self::DealNotApproved => "DEAL_NOT_APPROVED",

            // Infrastructure
            Self::VoteFailed => "VOTE_FAILED",
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::DealNotFound(_)
                | Self::UserNotFound(_)
                | Self::CommentNotFound(_)
                | Self::ShopNotFound(_)
                | Self::CategoryNotFound(_)
                | Self::CouponNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_) | Self::InvalidPricing | Self::ContentTooLong { .. }
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(
            self,
            Self::AdminRequired | Self::NotDealSubmitter | Self::NotCommentAuthor
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::EmailAlreadyExists
                | Self::SlugAlreadyExists(_)
                | Self::VoteConflict
                | Self::DealNotApproved
        )
    }
}
