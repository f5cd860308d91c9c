//! Error handling utilities for repositories

use deals_core::error::DomainError;
use deals_core::value_objects::Snowflake;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Create a "deal not found" error
pub fn deal_not_found(id: Snowflake) -> DomainError {
    DomainError::DealNotFound(id)
}

/// Create a "user not found" error
pub fn user_not_found(id: Snowflake) -> DomainError {
    DomainError::UserNotFound(id)
}

/// Create a "comment not found" error
pub fn comment_not_found(id: Snowflake) -> DomainError {
    DomainError::CommentNotFound(id)
}

/// Create a "shop not found" error
pub fn shop_not_found(id: Snowflake) -> DomainError {
    DomainError::ShopNotFound(id)
}

/// Create a "category not found" error
pub fn category_not_found(id: Snowflake) -> DomainError {
    DomainError::CategoryNotFound(id)
}

/// Create a "coupon not found" error
pub fn coupon_not_found(id: Snowflake) -> DomainError {
    DomainError::CouponNotFound(id)
}
