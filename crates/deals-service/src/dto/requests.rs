//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate`.

use deals_core::value_objects::{Snowflake, VoteDirection};
use deals_core::DealSort;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Auth Requests
// ============================================================================

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 3, max = 32, message = "Username must be 3-32 characters"))]
    pub username: String,

    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(min = 8, max = 128, message = "Password must be 8-128 characters"))]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RefreshTokenRequest {
    #[validate(length(min = 1, message = "Refresh token is required"))]
    pub refresh_token: String,
}

// ============================================================================
// Deal Requests
// ============================================================================

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SubmitDealRequest {
    #[validate(length(min = 8, max = 200, message = "Title must be 8-200 characters"))]
    pub title: String,

    #[validate(length(max = 5000, message = "Description too long"))]
    #[serde(default)]
    pub description: String,

    #[validate(url(message = "Invalid offer URL"))]
    pub url: String,

    /// Prices in minor units (cents)
    #[validate(range(min = 1, message = "Original price must be positive"))]
    pub original_price: i64,

    #[validate(range(min = 0, message = "Discounted price cannot be negative"))]
    pub discounted_price: i64,

    pub shop_id: Snowflake,
    pub category_id: Snowflake,

    #[validate(length(max = 10, message = "At most 10 tags"))]
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateDealRequest {
    #[validate(length(min = 8, max = 200, message = "Title must be 8-200 characters"))]
    pub title: Option<String>,

    #[validate(length(max = 5000, message = "Description too long"))]
    pub description: Option<String>,

    #[validate(url(message = "Invalid offer URL"))]
    pub url: Option<String>,

    #[validate(range(min = 1, message = "Original price must be positive"))]
    pub original_price: Option<i64>,

    #[validate(range(min = 0, message = "Discounted price cannot be negative"))]
    pub discounted_price: Option<i64>,

    pub shop_id: Option<Snowflake>,
    pub category_id: Option<Snowflake>,

    #[validate(length(max = 10, message = "At most 10 tags"))]
    pub tags: Option<Vec<String>>,
}

/// Listing filters as they arrive from the query string
#[derive(Debug, Clone, Default)]
pub struct DealListQuery {
    pub category_id: Option<Snowflake>,
    pub shop_id: Option<Snowflake>,
    pub tag: Option<String>,
    pub sort: DealSort,
    pub limit: i64,
    pub offset: i64,
}

// ============================================================================
// Vote Requests
// ============================================================================

/// Direction is a closed enum; any other string fails deserialization
/// before the service sees it.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CastVoteRequest {
    pub direction: VoteDirection,
}

// ============================================================================
// Comment Requests
// ============================================================================

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[validate(length(min = 1, max = 2000, message = "Comment must be 1-2000 characters"))]
    pub content: String,

    pub parent_id: Option<Snowflake>,
}

// ============================================================================
// Catalog Requests
// ============================================================================

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateShopRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 100, message = "Slug must be 1-100 characters"))]
    pub slug: String,

    #[validate(url(message = "Invalid website URL"))]
    pub website_url: Option<String>,

    #[validate(length(max = 2000, message = "Description too long"))]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateShopRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 100, message = "Slug must be 1-100 characters"))]
    pub slug: Option<String>,

    #[validate(url(message = "Invalid website URL"))]
    pub website_url: Option<String>,

    #[validate(length(max = 2000, message = "Description too long"))]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCategoryRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 100, message = "Slug must be 1-100 characters"))]
    pub slug: String,

    #[validate(length(max = 2000, message = "Description too long"))]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateCategoryRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 100, message = "Slug must be 1-100 characters"))]
    pub slug: Option<String>,

    #[validate(length(max = 2000, message = "Description too long"))]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCouponRequest {
    pub shop_id: Snowflake,

    #[validate(length(min = 1, max = 64, message = "Code must be 1-64 characters"))]
    pub code: String,

    #[validate(length(min = 1, max = 500, message = "Description must be 1-500 characters"))]
    pub description: String,

    pub expires_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateCouponRequest {
    #[validate(length(min = 1, max = 64, message = "Code must be 1-64 characters"))]
    pub code: Option<String>,

    #[validate(length(min = 1, max = 500, message = "Description must be 1-500 characters"))]
    pub description: Option<String>,

    pub expires_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_validation() {
        let ok = RegisterRequest {
            username: "dealhunter".to_string(),
            email: "hunter@example.com".to_string(),
            password: "Sup3rSecret".to_string(),
        };
        assert!(ok.validate().is_ok());

        let bad_email = RegisterRequest {
            email: "not-an-email".to_string(),
            ..ok.clone()
        };
        assert!(bad_email.validate().is_err());

        let short_name = RegisterRequest {
            username: "ab".to_string(),
            ..ok
        };
        assert!(short_name.validate().is_err());
    }

    #[test]
    fn test_submit_deal_request_validation() {
        let ok = SubmitDealRequest {
            title: "Half price widgets".to_string(),
            description: String::new(),
            url: "https://shop.example/widgets".to_string(),
            original_price: 10_000,
            discounted_price: 5_000,
            shop_id: Snowflake::new(1),
            category_id: Snowflake::new(2),
            tags: vec![],
        };
        assert!(ok.validate().is_ok());

        let bad_url = SubmitDealRequest {
            url: "widgets".to_string(),
            ..ok.clone()
        };
        assert!(bad_url.validate().is_err());

        let free = SubmitDealRequest {
            original_price: 0,
            ..ok
        };
        assert!(free.validate().is_err());
    }

    #[test]
    fn test_vote_request_rejects_unknown_direction() {
        let up: CastVoteRequest = serde_json::from_str(r#"{"direction": "up"}"#).unwrap();
        assert_eq!(up.direction, VoteDirection::Up);

        assert!(serde_json::from_str::<CastVoteRequest>(r#"{"direction": "maybe"}"#).is_err());
    }
}
