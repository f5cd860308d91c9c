//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Snowflake IDs are serialized as strings for JavaScript compatibility.

use deals_core::value_objects::VoteDirection;
use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// Auth Responses
// ============================================================================

/// Authentication response with tokens
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: CurrentUserResponse,
}

impl AuthResponse {
    pub fn new(
        access_token: String,
        refresh_token: String,
        expires_in: i64,
        user: CurrentUserResponse,
    ) -> Self {
        Self {
            access_token,
            refresh_token,
            token_type: "Bearer".to_string(),
            expires_in,
            user,
        }
    }
}

// ============================================================================
// User Responses
// ============================================================================

/// Public user response (limited fields)
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Current authenticated user response (includes email and role)
#[derive(Debug, Clone, Serialize)]
pub struct CurrentUserResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Deal Responses
// ============================================================================

/// Deal response, including the cached vote counters and (when the caller
/// is known) their current vote
#[derive(Debug, Clone, Serialize)]
pub struct DealResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub url: String,
    pub original_price: i64,
    pub discounted_price: i64,
    pub discount_percentage: i32,
    pub shop_id: String,
    pub category_id: String,
    pub tags: Vec<String>,
    pub status: String,
    pub submitter_id: String,
    pub upvotes: i64,
    pub downvotes: i64,
    pub heat_score: i64,
    pub views: i64,
    pub user_vote: Option<VoteDirection>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Vote Responses
// ============================================================================

/// Receipt for an applied vote action: what happened and the committed
/// counters from the same transaction
#[derive(Debug, Clone, Serialize)]
pub struct VoteReceiptResponse {
    pub deal_id: String,
    /// "cast", "retracted", or "flipped"
    pub action: String,
    /// The caller's vote after the action (null after a retraction)
    pub user_vote: Option<VoteDirection>,
    pub upvotes: i64,
    pub downvotes: i64,
    pub heat_score: i64,
}

/// The caller's current vote on a deal
#[derive(Debug, Clone, Serialize)]
pub struct VoteStateResponse {
    pub deal_id: String,
    pub user_vote: Option<VoteDirection>,
}

// ============================================================================
// Comment Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct CommentResponse {
    pub id: String,
    pub deal_id: String,
    pub author_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Catalog Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct ShopResponse {
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryResponse {
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CouponResponse {
    pub id: String,
    pub shop_id: String,
    pub code: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}
