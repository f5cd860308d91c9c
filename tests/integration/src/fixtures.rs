//! Test fixtures and data generators
//!
//! Reusable request builders and response shapes for integration tests.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

// ============================================================================
// Auth
// ============================================================================

#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl RegisterRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            username: format!("voter{suffix}"),
            email: format!("voter{suffix}@example.com"),
            password: "TestPass123!".to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_register(reg: &RegisterRequest) -> Self {
        Self {
            email: reg.email.clone(),
            password: reg.password.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub user: CurrentUserResponse,
}

#[derive(Debug, Deserialize)]
pub struct CurrentUserResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    pub role: String,
}

#[derive(Debug, Serialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

// ============================================================================
// Deals & votes
// ============================================================================

#[derive(Debug, Serialize)]
pub struct SubmitDealRequest {
    pub title: String,
    pub description: String,
    pub url: String,
    pub original_price: i64,
    pub discounted_price: i64,
    pub shop_id: String,
    pub category_id: String,
    pub tags: Vec<String>,
}

impl SubmitDealRequest {
    pub fn unique(shop_id: &str, category_id: &str) -> Self {
        let suffix = unique_suffix();
        Self {
            title: format!("Integration deal {suffix}"),
            description: "A deal created by the integration tests".to_string(),
            url: "https://shop.example/offer".to_string(),
            original_price: 10_000,
            discounted_price: 6_000,
            shop_id: shop_id.to_string(),
            category_id: category_id.to_string(),
            tags: vec!["integration".to_string()],
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct DealResponse {
    pub id: String,
    pub title: String,
    pub status: String,
    pub discount_percentage: i32,
    pub upvotes: i64,
    pub downvotes: i64,
    pub heat_score: i64,
    pub views: i64,
    pub user_vote: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct VoteRequest {
    pub direction: String,
}

impl VoteRequest {
    pub fn up() -> Self {
        Self {
            direction: "up".to_string(),
        }
    }

    pub fn down() -> Self {
        Self {
            direction: "down".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct VoteReceipt {
    pub deal_id: String,
    pub action: String,
    pub user_vote: Option<String>,
    pub upvotes: i64,
    pub downvotes: i64,
    pub heat_score: i64,
}

#[derive(Debug, Deserialize)]
pub struct VoteState {
    pub deal_id: String,
    pub user_vote: Option<String>,
}

// ============================================================================
// Comments
// ============================================================================

#[derive(Debug, Serialize)]
pub struct CreateCommentRequest {
    pub content: String,
    pub parent_id: Option<String>,
}

impl CreateCommentRequest {
    pub fn simple(content: &str) -> Self {
        Self {
            content: content.to_string(),
            parent_id: None,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CommentResponse {
    pub id: String,
    pub deal_id: String,
    pub author_id: String,
    pub parent_id: Option<String>,
    pub content: String,
}

// ============================================================================
// Catalog
// ============================================================================

#[derive(Debug, Serialize)]
pub struct CreateShopRequest {
    pub name: String,
    pub slug: String,
    pub website_url: Option<String>,
    pub description: Option<String>,
}

impl CreateShopRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("Integration Shop {suffix}"),
            slug: format!("integration-shop-{suffix}"),
            website_url: Some("https://shop.example".to_string()),
            description: None,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ShopResponse {
    pub id: String,
    pub name: String,
    pub slug: String,
}

#[derive(Debug, Serialize)]
pub struct CreateCategoryRequest {
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
}

impl CreateCategoryRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("Integration Category {suffix}"),
            slug: format!("integration-category-{suffix}"),
            description: None,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CategoryResponse {
    pub id: String,
    pub name: String,
    pub slug: String,
}

#[derive(Debug, Serialize)]
pub struct CreateCouponRequest {
    pub shop_id: String,
    pub code: String,
    pub description: String,
    pub expires_at: Option<String>,
}

impl CreateCouponRequest {
    pub fn unique(shop_id: &str) -> Self {
        let suffix = unique_suffix();
        Self {
            shop_id: shop_id.to_string(),
            code: format!("SAVE{suffix}"),
            description: "Integration test coupon".to_string(),
            expires_at: None,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CouponResponse {
    pub id: String,
    pub shop_id: String,
    pub code: String,
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}
