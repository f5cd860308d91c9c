//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use crate::handlers::{auth, categories, comments, coupons, deals, health, shops, users, votes};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(deal_routes())
        .merge(comment_routes())
        .merge(catalog_routes())
        .merge(admin_routes())
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/refresh", post(auth::refresh_token))
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/@me", get(users::get_current_user))
        .route("/users/:user_id", get(users::get_user))
}

/// Deal browsing, submission, and voting routes
fn deal_routes() -> Router<AppState> {
    Router::new()
        .route("/deals", get(deals::list_deals))
        .route("/deals", post(deals::submit_deal))
        .route("/deals/:deal_id", get(deals::get_deal))
        .route("/deals/:deal_id", patch(deals::update_deal))
        // Voting
        .route("/deals/:deal_id/vote", post(votes::cast_vote))
        .route("/deals/:deal_id/vote", get(votes::get_vote_state))
}

/// Comment routes
fn comment_routes() -> Router<AppState> {
    Router::new()
        .route("/deals/:deal_id/comments", get(comments::list_comments))
        .route("/deals/:deal_id/comments", post(comments::create_comment))
        .route("/comments/:comment_id", delete(comments::delete_comment))
}

/// Public catalog routes
fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/shops", get(shops::list_shops))
        .route("/shops/:slug", get(shops::get_shop))
        .route("/shops/:slug/coupons", get(coupons::list_shop_coupons))
        .route("/categories", get(categories::list_categories))
        .route("/categories/:slug", get(categories::get_category))
}

/// Admin routes: moderation and catalog management
fn admin_routes() -> Router<AppState> {
    Router::new()
        // Deal moderation
        .route("/admin/deals", get(deals::list_deals_for_moderation))
        .route("/admin/deals/:deal_id/approve", post(deals::approve_deal))
        .route("/admin/deals/:deal_id/reject", post(deals::reject_deal))
        .route("/admin/deals/:deal_id/recount", post(votes::recount))
        .route("/admin/deals/:deal_id", delete(deals::delete_deal))
        // Shops
        .route("/admin/shops", post(shops::create_shop))
        .route("/admin/shops/:shop_id", patch(shops::update_shop))
        .route("/admin/shops/:shop_id", delete(shops::delete_shop))
        .route("/admin/shops/:shop_id/coupons", get(coupons::list_all_coupons))
        // Categories
        .route("/admin/categories", post(categories::create_category))
        .route("/admin/categories/:category_id", patch(categories::update_category))
        .route("/admin/categories/:category_id", delete(categories::delete_category))
        // Coupons
        .route("/admin/coupons", post(coupons::create_coupon))
        .route("/admin/coupons/:coupon_id", patch(coupons::update_coupon))
        .route("/admin/coupons/:coupon_id", delete(coupons::delete_coupon))
}
