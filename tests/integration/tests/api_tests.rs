//! API integration tests
//!
//! These tests require a running PostgreSQL instance and the
//! DATABASE_URL environment variable (JWT_SECRET is optional).
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, promote_to_admin, TestServer,
};
use reqwest::StatusCode;

/// Register a fresh user and return their access token
async fn register_user(server: &TestServer) -> (RegisterRequest, AuthResponse) {
    let request = RegisterRequest::unique();
    let response = server
        .post("/api/v1/auth/register", &request)
        .await
        .unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    (request, auth)
}

/// Register a fresh admin and return their access token
async fn register_admin(server: &TestServer) -> AuthResponse {
    let (request, auth) = register_user(server).await;
    promote_to_admin(&request.email).await.unwrap();
    auth
}

/// Create a shop and a category through the admin API
async fn setup_catalog(server: &TestServer, admin_token: &str) -> (ShopResponse, CategoryResponse) {
    let response = server
        .post_auth("/api/v1/admin/shops", admin_token, &CreateShopRequest::unique())
        .await
        .unwrap();
    let shop: ShopResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth(
            "/api/v1/admin/categories",
            admin_token,
            &CreateCategoryRequest::unique(),
        )
        .await
        .unwrap();
    let category: CategoryResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    (shop, category)
}

/// Submit a deal as `token` and approve it as `admin_token`
async fn create_approved_deal(
    server: &TestServer,
    token: &str,
    admin_token: &str,
    shop_id: &str,
    category_id: &str,
) -> DealResponse {
    let response = server
        .post_auth(
            "/api/v1/deals",
            token,
            &SubmitDealRequest::unique(shop_id, category_id),
        )
        .await
        .unwrap();
    let deal: DealResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(deal.status, "pending");

    let response = server
        .post_auth_empty(&format!("/api/v1/admin/deals/{}/approve", deal.id), admin_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    deal
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_register_and_login() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (request, auth) = register_user(&server).await;

    assert_eq!(auth.user.username, request.username);
    assert_eq!(auth.user.role, "user");
    assert!(!auth.access_token.is_empty());
    assert!(!auth.refresh_token.is_empty());

    let response = server
        .post("/api/v1/auth/login", &LoginRequest::from_register(&request))
        .await
        .unwrap();
    let login: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(login.user.email, request.email);
}

#[tokio::test]
async fn test_register_duplicate_email() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (request, _) = register_user(&server).await;

    let response = server
        .post("/api/v1/auth/register", &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .post(
            "/api/v1/auth/login",
            &LoginRequest {
                email: "nobody@example.com".to_string(),
                password: "WrongPass123".to_string(),
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_refresh_token() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register_user(&server).await;

    let response = server
        .post(
            "/api/v1/auth/refresh",
            &RefreshTokenRequest {
                refresh_token: auth.refresh_token,
            },
        )
        .await
        .unwrap();
    let renewed: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!renewed.access_token.is_empty());
}

#[tokio::test]
async fn test_me_requires_auth() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/v1/users/@me").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
}

// ============================================================================
// Vote Tests - the heat score contract over HTTP
// ============================================================================

#[tokio::test]
async fn test_vote_requires_auth() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = register_admin(&server).await;
    let (shop, category) = setup_catalog(&server, &admin.access_token).await;
    let deal = create_approved_deal(
        &server,
        &admin.access_token,
        &admin.access_token,
        &shop.id,
        &category.id,
    )
    .await;

    // Anonymous vote is rejected with 401 and no counters move
    let response = server
        .post(&format!("/api/v1/deals/{}/vote", deal.id), &VoteRequest::up())
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();

    let response = server
        .get(&format!("/api/v1/deals/{}", deal.id))
        .await
        .unwrap();
    let fetched: DealResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.upvotes, 0);
    assert_eq!(fetched.heat_score, 0);
}

#[tokio::test]
async fn test_vote_transition_scenario() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = register_admin(&server).await;
    let (shop, category) = setup_catalog(&server, &admin.access_token).await;

    let (_, user_a) = register_user(&server).await;
    let (_, user_b) = register_user(&server).await;
    let deal = create_approved_deal(
        &server,
        &user_a.access_token,
        &admin.access_token,
        &shop.id,
        &category.id,
    )
    .await;
    let vote_path = format!("/api/v1/deals/{}/vote", deal.id);

    // A casts up: {1, 0, 2}
    let response = server
        .post_auth(&vote_path, &user_a.access_token, &VoteRequest::up())
        .await
        .unwrap();
    let receipt: VoteReceipt = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(receipt.action, "cast");
    assert_eq!(receipt.user_vote.as_deref(), Some("up"));
    assert_eq!(
        (receipt.upvotes, receipt.downvotes, receipt.heat_score),
        (1, 0, 2)
    );

    // B casts down: {1, 1, 1}
    let response = server
        .post_auth(&vote_path, &user_b.access_token, &VoteRequest::down())
        .await
        .unwrap();
    let receipt: VoteReceipt = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(
        (receipt.upvotes, receipt.downvotes, receipt.heat_score),
        (1, 1, 1)
    );

    // A flips to down: {0, 2, -2}
    let response = server
        .post_auth(&vote_path, &user_a.access_token, &VoteRequest::down())
        .await
        .unwrap();
    let receipt: VoteReceipt = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(receipt.action, "flipped");
    assert_eq!(
        (receipt.upvotes, receipt.downvotes, receipt.heat_score),
        (0, 2, -2)
    );

    // A re-selects down, retracting: {0, 1, -1}
    let response = server
        .post_auth(&vote_path, &user_a.access_token, &VoteRequest::down())
        .await
        .unwrap();
    let receipt: VoteReceipt = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(receipt.action, "retracted");
    assert_eq!(receipt.user_vote, None);
    assert_eq!(
        (receipt.upvotes, receipt.downvotes, receipt.heat_score),
        (0, 1, -1)
    );

    // B retracts: {0, 0, 0}
    let response = server
        .post_auth(&vote_path, &user_b.access_token, &VoteRequest::down())
        .await
        .unwrap();
    let receipt: VoteReceipt = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(
        (receipt.upvotes, receipt.downvotes, receipt.heat_score),
        (0, 0, 0)
    );
}

#[tokio::test]
async fn test_vote_state_lookup() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = register_admin(&server).await;
    let (shop, category) = setup_catalog(&server, &admin.access_token).await;
    let (_, user) = register_user(&server).await;
    let deal = create_approved_deal(
        &server,
        &user.access_token,
        &admin.access_token,
        &shop.id,
        &category.id,
    )
    .await;
    let vote_path = format!("/api/v1/deals/{}/vote", deal.id);

    // No vote yet
    let response = server
        .get_auth(&vote_path, &user.access_token)
        .await
        .unwrap();
    let state: VoteState = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(state.user_vote, None);

    // Vote, then the state and the detail view both reflect it
    server
        .post_auth(&vote_path, &user.access_token, &VoteRequest::down())
        .await
        .unwrap();

    let response = server
        .get_auth(&vote_path, &user.access_token)
        .await
        .unwrap();
    let state: VoteState = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(state.user_vote.as_deref(), Some("down"));

    let response = server
        .get_auth(&format!("/api/v1/deals/{}", deal.id), &user.access_token)
        .await
        .unwrap();
    let fetched: DealResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.user_vote.as_deref(), Some("down"));
}

#[tokio::test]
async fn test_vote_on_missing_deal() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, user) = register_user(&server).await;

    let response = server
        .post_auth(
            "/api/v1/deals/999999999999/vote",
            &user.access_token,
            &VoteRequest::up(),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_vote_unknown_direction_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = register_admin(&server).await;
    let (shop, category) = setup_catalog(&server, &admin.access_token).await;
    let (_, user) = register_user(&server).await;
    let deal = create_approved_deal(
        &server,
        &user.access_token,
        &admin.access_token,
        &shop.id,
        &category.id,
    )
    .await;

    let response = server
        .post_auth(
            &format!("/api/v1/deals/{}/vote", deal.id),
            &user.access_token,
            &serde_json::json!({ "direction": "sideways" }),
        )
        .await
        .unwrap();
    let status = response.status();
    assert!(
        status == StatusCode::BAD_REQUEST || status == StatusCode::UNPROCESSABLE_ENTITY,
        "expected a 4xx rejection, got {status}"
    );
}

#[tokio::test]
async fn test_recount_is_admin_only() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = register_admin(&server).await;
    let (shop, category) = setup_catalog(&server, &admin.access_token).await;
    let (_, user) = register_user(&server).await;
    let deal = create_approved_deal(
        &server,
        &user.access_token,
        &admin.access_token,
        &shop.id,
        &category.id,
    )
    .await;
    let recount_path = format!("/api/v1/admin/deals/{}/recount", deal.id);

    server
        .post_auth(
            &format!("/api/v1/deals/{}/vote", deal.id),
            &user.access_token,
            &VoteRequest::up(),
        )
        .await
        .unwrap();

    // Regular user is rejected
    let response = server
        .post_auth_empty(&recount_path, &user.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    // Admin recount agrees with the ledger
    let response = server
        .post_auth_empty(&recount_path, &admin.access_token)
        .await
        .unwrap();
    let receipt: VoteReceipt = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(receipt.action, "recounted");
    assert_eq!(
        (receipt.upvotes, receipt.downvotes, receipt.heat_score),
        (1, 0, 2)
    );
}

// ============================================================================
// Deal Listing & Moderation Tests
// ============================================================================

#[tokio::test]
async fn test_pending_deal_hidden_until_approved() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = register_admin(&server).await;
    let (shop, category) = setup_catalog(&server, &admin.access_token).await;
    let (_, user) = register_user(&server).await;

    let response = server
        .post_auth(
            "/api/v1/deals",
            &user.access_token,
            &SubmitDealRequest::unique(&shop.id, &category.id),
        )
        .await
        .unwrap();
    let deal: DealResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(deal.discount_percentage, 40);

    let listing_path = format!("/api/v1/deals?category={}", category.id);

    // Hidden while pending
    let response = server.get(&listing_path).await.unwrap();
    let listed: Vec<DealResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(listed.is_empty());

    // Approve, then it appears
    let response = server
        .post_auth_empty(&format!("/api/v1/admin/deals/{}/approve", deal.id), &admin.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get(&listing_path).await.unwrap();
    let listed: Vec<DealResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, deal.id);
    assert_eq!(listed[0].status, "approved");
}

#[tokio::test]
async fn test_hot_sort_follows_heat_score() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = register_admin(&server).await;
    let (shop, category) = setup_catalog(&server, &admin.access_token).await;
    let (_, user) = register_user(&server).await;

    let cold = create_approved_deal(
        &server,
        &user.access_token,
        &admin.access_token,
        &shop.id,
        &category.id,
    )
    .await;
    let hot = create_approved_deal(
        &server,
        &user.access_token,
        &admin.access_token,
        &shop.id,
        &category.id,
    )
    .await;

    server
        .post_auth(
            &format!("/api/v1/deals/{}/vote", hot.id),
            &user.access_token,
            &VoteRequest::up(),
        )
        .await
        .unwrap();
    server
        .post_auth(
            &format!("/api/v1/deals/{}/vote", cold.id),
            &user.access_token,
            &VoteRequest::down(),
        )
        .await
        .unwrap();

    let response = server
        .get(&format!("/api/v1/deals?category={}&sort=hot", category.id))
        .await
        .unwrap();
    let listed: Vec<DealResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].id, hot.id);
    assert_eq!(listed[0].heat_score, 2);
    assert_eq!(listed[1].id, cold.id);
    assert_eq!(listed[1].heat_score, -1);
}

#[tokio::test]
async fn test_moderation_requires_admin() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = register_admin(&server).await;
    let (shop, category) = setup_catalog(&server, &admin.access_token).await;
    let (_, user) = register_user(&server).await;

    let response = server
        .post_auth(
            "/api/v1/deals",
            &user.access_token,
            &SubmitDealRequest::unique(&shop.id, &category.id),
        )
        .await
        .unwrap();
    let deal: DealResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth_empty(&format!("/api/v1/admin/deals/{}/approve", deal.id), &user.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_invalid_pricing_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = register_admin(&server).await;
    let (shop, category) = setup_catalog(&server, &admin.access_token).await;
    let (_, user) = register_user(&server).await;

    let mut request = SubmitDealRequest::unique(&shop.id, &category.id);
    request.discounted_price = request.original_price;

    let response = server
        .post_auth("/api/v1/deals", &user.access_token, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Comment Tests
// ============================================================================

#[tokio::test]
async fn test_comment_flow() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = register_admin(&server).await;
    let (shop, category) = setup_catalog(&server, &admin.access_token).await;
    let (_, user) = register_user(&server).await;
    let deal = create_approved_deal(
        &server,
        &user.access_token,
        &admin.access_token,
        &shop.id,
        &category.id,
    )
    .await;
    let comments_path = format!("/api/v1/deals/{}/comments", deal.id);

    let response = server
        .post_auth(
            &comments_path,
            &user.access_token,
            &CreateCommentRequest::simple("Price matched locally too"),
        )
        .await
        .unwrap();
    let top: CommentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth(
            &comments_path,
            &user.access_token,
            &CreateCommentRequest {
                content: "Confirmed working".to_string(),
                parent_id: Some(top.id.clone()),
            },
        )
        .await
        .unwrap();
    let reply: CommentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(reply.parent_id.as_deref(), Some(top.id.as_str()));

    let response = server.get(&comments_path).await.unwrap();
    let comments: Vec<CommentResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0].id, top.id);

    // Author can delete their own comment
    let response = server
        .delete_auth(&format!("/api/v1/comments/{}", reply.id), &user.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
}

#[tokio::test]
async fn test_comment_on_pending_deal_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = register_admin(&server).await;
    let (shop, category) = setup_catalog(&server, &admin.access_token).await;
    let (_, user) = register_user(&server).await;

    let response = server
        .post_auth(
            "/api/v1/deals",
            &user.access_token,
            &SubmitDealRequest::unique(&shop.id, &category.id),
        )
        .await
        .unwrap();
    let deal: DealResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth(
            &format!("/api/v1/deals/{}/comments", deal.id),
            &user.access_token,
            &CreateCommentRequest::simple("First!"),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

// ============================================================================
// Catalog Tests
// ============================================================================

#[tokio::test]
async fn test_catalog_management_requires_admin() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, user) = register_user(&server).await;

    let response = server
        .post_auth(
            "/api/v1/admin/shops",
            &user.access_token,
            &CreateShopRequest::unique(),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_shop_browsing_and_coupons() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = register_admin(&server).await;
    let (shop, _) = setup_catalog(&server, &admin.access_token).await;

    // Public lookup by slug
    let response = server
        .get(&format!("/api/v1/shops/{}", shop.slug))
        .await
        .unwrap();
    let fetched: ShopResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.id, shop.id);

    // Admin creates one active and one expired coupon
    let response = server
        .post_auth(
            "/api/v1/admin/coupons",
            &admin.access_token,
            &CreateCouponRequest::unique(&shop.id),
        )
        .await
        .unwrap();
    let active: CouponResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let mut expired = CreateCouponRequest::unique(&shop.id);
    expired.expires_at = Some("2020-01-01T00:00:00Z".to_string());
    let response = server
        .post_auth("/api/v1/admin/coupons", &admin.access_token, &expired)
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    // Public listing shows only the active coupon
    let response = server
        .get(&format!("/api/v1/shops/{}/coupons", shop.slug))
        .await
        .unwrap();
    let coupons: Vec<CouponResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(coupons.len(), 1);
    assert_eq!(coupons[0].id, active.id);

    // Admin listing includes the expired one
    let response = server
        .get_auth(
            &format!("/api/v1/admin/shops/{}/coupons", shop.id),
            &admin.access_token,
        )
        .await
        .unwrap();
    let coupons: Vec<CouponResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(coupons.len(), 2);
}
