//! # deals-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

// Re-export commonly used types at crate root
pub use dto::{
    AuthResponse, CastVoteRequest, CategoryResponse, CommentResponse, CouponResponse,
    CreateCategoryRequest, CreateCommentRequest, CreateCouponRequest, CreateShopRequest,
    CurrentUserResponse, DealListQuery, DealResponse, LoginRequest, RefreshTokenRequest,
    RegisterRequest, ShopResponse, SubmitDealRequest, UpdateCategoryRequest, UpdateCouponRequest,
    UpdateDealRequest, UpdateShopRequest, UserResponse, VoteReceiptResponse, VoteStateResponse,
};
pub use services::{
    AuthService, CategoryService, CommentService, CouponService, DealService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult, ShopService, VoteService,
};
