//! Data transfer objects for the application layer

mod mappers;
mod requests;
mod responses;

pub use requests::{
    CastVoteRequest, CreateCategoryRequest, CreateCommentRequest, CreateCouponRequest,
    CreateShopRequest, DealListQuery, LoginRequest, RefreshTokenRequest, RegisterRequest,
    SubmitDealRequest, UpdateCategoryRequest, UpdateCouponRequest, UpdateDealRequest,
    UpdateShopRequest,
};
pub use responses::{
    AuthResponse, CategoryResponse, CommentResponse, CouponResponse, CurrentUserResponse,
    DealResponse, ShopResponse, UserResponse, VoteReceiptResponse, VoteStateResponse,
};
