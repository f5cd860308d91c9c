//! Repository traits (ports) for data access

mod repositories;

pub use repositories::{
    CategoryRepository, CommentRepository, CouponRepository, DealQuery, DealRepository, DealSort,
    RepoResult, ShopRepository, UserRepository, VoteOutcome, VoteRepository,
};
