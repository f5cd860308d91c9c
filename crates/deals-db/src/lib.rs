//! # deals-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for all repository traits
//! defined in `deals-core`. It handles:
//!
//! - Connection pool management and schema migrations
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - Repository implementations, including the transactional vote ledger
//!
//! ## Usage
//!
//! ```rust,ignore
//! use deals_db::pool::{create_pool, DatabaseConfig};
//! use deals_db::repositories::PgDealRepository;
//! use deals_core::traits::DealRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env();
//!     let pool = create_pool(&config).await?;
//!     let deal_repo = PgDealRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, ping, run_migrations, DatabaseConfig, PgPool};
pub use repositories::{
    PgCategoryRepository, PgCommentRepository, PgCouponRepository, PgDealRepository,
    PgShopRepository, PgUserRepository, PgVoteRepository,
};
