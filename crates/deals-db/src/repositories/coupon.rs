//! PostgreSQL implementation of CouponRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use deals_core::entities::Coupon;
use deals_core::traits::{CouponRepository, RepoResult};
use deals_core::value_objects::Snowflake;

use crate::models::CouponModel;

use super::error::{coupon_not_found, map_db_error};

/// PostgreSQL implementation of CouponRepository
#[derive(Clone)]
pub struct PgCouponRepository {
    pool: PgPool,
}

impl PgCouponRepository {
    /// Create a new PgCouponRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CouponRepository for PgCouponRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Coupon>> {
        let result = sqlx::query_as::<_, CouponModel>(
            r"
            SELECT id, shop_id, code, description, expires_at, created_at, updated_at
            FROM coupons
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Coupon::from))
    }

    #[instrument(skip(self))]
    async fn find_by_shop(&self, shop_id: Snowflake, only_active: bool) -> RepoResult<Vec<Coupon>> {
        let results = sqlx::query_as::<_, CouponModel>(
            r"
            SELECT id, shop_id, code, description, expires_at, created_at, updated_at
            FROM coupons
            WHERE shop_id = $1
              AND (NOT $2 OR expires_at IS NULL OR expires_at > NOW())
            ORDER BY created_at DESC
            ",
        )
        .bind(shop_id.into_inner())
        .bind(only_active)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Coupon::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, coupon: &Coupon) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO coupons (id, shop_id, code, description, expires_at, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(coupon.id.into_inner())
        .bind(coupon.shop_id.into_inner())
        .bind(&coupon.code)
        .bind(&coupon.description)
        .bind(coupon.expires_at)
        .bind(coupon.created_at)
        .bind(coupon.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update(&self, coupon: &Coupon) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE coupons
            SET code = $2, description = $3, expires_at = $4, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(coupon.id.into_inner())
        .bind(&coupon.code)
        .bind(&coupon.description)
        .bind(coupon.expires_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(coupon_not_found(coupon.id));
        }
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM coupons WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(coupon_not_found(id));
        }
        Ok(())
    }
}
