//! Coupon service

use deals_core::entities::Coupon;
use deals_core::value_objects::Snowflake;
use tracing::{info, instrument};

use crate::dto::{CouponResponse, CreateCouponRequest, UpdateCouponRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::require_admin;

/// Coupon service
pub struct CouponService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CouponService<'a> {
    /// Create a new CouponService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// All coupons for a shop, expired included (admin only)
    #[instrument(skip(self))]
    pub async fn list_all_coupons(
        &self,
        shop_id: Snowflake,
        actor_id: Snowflake,
    ) -> ServiceResult<Vec<CouponResponse>> {
        require_admin(self.ctx, actor_id).await?;

        self.ctx
            .shop_repo()
            .find_by_id(shop_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Shop", shop_id.to_string()))?;

        let coupons = self.ctx.coupon_repo().find_by_shop(shop_id, false).await?;

        Ok(coupons.iter().map(CouponResponse::from).collect())
    }

    /// Active coupons for a shop addressed by its public slug
    #[instrument(skip(self))]
    pub async fn list_coupons_by_slug(&self, slug: &str) -> ServiceResult<Vec<CouponResponse>> {
        let shop = self
            .ctx
            .shop_repo()
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| ServiceError::not_found("Shop", slug.to_string()))?;

        let coupons = self.ctx.coupon_repo().find_by_shop(shop.id, true).await?;

        Ok(coupons.iter().map(CouponResponse::from).collect())
    }

    /// Create a coupon (admin only)
    #[instrument(skip(self, request), fields(code = %request.code))]
    pub async fn create_coupon(
        &self,
        actor_id: Snowflake,
        request: CreateCouponRequest,
    ) -> ServiceResult<CouponResponse> {
        require_admin(self.ctx, actor_id).await?;

        self.ctx
            .shop_repo()
            .find_by_id(request.shop_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Shop", request.shop_id.to_string()))?;

        let mut coupon = Coupon::new(
            self.ctx.generate_id(),
            request.shop_id,
            request.code,
            request.description,
        );
        coupon.expires_at = request.expires_at;

        self.ctx.coupon_repo().create(&coupon).await?;

        info!(coupon_id = %coupon.id, actor_id = %actor_id, "Coupon created");

        Ok(CouponResponse::from(&coupon))
    }

    /// Update a coupon (admin only)
    #[instrument(skip(self, request))]
    pub async fn update_coupon(
        &self,
        coupon_id: Snowflake,
        actor_id: Snowflake,
        request: UpdateCouponRequest,
    ) -> ServiceResult<CouponResponse> {
        require_admin(self.ctx, actor_id).await?;

        let mut coupon = self
            .ctx
            .coupon_repo()
            .find_by_id(coupon_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Coupon", coupon_id.to_string()))?;

        if let Some(code) = request.code {
            coupon.code = code;
        }
        if let Some(description) = request.description {
            coupon.description = description;
        }
        if request.expires_at.is_some() {
            coupon.expires_at = request.expires_at;
        }

        self.ctx.coupon_repo().update(&coupon).await?;

        info!(coupon_id = %coupon_id, actor_id = %actor_id, "Coupon updated");

        Ok(CouponResponse::from(&coupon))
    }

    /// Delete a coupon (admin only)
    #[instrument(skip(self))]
    pub async fn delete_coupon(
        &self,
        coupon_id: Snowflake,
        actor_id: Snowflake,
    ) -> ServiceResult<()> {
        require_admin(self.ctx, actor_id).await?;

        self.ctx.coupon_repo().delete(coupon_id).await?;

        info!(coupon_id = %coupon_id, actor_id = %actor_id, "Coupon deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    // Exercised end-to-end by the db and API integration tests.
}
