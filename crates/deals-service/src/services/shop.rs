//! Shop service
//!
//! Public browsing plus admin-only catalog management.

use deals_core::entities::Shop;
use deals_core::value_objects::Snowflake;
use tracing::{info, instrument};

use crate::dto::{CreateShopRequest, ShopResponse, UpdateShopRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::require_admin;

/// Shop service
pub struct ShopService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ShopService<'a> {
    /// Create a new ShopService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// All shops, alphabetical
    #[instrument(skip(self))]
    pub async fn list_shops(&self) -> ServiceResult<Vec<ShopResponse>> {
        let shops = self.ctx.shop_repo().list().await?;
        Ok(shops.iter().map(ShopResponse::from).collect())
    }

    /// Look up a shop by its URL slug
    #[instrument(skip(self))]
    pub async fn get_shop_by_slug(&self, slug: &str) -> ServiceResult<ShopResponse> {
        let shop = self
            .ctx
            .shop_repo()
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| ServiceError::not_found("Shop", slug.to_string()))?;

        Ok(ShopResponse::from(&shop))
    }

    /// Create a shop (admin only)
    #[instrument(skip(self, request), fields(slug = %request.slug))]
    pub async fn create_shop(
        &self,
        actor_id: Snowflake,
        request: CreateShopRequest,
    ) -> ServiceResult<ShopResponse> {
        require_admin(self.ctx, actor_id).await?;

        let mut shop = Shop::new(self.ctx.generate_id(), request.name, request.slug);
        shop.website_url = request.website_url;
        shop.description = request.description;

        self.ctx.shop_repo().create(&shop).await?;

        info!(shop_id = %shop.id, actor_id = %actor_id, "Shop created");

        Ok(ShopResponse::from(&shop))
    }

    /// Update a shop (admin only)
    #[instrument(skip(self, request))]
    pub async fn update_shop(
        &self,
        shop_id: Snowflake,
        actor_id: Snowflake,
        request: UpdateShopRequest,
    ) -> ServiceResult<ShopResponse> {
        require_admin(self.ctx, actor_id).await?;

        let mut shop = self
            .ctx
            .shop_repo()
            .find_by_id(shop_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Shop", shop_id.to_string()))?;

        if let Some(name) = request.name {
            shop.name = name;
        }
        if let Some(slug) = request.slug {
            shop.slug = slug;
        }
        if request.website_url.is_some() {
            shop.website_url = request.website_url;
        }
        if request.description.is_some() {
            shop.description = request.description;
        }

        self.ctx.shop_repo().update(&shop).await?;

        info!(shop_id = %shop_id, actor_id = %actor_id, "Shop updated");

        Ok(ShopResponse::from(&shop))
    }

    /// Delete a shop (admin only)
    #[instrument(skip(self))]
    pub async fn delete_shop(&self, shop_id: Snowflake, actor_id: Snowflake) -> ServiceResult<()> {
        require_admin(self.ctx, actor_id).await?;

        self.ctx.shop_repo().delete(shop_id).await?;

        info!(shop_id = %shop_id, actor_id = %actor_id, "Shop deleted");
        Ok(())
    }
}
