//! PostgreSQL implementation of ShopRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use deals_core::entities::Shop;
use deals_core::error::DomainError;
use deals_core::traits::{RepoResult, ShopRepository};
use deals_core::value_objects::Snowflake;

use crate::models::ShopModel;

use super::error::{map_db_error, map_unique_violation, shop_not_found};

/// PostgreSQL implementation of ShopRepository
#[derive(Clone)]
pub struct PgShopRepository {
    pool: PgPool,
}

impl PgShopRepository {
    /// Create a new PgShopRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ShopRepository for PgShopRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Shop>> {
        let result = sqlx::query_as::<_, ShopModel>(
            r"
            SELECT id, name, slug, website_url, description, created_at, updated_at
            FROM shops
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Shop::from))
    }

    #[instrument(skip(self))]
    async fn find_by_slug(&self, slug: &str) -> RepoResult<Option<Shop>> {
        let result = sqlx::query_as::<_, ShopModel>(
            r"
            SELECT id, name, slug, website_url, description, created_at, updated_at
            FROM shops
            WHERE slug = $1
            ",
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Shop::from))
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Shop>> {
        let results = sqlx::query_as::<_, ShopModel>(
            r"
            SELECT id, name, slug, website_url, description, created_at, updated_at
            FROM shops
            ORDER BY name
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Shop::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, shop: &Shop) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO shops (id, name, slug, website_url, description, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(shop.id.into_inner())
        .bind(&shop.name)
        .bind(&shop.slug)
        .bind(&shop.website_url)
        .bind(&shop.description)
        .bind(shop.created_at)
        .bind(shop.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            let slug = shop.slug.clone();
            map_unique_violation(e, || DomainError::SlugAlreadyExists(slug))
        })?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update(&self, shop: &Shop) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE shops
            SET name = $2, slug = $3, website_url = $4, description = $5, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(shop.id.into_inner())
        .bind(&shop.name)
        .bind(&shop.slug)
        .bind(&shop.website_url)
        .bind(&shop.description)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            let slug = shop.slug.clone();
            map_unique_violation(e, || DomainError::SlugAlreadyExists(slug))
        })?;

        if result.rows_affected() == 0 {
            return Err(shop_not_found(shop.id));
        }
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM shops WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(shop_not_found(id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgShopRepository>();
    }
}
