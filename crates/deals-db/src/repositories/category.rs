//! PostgreSQL implementation of CategoryRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use deals_core::entities::Category;
use deals_core::error::DomainError;
use deals_core::traits::{CategoryRepository, RepoResult};
use deals_core::value_objects::Snowflake;

use crate::models::CategoryModel;

use super::error::{category_not_found, map_db_error, map_unique_violation};

/// PostgreSQL implementation of CategoryRepository
#[derive(Clone)]
pub struct PgCategoryRepository {
    pool: PgPool,
}

impl PgCategoryRepository {
    /// Create a new PgCategoryRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for PgCategoryRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Category>> {
        let result = sqlx::query_as::<_, CategoryModel>(
            r"
            SELECT id, name, slug, description, created_at, updated_at
            FROM categories
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Category::from))
    }

    #[instrument(skip(self))]
    async fn find_by_slug(&self, slug: &str) -> RepoResult<Option<Category>> {
        let result = sqlx::query_as::<_, CategoryModel>(
            r"
            SELECT id, name, slug, description, created_at, updated_at
            FROM categories
            WHERE slug = $1
            ",
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Category::from))
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Category>> {
        let results = sqlx::query_as::<_, CategoryModel>(
            r"
            SELECT id, name, slug, description, created_at, updated_at
            FROM categories
            ORDER BY name
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Category::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, category: &Category) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO categories (id, name, slug, description, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(category.id.into_inner())
        .bind(&category.name)
        .bind(&category.slug)
        .bind(&category.description)
        .bind(category.created_at)
        .bind(category.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            let slug = category.slug.clone();
            map_unique_violation(e, || DomainError::SlugAlreadyExists(slug))
        })?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update(&self, category: &Category) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE categories
            SET name = $2, slug = $3, description = $4, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(category.id.into_inner())
        .bind(&category.name)
        .bind(&category.slug)
        .bind(&category.description)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            let slug = category.slug.clone();
            map_unique_violation(e, || DomainError::SlugAlreadyExists(slug))
        })?;

        if result.rows_affected() == 0 {
            return Err(category_not_found(category.id));
        }
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM categories WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(category_not_found(id));
        }
        Ok(())
    }
}
