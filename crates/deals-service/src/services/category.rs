//! Category service

use deals_core::entities::Category;
use deals_core::value_objects::Snowflake;
use tracing::{info, instrument};

use crate::dto::{CategoryResponse, CreateCategoryRequest, UpdateCategoryRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::require_admin;

/// Category service
pub struct CategoryService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CategoryService<'a> {
    /// Create a new CategoryService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// All categories, alphabetical
    #[instrument(skip(self))]
    pub async fn list_categories(&self) -> ServiceResult<Vec<CategoryResponse>> {
        let categories = self.ctx.category_repo().list().await?;
        Ok(categories.iter().map(CategoryResponse::from).collect())
    }

    /// Look up a category by its URL slug
    #[instrument(skip(self))]
    pub async fn get_category_by_slug(&self, slug: &str) -> ServiceResult<CategoryResponse> {
        let category = self
            .ctx
            .category_repo()
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| ServiceError::not_found("Category", slug.to_string()))?;

        Ok(CategoryResponse::from(&category))
    }

    /// Create a category (admin only)
    #[instrument(skip(self, request), fields(slug = %request.slug))]
    pub async fn create_category(
        &self,
        actor_id: Snowflake,
        request: CreateCategoryRequest,
    ) -> ServiceResult<CategoryResponse> {
        require_admin(self.ctx, actor_id).await?;

        let mut category = Category::new(self.ctx.generate_id(), request.name, request.slug);
        category.description = request.description;

        self.ctx.category_repo().create(&category).await?;

        info!(category_id = %category.id, actor_id = %actor_id, "Category created");

        Ok(CategoryResponse::from(&category))
    }

    /// Update a category (admin only)
    #[instrument(skip(self, request))]
    pub async fn update_category(
        &self,
        category_id: Snowflake,
        actor_id: Snowflake,
        request: UpdateCategoryRequest,
    ) -> ServiceResult<CategoryResponse> {
        require_admin(self.ctx, actor_id).await?;

        let mut category = self
            .ctx
            .category_repo()
            .find_by_id(category_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Category", category_id.to_string()))?;

        if let Some(name) = request.name {
            category.name = name;
        }
        if let Some(slug) = request.slug {
            category.slug = slug;
        }
        if request.description.is_some() {
            category.description = request.description;
        }

        self.ctx.category_repo().update(&category).await?;

        info!(category_id = %category_id, actor_id = %actor_id, "Category updated");

        Ok(CategoryResponse::from(&category))
    }

    /// Delete a category (admin only)
    #[instrument(skip(self))]
    pub async fn delete_category(
        &self,
        category_id: Snowflake,
        actor_id: Snowflake,
    ) -> ServiceResult<()> {
        require_admin(self.ctx, actor_id).await?;

        self.ctx.category_repo().delete(category_id).await?;

        info!(category_id = %category_id, actor_id = %actor_id, "Category deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    // Exercised end-to-end by the db and API integration tests.
}
