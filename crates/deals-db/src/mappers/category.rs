//! Category entity <-> model mapper

use deals_core::entities::Category;
use deals_core::value_objects::Snowflake;

use crate::models::CategoryModel;

impl From<CategoryModel> for Category {
    fn from(model: CategoryModel) -> Self {
        Category {
            id: Snowflake::new(model.id),
            name: model.name,
            slug: model.slug,
            description: model.description,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
