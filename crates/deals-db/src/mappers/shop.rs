//! Shop entity <-> model mapper

use deals_core::entities::Shop;
use deals_core::value_objects::Snowflake;

use crate::models::ShopModel;

impl From<ShopModel> for Shop {
    fn from(model: ShopModel) -> Self {
        Shop {
            id: Snowflake::new(model.id),
            name: model.name,
            slug: model.slug,
            website_url: model.website_url,
            description: model.description,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
