//! Deal entity <-> model mapper

use deals_core::entities::{Deal, DealCounters, DealStatus};
use deals_core::error::DomainError;
use deals_core::value_objects::Snowflake;

use crate::models::{DealCountersModel, DealModel};

impl TryFrom<DealModel> for Deal {
    type Error = DomainError;

    fn try_from(model: DealModel) -> Result<Self, Self::Error> {
        let status = DealStatus::parse(&model.status).ok_or_else(|| {
            DomainError::DatabaseError(format!("invalid deal status: {}", model.status))
        })?;

        Ok(Deal {
            id: Snowflake::new(model.id),
            title: model.title,
            description: model.description,
            url: model.url,
            original_price: model.original_price,
            discounted_price: model.discounted_price,
            discount_percentage: model.discount_percentage,
            shop_id: Snowflake::new(model.shop_id),
            category_id: Snowflake::new(model.category_id),
            tags: model.tags,
            status,
            submitter_id: Snowflake::new(model.submitter_id),
            upvotes: model.upvotes,
            downvotes: model.downvotes,
            heat_score: model.heat_score,
            views: model.views,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

impl From<DealCountersModel> for DealCounters {
    fn from(model: DealCountersModel) -> Self {
        DealCounters {
            upvotes: model.upvotes,
            downvotes: model.downvotes,
            heat_score: model.heat_score,
        }
    }
}
