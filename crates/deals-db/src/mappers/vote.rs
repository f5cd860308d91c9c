//! Vote entity <-> model mapper

use deals_core::entities::Vote;
use deals_core::error::DomainError;
use deals_core::value_objects::{Snowflake, VoteDirection};

use crate::models::VoteModel;

impl TryFrom<VoteModel> for Vote {
    type Error = DomainError;

    fn try_from(model: VoteModel) -> Result<Self, Self::Error> {
        let direction = VoteDirection::from_sign(model.direction).ok_or_else(|| {
            DomainError::DatabaseError(format!("invalid vote direction: {}", model.direction))
        })?;

        Ok(Vote {
            deal_id: Snowflake::new(model.deal_id),
            user_id: Snowflake::new(model.user_id),
            direction,
            created_at: model.created_at,
        })
    }
}
