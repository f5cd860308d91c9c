//! User entity <-> model mapper

use deals_core::entities::{User, UserRole};
use deals_core::error::DomainError;
use deals_core::value_objects::Snowflake;

use crate::models::UserModel;

impl TryFrom<UserModel> for User {
    type Error = DomainError;

    fn try_from(model: UserModel) -> Result<Self, Self::Error> {
        let role = UserRole::parse(&model.role).ok_or_else(|| {
            DomainError::DatabaseError(format!("invalid user role: {}", model.role))
        })?;

        Ok(User {
            id: Snowflake::new(model.id),
            username: model.username,
            email: model.email,
            avatar: model.avatar,
            role,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
