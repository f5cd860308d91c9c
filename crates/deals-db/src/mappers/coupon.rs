//! Coupon entity <-> model mapper

use deals_core::entities::Coupon;
use deals_core::value_objects::Snowflake;

use crate::models::CouponModel;

impl From<CouponModel> for Coupon {
    fn from(model: CouponModel) -> Self {
        Coupon {
            id: Snowflake::new(model.id),
            shop_id: Snowflake::new(model.shop_id),
            code: model.code,
            description: model.description,
            expires_at: model.expires_at,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
