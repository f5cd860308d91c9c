//! Entity -> response DTO mappers

use deals_core::entities::{Category, Comment, Coupon, Deal, Shop, User};
use deals_core::traits::VoteOutcome;
use deals_core::value_objects::{Snowflake, VoteDirection};

use super::responses::{
    CategoryResponse, CommentResponse, CouponResponse, CurrentUserResponse, DealResponse,
    ShopResponse, UserResponse, VoteReceiptResponse, VoteStateResponse,
};

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.clone(),
            avatar: user.avatar.clone(),
            created_at: user.created_at,
        }
    }
}

impl From<&User> for CurrentUserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.clone(),
            email: user.email.clone(),
            avatar: user.avatar.clone(),
            role: user.role.as_str().to_string(),
            created_at: user.created_at,
        }
    }
}

impl DealResponse {
    /// Build a response from a deal and the caller's vote (if resolved)
    pub fn from_deal(deal: &Deal, user_vote: Option<VoteDirection>) -> Self {
        Self {
            id: deal.id.to_string(),
            title: deal.title.clone(),
            description: deal.description.clone(),
            url: deal.url.clone(),
            original_price: deal.original_price,
            discounted_price: deal.discounted_price,
            discount_percentage: deal.discount_percentage,
            shop_id: deal.shop_id.to_string(),
            category_id: deal.category_id.to_string(),
            tags: deal.tags.clone(),
            status: deal.status.as_str().to_string(),
            submitter_id: deal.submitter_id.to_string(),
            upvotes: deal.upvotes,
            downvotes: deal.downvotes,
            heat_score: deal.heat_score,
            views: deal.views,
            user_vote,
            created_at: deal.created_at,
            updated_at: deal.updated_at,
        }
    }
}

impl VoteReceiptResponse {
    pub fn from_outcome(deal_id: Snowflake, outcome: &VoteOutcome) -> Self {
        Self {
            deal_id: deal_id.to_string(),
            action: outcome.transition.kind().to_string(),
            user_vote: outcome.transition.outcome(),
            upvotes: outcome.counters.upvotes,
            downvotes: outcome.counters.downvotes,
            heat_score: outcome.counters.heat_score,
        }
    }
}

impl VoteStateResponse {
    pub fn new(deal_id: Snowflake, user_vote: Option<VoteDirection>) -> Self {
        Self {
            deal_id: deal_id.to_string(),
            user_vote,
        }
    }
}

impl From<&Comment> for CommentResponse {
    fn from(comment: &Comment) -> Self {
        Self {
            id: comment.id.to_string(),
            deal_id: comment.deal_id.to_string(),
            author_id: comment.author_id.to_string(),
            parent_id: comment.parent_id.map(|id| id.to_string()),
            content: comment.content.clone(),
            created_at: comment.created_at,
        }
    }
}

impl From<&Shop> for ShopResponse {
    fn from(shop: &Shop) -> Self {
        Self {
            id: shop.id.to_string(),
            name: shop.name.clone(),
            slug: shop.slug.clone(),
            website_url: shop.website_url.clone(),
            description: shop.description.clone(),
            created_at: shop.created_at,
        }
    }
}

impl From<&Category> for CategoryResponse {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id.to_string(),
            name: category.name.clone(),
            slug: category.slug.clone(),
            description: category.description.clone(),
            created_at: category.created_at,
        }
    }
}

impl From<&Coupon> for CouponResponse {
    fn from(coupon: &Coupon) -> Self {
        Self {
            id: coupon.id.to_string(),
            shop_id: coupon.shop_id.to_string(),
            code: coupon.code.clone(),
            description: coupon.description.clone(),
            expires_at: coupon.expires_at,
            created_at: coupon.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deals_core::entities::DealCounters;
    use deals_core::value_objects::VoteTransition;

    #[test]
    fn test_vote_receipt_from_outcome() {
        let outcome = VoteOutcome {
            transition: VoteTransition::Flip {
                from: VoteDirection::Down,
                to: VoteDirection::Up,
            },
            counters: DealCounters {
                upvotes: 3,
                downvotes: 1,
                heat_score: 5,
            },
        };

        let receipt = VoteReceiptResponse::from_outcome(Snowflake::new(9), &outcome);
        assert_eq!(receipt.deal_id, "9");
        assert_eq!(receipt.action, "flipped");
        assert_eq!(receipt.user_vote, Some(VoteDirection::Up));
        assert_eq!(receipt.heat_score, 5);
    }

    #[test]
    fn test_retraction_receipt_has_no_vote() {
        let outcome = VoteOutcome {
            transition: VoteTransition::Retract {
                from: VoteDirection::Up,
            },
            counters: DealCounters::default(),
        };

        let receipt = VoteReceiptResponse::from_outcome(Snowflake::new(9), &outcome);
        assert_eq!(receipt.action, "retracted");
        assert_eq!(receipt.user_vote, None);
    }
}
