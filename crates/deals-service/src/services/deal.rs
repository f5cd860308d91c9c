//! Deal service
//!
//! Submission, detail, listing, updates, and the moderation workflow.

use deals_core::entities::{Deal, DealStatus};
use deals_core::error::DomainError;
use deals_core::traits::DealQuery;
use deals_core::value_objects::Snowflake;
use tracing::{info, instrument, warn};

use crate::dto::{DealListQuery, DealResponse, SubmitDealRequest, UpdateDealRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::require_admin;

/// Deal service
pub struct DealService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> DealService<'a> {
    /// Create a new DealService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Submit a new deal; it lands pending moderation
    #[instrument(skip(self, request), fields(title = %request.title))]
    pub async fn submit_deal(
        &self,
        submitter_id: Snowflake,
        request: SubmitDealRequest,
    ) -> ServiceResult<DealResponse> {
        if request.discounted_price >= request.original_price {
            return Err(ServiceError::Domain(DomainError::InvalidPricing));
        }

        // Referenced catalog entries must exist
        self.ctx
            .shop_repo()
            .find_by_id(request.shop_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Shop", request.shop_id.to_string()))?;
        self.ctx
            .category_repo()
            .find_by_id(request.category_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Category", request.category_id.to_string()))?;

        let deal = Deal::new(
            self.ctx.generate_id(),
            request.title,
            request.description,
            request.url,
            request.original_price,
            request.discounted_price,
            request.shop_id,
            request.category_id,
            request.tags,
            submitter_id,
        );

        self.ctx.deal_repo().create(&deal).await?;

        info!(deal_id = %deal.id, submitter_id = %submitter_id, "Deal submitted");

        Ok(DealResponse::from_deal(&deal, None))
    }

    /// Deal detail. Bumps the view counter (independently of voting) and
    /// resolves the viewer's vote when the caller is authenticated.
    #[instrument(skip(self))]
    pub async fn get_deal(
        &self,
        deal_id: Snowflake,
        viewer_id: Option<Snowflake>,
    ) -> ServiceResult<DealResponse> {
        let deal = self
            .ctx
            .deal_repo()
            .find_by_id(deal_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Deal", deal_id.to_string()))?;

        // A lost view increment is not worth failing the read
        if let Err(e) = self.ctx.deal_repo().increment_views(deal_id).await {
            warn!(deal_id = %deal_id, error = %e, "View counter increment failed");
        }

        let user_vote = match viewer_id {
            Some(user_id) => self
                .ctx
                .vote_repo()
                .find(deal_id, user_id)
                .await?
                .map(|v| v.direction),
            None => None,
        };

        Ok(DealResponse::from_deal(&deal, user_vote))
    }

    /// Public listing: approved deals only, sorted per the query
    #[instrument(skip(self))]
    pub async fn list_deals(&self, query: DealListQuery) -> ServiceResult<Vec<DealResponse>> {
        let repo_query = DealQuery {
            status: Some(DealStatus::Approved),
            category_id: query.category_id,
            shop_id: query.shop_id,
            tag: query.tag,
            sort: query.sort,
            limit: query.limit,
            offset: query.offset,
        };

        let deals = self.ctx.deal_repo().list(&repo_query).await?;

        Ok(deals
            .iter()
            .map(|deal| DealResponse::from_deal(deal, None))
            .collect())
    }

    /// Moderation queue: deals of any status (admin only)
    #[instrument(skip(self))]
    pub async fn list_deals_for_moderation(
        &self,
        actor_id: Snowflake,
        status: Option<DealStatus>,
        limit: i64,
        offset: i64,
    ) -> ServiceResult<Vec<DealResponse>> {
        require_admin(self.ctx, actor_id).await?;

        let repo_query = DealQuery {
            status,
            limit,
            offset,
            ..Default::default()
        };

        let deals = self.ctx.deal_repo().list(&repo_query).await?;

        Ok(deals
            .iter()
            .map(|deal| DealResponse::from_deal(deal, None))
            .collect())
    }

    /// Update a deal's content; allowed for the submitter and admins
    #[instrument(skip(self, request))]
    pub async fn update_deal(
        &self,
        deal_id: Snowflake,
        actor_id: Snowflake,
        request: UpdateDealRequest,
    ) -> ServiceResult<DealResponse> {
        let mut deal = self
            .ctx
            .deal_repo()
            .find_by_id(deal_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Deal", deal_id.to_string()))?;

        if deal.submitter_id != actor_id {
            require_admin(self.ctx, actor_id).await?;
        }

        if let Some(title) = request.title {
            deal.title = title;
        }
        if let Some(description) = request.description {
            deal.description = description;
        }
        if let Some(url) = request.url {
            deal.url = url;
        }
        if let Some(shop_id) = request.shop_id {
            self.ctx
                .shop_repo()
                .find_by_id(shop_id)
                .await?
                .ok_or_else(|| ServiceError::not_found("Shop", shop_id.to_string()))?;
            deal.shop_id = shop_id;
        }
        if let Some(category_id) = request.category_id {
            self.ctx
                .category_repo()
                .find_by_id(category_id)
                .await?
                .ok_or_else(|| ServiceError::not_found("Category", category_id.to_string()))?;
            deal.category_id = category_id;
        }
        if let Some(tags) = request.tags {
            deal.tags = tags;
        }

        let original = request.original_price.unwrap_or(deal.original_price);
        let discounted = request.discounted_price.unwrap_or(deal.discounted_price);
        if discounted >= original {
            return Err(ServiceError::Domain(DomainError::InvalidPricing));
        }
        deal.reprice(original, discounted);

        self.ctx.deal_repo().update(&deal).await?;

        info!(deal_id = %deal_id, actor_id = %actor_id, "Deal updated");

        Ok(DealResponse::from_deal(&deal, None))
    }

    /// Approve a pending deal (admin only)
    #[instrument(skip(self))]
    pub async fn approve_deal(
        &self,
        deal_id: Snowflake,
        actor_id: Snowflake,
    ) -> ServiceResult<()> {
        self.moderate(deal_id, actor_id, DealStatus::Approved).await
    }

    /// Reject a pending deal (admin only)
    #[instrument(skip(self))]
    pub async fn reject_deal(&self, deal_id: Snowflake, actor_id: Snowflake) -> ServiceResult<()> {
        self.moderate(deal_id, actor_id, DealStatus::Rejected).await
    }

    async fn moderate(
        &self,
        deal_id: Snowflake,
        actor_id: Snowflake,
        status: DealStatus,
    ) -> ServiceResult<()> {
        require_admin(self.ctx, actor_id).await?;

        self.ctx.deal_repo().set_status(deal_id, status).await?;

        info!(
            deal_id = %deal_id,
            actor_id = %actor_id,
            status = status.as_str(),
            "Deal moderated"
        );
        Ok(())
    }

    /// Delete a deal (admin only); ledger rows and comments cascade
    #[instrument(skip(self))]
    pub async fn delete_deal(&self, deal_id: Snowflake, actor_id: Snowflake) -> ServiceResult<()> {
        require_admin(self.ctx, actor_id).await?;

        self.ctx.deal_repo().delete(deal_id).await?;

        info!(deal_id = %deal_id, actor_id = %actor_id, "Deal deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    // Exercised end-to-end by the db and API integration tests.
}
