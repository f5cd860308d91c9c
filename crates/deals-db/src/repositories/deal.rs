//! PostgreSQL implementation of DealRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use deals_core::entities::{Deal, DealStatus};
use deals_core::traits::{DealQuery, DealRepository, DealSort, RepoResult};
use deals_core::value_objects::Snowflake;

use crate::models::DealModel;

use super::error::{deal_not_found, map_db_error};

const DEAL_COLUMNS: &str = "id, title, description, url, original_price, discounted_price, \
     discount_percentage, shop_id, category_id, tags, status, submitter_id, \
     upvotes, downvotes, heat_score, views, created_at, updated_at";

/// ORDER BY clause for a sort mode. Derived from the enum, never from input.
fn order_clause(sort: DealSort) -> &'static str {
    match sort {
        DealSort::Hot => "heat_score DESC",
        DealSort::Newest => "created_at DESC",
        DealSort::Discount => "discount_percentage DESC",
        DealSort::Price => "discounted_price ASC",
    }
}

/// PostgreSQL implementation of DealRepository
#[derive(Clone)]
pub struct PgDealRepository {
    pool: PgPool,
}

impl PgDealRepository {
    /// Create a new PgDealRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DealRepository for PgDealRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Deal>> {
        let result = sqlx::query_as::<_, DealModel>(&format!(
            r"
            SELECT {DEAL_COLUMNS}
            FROM deals
            WHERE id = $1
            "
        ))
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Deal::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn list(&self, query: &DealQuery) -> RepoResult<Vec<Deal>> {
        let limit = query.limit.clamp(1, 100);
        let offset = query.offset.max(0);
        let order = order_clause(query.sort);

        // NULL binds disable the corresponding filter
        let sql = format!(
            r"
            SELECT {DEAL_COLUMNS}
            FROM deals
            WHERE ($1::text IS NULL OR status = $1)
              AND ($2::bigint IS NULL OR category_id = $2)
              AND ($3::bigint IS NULL OR shop_id = $3)
              AND ($4::text IS NULL OR $4 = ANY(tags))
            ORDER BY {order}
            LIMIT $5 OFFSET $6
            "
        );

        let results = sqlx::query_as::<_, DealModel>(&sql)
            .bind(query.status.map(DealStatus::as_str))
            .bind(query.category_id.map(Snowflake::into_inner))
            .bind(query.shop_id.map(Snowflake::into_inner))
            .bind(query.tag.as_deref())
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        results.into_iter().map(Deal::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn create(&self, deal: &Deal) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO deals (id, title, description, url, original_price, discounted_price,
                               discount_percentage, shop_id, category_id, tags, status,
                               submitter_id, upvotes, downvotes, heat_score, views,
                               created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18)
            ",
        )
        .bind(deal.id.into_inner())
        .bind(&deal.title)
        .bind(&deal.description)
        .bind(&deal.url)
        .bind(deal.original_price)
        .bind(deal.discounted_price)
        .bind(deal.discount_percentage)
        .bind(deal.shop_id.into_inner())
        .bind(deal.category_id.into_inner())
        .bind(&deal.tags)
        .bind(deal.status.as_str())
        .bind(deal.submitter_id.into_inner())
        .bind(deal.upvotes)
        .bind(deal.downvotes)
        .bind(deal.heat_score)
        .bind(deal.views)
        .bind(deal.created_at)
        .bind(deal.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    /// Content fields only; counters and views have their own write paths
    #[instrument(skip(self))]
    async fn update(&self, deal: &Deal) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE deals
            SET title = $2, description = $3, url = $4, original_price = $5,
                discounted_price = $6, discount_percentage = $7, shop_id = $8,
                category_id = $9, tags = $10, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(deal.id.into_inner())
        .bind(&deal.title)
        .bind(&deal.description)
        .bind(&deal.url)
        .bind(deal.original_price)
        .bind(deal.discounted_price)
        .bind(deal.discount_percentage)
        .bind(deal.shop_id.into_inner())
        .bind(deal.category_id.into_inner())
        .bind(&deal.tags)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(deal_not_found(deal.id));
        }
        Ok(())
    }

    #[instrument(skip(self))]
    async fn set_status(&self, id: Snowflake, status: DealStatus) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE deals SET status = $2, updated_at = NOW() WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .bind(status.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(deal_not_found(id));
        }
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM deals WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(deal_not_found(id));
        }
        Ok(())
    }

    /// Single independent statement; never part of the vote transaction
    #[instrument(skip(self))]
    async fn increment_views(&self, id: Snowflake) -> RepoResult<()> {
        sqlx::query(
            r"
            UPDATE deals SET views = views + 1 WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_clause_per_sort() {
        assert_eq!(order_clause(DealSort::Hot), "heat_score DESC");
        assert_eq!(order_clause(DealSort::Newest), "created_at DESC");
        assert_eq!(order_clause(DealSort::Discount), "discount_percentage DESC");
        assert_eq!(order_clause(DealSort::Price), "discounted_price ASC");
    }

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgDealRepository>();
    }
}
