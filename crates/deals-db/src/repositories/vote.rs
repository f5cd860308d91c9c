//! PostgreSQL implementation of VoteRepository
//!
//! The ledger write and the counter update run in one transaction; a lost
//! insert race on the (deal_id, user_id) primary key is retried once as an
//! update against the row the winning writer created.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};
use tracing::{debug, instrument, warn};

use deals_core::entities::{DealCounters, Vote};
use deals_core::error::DomainError;
use deals_core::traits::{RepoResult, VoteOutcome, VoteRepository};
use deals_core::value_objects::{Snowflake, VoteDirection, VoteTransition};

use crate::models::{DealCountersModel, VoteModel};

use super::error::map_db_error;

/// Maximum attempts for one cast: the initial try plus one retry after a
/// lost insert race.
const CAST_ATTEMPTS: u32 = 2;

/// PostgreSQL implementation of VoteRepository
#[derive(Clone)]
pub struct PgVoteRepository {
    pool: PgPool,
}

impl PgVoteRepository {
    /// Create a new PgVoteRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// One attempt at the atomic read-resolve-write sequence.
    ///
    /// Returns `DomainError::VoteConflict` when a concurrent first vote by
    /// the same user won the insert; everything else either commits fully
    /// or rolls back (the transaction is dropped on any early return).
    async fn try_cast(
        &self,
        deal_id: Snowflake,
        user_id: Snowflake,
        direction: VoteDirection,
    ) -> RepoResult<VoteOutcome> {
        let mut tx = self.pool.begin().await.map_err(vote_failed)?;

        // The deal must exist before any ledger write
        let deal_exists = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM deals WHERE id = $1)
            ",
        )
        .bind(deal_id.into_inner())
        .fetch_one(&mut *tx)
        .await
        .map_err(vote_failed)?;

        if !deal_exists {
            return Err(DomainError::DealNotFound(deal_id));
        }

        // Lock this user's ledger row (if any) for the rest of the
        // transaction, serializing per-(deal, user) vote operations.
        let current = sqlx::query_scalar::<_, i16>(
            r"
            SELECT direction FROM votes
            WHERE deal_id = $1 AND user_id = $2
            FOR UPDATE
            ",
        )
        .bind(deal_id.into_inner())
        .bind(user_id.into_inner())
        .fetch_optional(&mut *tx)
        .await
        .map_err(vote_failed)?;

        let current = match current {
            Some(sign) => Some(VoteDirection::from_sign(sign).ok_or_else(|| {
                DomainError::DatabaseError(format!("invalid vote direction: {sign}"))
            })?),
            None => None,
        };

        let transition = VoteTransition::resolve(current, direction);
        self.write_ledger(&mut tx, deal_id, user_id, transition)
            .await?;

        // Apply the transition's score delta to the cached counters in the
        // same transaction.
        let delta = transition.delta();
        let counters = sqlx::query_as::<_, DealCountersModel>(
            r"
            UPDATE deals
            SET upvotes = upvotes + $2,
                downvotes = downvotes + $3,
                heat_score = heat_score + $4
            WHERE id = $1
            RETURNING upvotes, downvotes, heat_score
            ",
        )
        .bind(deal_id.into_inner())
        .bind(delta.upvotes)
        .bind(delta.downvotes)
        .bind(delta.heat)
        .fetch_one(&mut *tx)
        .await
        .map_err(vote_failed)?;

        tx.commit().await.map_err(vote_failed)?;

        Ok(VoteOutcome {
            transition,
            counters: counters.into(),
        })
    }

    /// Insert, update, or delete the ledger row for the resolved transition
    async fn write_ledger(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        deal_id: Snowflake,
        user_id: Snowflake,
        transition: VoteTransition,
    ) -> RepoResult<()> {
        match transition {
            VoteTransition::Cast { to } => {
                sqlx::query(
                    r"
                    INSERT INTO votes (deal_id, user_id, direction, created_at)
                    VALUES ($1, $2, $3, NOW())
                    ",
                )
                .bind(deal_id.into_inner())
                .bind(user_id.into_inner())
                .bind(to.as_sign())
                .execute(&mut **tx)
                .await
                .map_err(|e| {
                    // A unique violation means a concurrent first vote won
                    // the insert; everything else aborts the transaction.
                    if e.as_database_error()
                        .is_some_and(|db| db.is_unique_violation())
                    {
                        DomainError::VoteConflict
                    } else {
                        vote_failed(e)
                    }
                })?;
            }
            VoteTransition::Retract { .. } => {
                sqlx::query(
                    r"
                    DELETE FROM votes WHERE deal_id = $1 AND user_id = $2
                    ",
                )
                .bind(deal_id.into_inner())
                .bind(user_id.into_inner())
                .execute(&mut **tx)
                .await
                .map_err(vote_failed)?;
            }
            VoteTransition::Flip { to, .. } => {
                sqlx::query(
                    r"
                    UPDATE votes SET direction = $3
                    WHERE deal_id = $1 AND user_id = $2
                    ",
                )
                .bind(deal_id.into_inner())
                .bind(user_id.into_inner())
                .bind(to.as_sign())
                .execute(&mut **tx)
                .await
                .map_err(vote_failed)?;
            }
        }
        Ok(())
    }
}

/// Log the storage failure and collapse it to the generic vote error;
/// callers never see driver detail from the vote transaction.
fn vote_failed(e: sqlx::Error) -> DomainError {
    warn!(error = %e, "Vote transaction failed");
    DomainError::VoteFailed
}

#[async_trait]
impl VoteRepository for PgVoteRepository {
    #[instrument(skip(self))]
    async fn cast(
        &self,
        deal_id: Snowflake,
        user_id: Snowflake,
        direction: VoteDirection,
    ) -> RepoResult<VoteOutcome> {
        for attempt in 1..=CAST_ATTEMPTS {
            match self.try_cast(deal_id, user_id, direction).await {
                Err(DomainError::VoteConflict) if attempt < CAST_ATTEMPTS => {
                    // A concurrent insert won; re-reading now sees that row
                    // and the request resolves as a retract or flip.
                    debug!(
                        deal_id = %deal_id,
                        user_id = %user_id,
                        "Vote insert raced, retrying as update"
                    );
                }
                Err(DomainError::VoteConflict) => {
                    warn!(deal_id = %deal_id, user_id = %user_id, "Vote retry exhausted");
                    return Err(DomainError::VoteFailed);
                }
                other => return other,
            }
        }
        unreachable!("cast loop always returns")
    }

    #[instrument(skip(self))]
    async fn find(&self, deal_id: Snowflake, user_id: Snowflake) -> RepoResult<Option<Vote>> {
        let result = sqlx::query_as::<_, VoteModel>(
            r"
            SELECT deal_id, user_id, direction, created_at
            FROM votes
            WHERE deal_id = $1 AND user_id = $2
            ",
        )
        .bind(deal_id.into_inner())
        .bind(user_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Vote::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_deal(&self, deal_id: Snowflake) -> RepoResult<Vec<Vote>> {
        let results = sqlx::query_as::<_, VoteModel>(
            r"
            SELECT deal_id, user_id, direction, created_at
            FROM votes
            WHERE deal_id = $1
            ORDER BY created_at
            ",
        )
        .bind(deal_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(Vote::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn recount(&self, deal_id: Snowflake) -> RepoResult<DealCounters> {
        let counters = sqlx::query_as::<_, DealCountersModel>(
            r"
            UPDATE deals
            SET upvotes = (
                    SELECT COUNT(*) FROM votes WHERE deal_id = $1 AND direction = 1
                ),
                downvotes = (
                    SELECT COUNT(*) FROM votes WHERE deal_id = $1 AND direction = -1
                ),
                heat_score = (
                    SELECT COALESCE(SUM(CASE WHEN direction = 1 THEN 2 ELSE -1 END), 0)
                    FROM votes WHERE deal_id = $1
                )
            WHERE id = $1
            RETURNING upvotes, downvotes, heat_score
            ",
        )
        .bind(deal_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?
        .ok_or(DomainError::DealNotFound(deal_id))?;

        Ok(counters.into())
    }
}
