//! Vote entity - one ledger row per (deal, user) pair

use chrono::{DateTime, Utc};

use crate::value_objects::{Snowflake, VoteDirection};

/// A user's current vote on a deal.
///
/// The (deal_id, user_id) pair is unique in the ledger; the row is deleted
/// on retraction rather than kept with a neutral direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vote {
    pub deal_id: Snowflake,
    pub user_id: Snowflake,
    pub direction: VoteDirection,
    pub created_at: DateTime<Utc>,
}

impl Vote {
    pub fn new(deal_id: Snowflake, user_id: Snowflake, direction: VoteDirection) -> Self {
        Self {
            deal_id,
            user_id,
            direction,
            created_at: Utc::now(),
        }
    }
}
