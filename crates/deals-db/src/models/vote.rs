//! Vote database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the votes ledger table.
///
/// `direction` uses the sign encoding: +1 for up, -1 for down (CHECK
/// constrained in the schema).
#[derive(Debug, Clone, FromRow)]
pub struct VoteModel {
    pub deal_id: i64,
    pub user_id: i64,
    pub direction: i16,
    pub created_at: DateTime<Utc>,
}
