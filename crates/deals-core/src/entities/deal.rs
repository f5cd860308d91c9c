//! Deal entity - a user-submitted offer

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Moderation state of a submitted deal
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DealStatus {
    Pending,
    Approved,
    Rejected,
}

impl DealStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "approved" => Some(Self::Approved),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }
}

/// Cached vote-derived counters on a deal row
///
/// These are a denormalized view of the vote ledger; they are written only
/// inside the vote transaction and read everywhere else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DealCounters {
    pub upvotes: i64,
    pub downvotes: i64,
    pub heat_score: i64,
}

/// Deal entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deal {
    pub id: Snowflake,
    pub title: String,
    pub description: String,
    pub url: String,
    /// Prices in minor units (cents)
    pub original_price: i64,
    pub discounted_price: i64,
    pub discount_percentage: i32,
    pub shop_id: Snowflake,
    pub category_id: Snowflake,
    pub tags: Vec<String>,
    pub status: DealStatus,
    pub submitter_id: Snowflake,
    pub upvotes: i64,
    pub downvotes: i64,
    pub heat_score: i64,
    pub views: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Deal {
    /// Create a freshly submitted deal (pending moderation, zeroed counters)
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: Snowflake,
        title: String,
        description: String,
        url: String,
        original_price: i64,
        discounted_price: i64,
        shop_id: Snowflake,
        category_id: Snowflake,
        tags: Vec<String>,
        submitter_id: Snowflake,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            title,
            description,
            url,
            original_price,
            discounted_price,
            discount_percentage: Self::discount_percentage_for(original_price, discounted_price),
            shop_id,
            category_id,
            tags,
            status: DealStatus::Pending,
            submitter_id,
            upvotes: 0,
            downvotes: 0,
            heat_score: 0,
            views: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Percentage saved, rounded down. Never client-supplied.
    pub fn discount_percentage_for(original: i64, discounted: i64) -> i32 {
        if original <= 0 || discounted >= original {
            return 0;
        }
        (((original - discounted) * 100) / original) as i32
    }

    /// Update prices and recompute the discount percentage
    pub fn reprice(&mut self, original: i64, discounted: i64) {
        self.original_price = original;
        self.discounted_price = discounted;
        self.discount_percentage = Self::discount_percentage_for(original, discounted);
        self.updated_at = Utc::now();
    }

    #[inline]
    pub fn is_approved(&self) -> bool {
        self.status == DealStatus::Approved
    }

    /// Snapshot of the cached vote counters
    pub fn counters(&self) -> DealCounters {
        DealCounters {
            upvotes: self.upvotes,
            downvotes: self.downvotes,
            heat_score: self.heat_score,
        }
    }
}
