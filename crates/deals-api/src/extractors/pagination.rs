//! Pagination extractor
//!
//! Extracts limit/offset pagination parameters from query strings.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::Deserialize;

use crate::response::ApiError;

/// Default page size
const DEFAULT_LIMIT: i64 = 30;
/// Maximum page size
const MAX_LIMIT: i64 = 100;

/// Raw pagination query parameters
#[derive(Debug, Deserialize)]
pub struct PaginationParams {
    #[serde(default)]
    pub limit: Option<i64>,
    #[serde(default)]
    pub offset: Option<i64>,
}

/// Validated pagination parameters
#[derive(Debug, Clone, Copy)]
pub struct Pagination {
    /// Maximum number of items to return (clamped to 1-100)
    pub limit: i64,
    /// Number of items to skip
    pub offset: i64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

impl From<PaginationParams> for Pagination {
    fn from(params: PaginationParams) -> Self {
        Self {
            limit: params.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT),
            offset: params.offset.unwrap_or(0).max(0),
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Pagination
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<PaginationParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.to_string()))?;

        Ok(Pagination::from(params))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pagination() {
        let pagination = Pagination::default();
        assert_eq!(pagination.limit, DEFAULT_LIMIT);
        assert_eq!(pagination.offset, 0);
    }

    #[test]
    fn test_limit_and_offset_clamping() {
        let pagination = Pagination::from(PaginationParams {
            limit: Some(500),
            offset: Some(-3),
        });
        assert_eq!(pagination.limit, MAX_LIMIT);
        assert_eq!(pagination.offset, 0);

        let pagination = Pagination::from(PaginationParams {
            limit: Some(0),
            offset: Some(60),
        });
        assert_eq!(pagination.limit, 1);
        assert_eq!(pagination.offset, 60);
    }
}
