//! Aggregated search endpoints.

use crate::error::{ApiError, ApiResult};
use crate::server::AppState;
use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;
use vidcat_core::config::SearchConfig;
use vidcat_core::{AggregatedResult, CacheLookup};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub max_results: Option<String>,
}

/// Aggregated result plus cache metadata on hits.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    #[serde(flatten)]
    result: AggregatedResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    cached: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cache_expires: Option<String>,
}

impl From<CacheLookup> for SearchResponse {
    fn from(lookup: CacheLookup) -> Self {
        let (cached, cache_expires) = if lookup.from_cache {
            (
                Some(true),
                Some(lookup.expires_at.to_rfc3339_opts(SecondsFormat::Millis, true)),
            )
        } else {
            (None, None)
        };
        Self {
            result: lookup.data,
            cached,
            cache_expires,
        }
    }
}

/// Parse `maxResults`, defaulting when absent.
fn parse_max_results(raw: Option<&str>) -> ApiResult<usize> {
    let Some(raw) = raw else {
        return Ok(SearchConfig::DEFAULT_MAX_RESULTS);
    };
    match raw.trim().parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(ApiError::bad_request("maxResults must be a positive integer")
            .with_details(vec![format!("got '{}'", raw)])),
    }
}

/// `GET /api/search/category/:id?maxResults=N`
pub async fn search_category(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(params): Query<SearchParams>,
) -> ApiResult<Json<SearchResponse>> {
    let max_results = parse_max_results(params.max_results.as_deref())?;
    debug!("Category search '{}' (maxResults={})", id, max_results);

    let lookup = state.api.search_category(&id, max_results).await?;
    Ok(Json(lookup.into()))
}

/// `GET /api/search?q=kw1,kw2&maxResults=N`
pub async fn search_keywords(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> ApiResult<Json<SearchResponse>> {
    let query = params.q.unwrap_or_default();
    let max_results = parse_max_results(params.max_results.as_deref())?;
    debug!("Keyword search '{}' (maxResults={})", query, max_results);

    let lookup = state.api.search_keywords(&query, max_results).await?;
    Ok(Json(lookup.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_results_default() {
        assert_eq!(parse_max_results(None).unwrap(), 50);
    }

    #[test]
    fn test_max_results_parsing() {
        assert_eq!(parse_max_results(Some("12")).unwrap(), 12);
        assert_eq!(parse_max_results(Some(" 3 ")).unwrap(), 3);
        assert!(parse_max_results(Some("0")).is_err());
        assert!(parse_max_results(Some("-4")).is_err());
        assert!(parse_max_results(Some("ten")).is_err());
    }
}
