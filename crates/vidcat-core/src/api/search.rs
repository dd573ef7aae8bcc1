//! Cached search methods.

use crate::cache::{category_key, search_key, CacheLookup};
use crate::error::{Result, VidcatError};
use crate::VidcatApi;
use tracing::info;

/// Split a comma-separated query into trimmed, non-empty keywords.
///
/// # Examples
///
/// ```
/// use vidcat_core::parse_query;
///
/// assert_eq!(parse_query(" golf, ,tennis "), vec!["golf", "tennis"]);
/// assert!(parse_query(" , ").is_empty());
/// ```
pub fn parse_query(query: &str) -> Vec<String> {
    query
        .split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect()
}

fn check_bound(max_results: usize) -> Result<()> {
    if max_results == 0 {
        return Err(VidcatError::validation(
            "maxResults",
            "maxResults must be a positive integer",
        ));
    }
    Ok(())
}

impl VidcatApi {
    /// Aggregate videos for a category's keywords.
    ///
    /// Unknown categories fail before the cache is consulted. A fresh cached
    /// result is returned without touching the gateway.
    pub async fn search_category(&self, id: &str, max_results: usize) -> Result<CacheLookup> {
        check_bound(max_results)?;
        let category = self.store.get(id).await?;
        let key = category_key(&category.id, max_results);

        let lookup = self
            .cache
            .get_or_compute(&key, || async move {
                self.aggregator
                    .aggregate(&category.keywords, max_results, Some(category.clone()))
                    .await
            })
            .await?;

        info!(
            "Category '{}' search returned {} videos (cached: {})",
            id,
            lookup.data.videos.len(),
            lookup.from_cache
        );
        Ok(lookup)
    }

    /// Aggregate videos for a comma-separated free-text query.
    pub async fn search_keywords(&self, query: &str, max_results: usize) -> Result<CacheLookup> {
        let keywords = parse_query(query);
        if keywords.is_empty() {
            return Err(VidcatError::validation("q", "Search query is required"));
        }
        check_bound(max_results)?;
        let key = search_key(&keywords, max_results);

        let lookup = self
            .cache
            .get_or_compute(&key, || async move {
                self.aggregator.aggregate(&keywords, max_results, None).await
            })
            .await?;

        info!(
            "Keyword search '{}' returned {} videos (cached: {})",
            query,
            lookup.data.videos.len(),
            lookup.from_cache
        );
        Ok(lookup)
    }
}
