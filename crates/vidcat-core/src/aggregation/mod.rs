//! Multi-keyword search aggregation.
//!
//! Given a keyword set and a result bound, the [`Aggregator`]:
//! 1. splits the bound into a per-keyword quota (rounded up)
//! 2. searches and fetches details for every keyword concurrently
//! 3. concatenates the results in keyword order
//! 4. drops videos shorter than a minute
//! 5. deduplicates by id, keeping the first occurrence
//! 6. shuffles uniformly and truncates to the bound
//!
//! A failing keyword is logged, recorded in the outcomes and skipped. Only
//! missing credentials or an empty keyword set abort the whole aggregation;
//! when every keyword fails the result is simply empty.

mod duration;

pub use duration::{meets_min_duration, parse_duration_secs};

use crate::config::{GatewayConfig, SearchConfig};
use crate::error::{Result, VidcatError};
use crate::gateway::{GatewayResult, SearchGateway};
use crate::models::{AggregatedResult, Category, KeywordOutcome, KeywordStatus, VideoItem};
use futures::future::join_all;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Per-keyword share of `result_bound`, rounded up.
pub fn keyword_quota(result_bound: usize, keyword_count: usize) -> usize {
    if keyword_count == 0 {
        return 0;
    }
    result_bound.div_ceil(keyword_count)
}

/// Drop short videos, then keep the first occurrence of each id.
pub fn filter_and_dedup(videos: Vec<VideoItem>, min_duration_secs: u64) -> Vec<VideoItem> {
    let mut seen = HashSet::new();
    videos
        .into_iter()
        .filter(|v| meets_min_duration(&v.duration, min_duration_secs))
        .filter(|v| seen.insert(v.id.clone()))
        .collect()
}

/// Fisher-Yates shuffle, then keep the first `result_bound` videos.
pub fn shuffle_and_truncate<R: Rng + ?Sized>(
    mut videos: Vec<VideoItem>,
    result_bound: usize,
    rng: &mut R,
) -> Vec<VideoItem> {
    videos.shuffle(rng);
    videos.truncate(result_bound);
    videos
}

/// Fans keyword searches out to a [`SearchGateway`] and merges the results.
#[derive(Clone)]
pub struct Aggregator {
    gateway: Arc<dyn SearchGateway>,
    min_duration_secs: u64,
}

impl std::fmt::Debug for Aggregator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Aggregator")
            .field("min_duration_secs", &self.min_duration_secs)
            .field("has_credentials", &self.gateway.has_credentials())
            .finish()
    }
}

impl Aggregator {
    pub fn new(gateway: Arc<dyn SearchGateway>) -> Self {
        Self {
            gateway,
            min_duration_secs: SearchConfig::MIN_DURATION_SECS,
        }
    }

    /// Whether the gateway can make calls at all.
    pub fn has_credentials(&self) -> bool {
        self.gateway.has_credentials()
    }

    /// Fail unless the gateway is configured.
    pub fn ensure_credentials(&self) -> Result<()> {
        if self.gateway.has_credentials() {
            Ok(())
        } else {
            Err(VidcatError::Config {
                message: format!(
                    "YouTube API key is not configured. Please set {} in your .env file.",
                    GatewayConfig::API_KEY_ENV
                ),
            })
        }
    }

    /// Aggregate videos for `keywords`, returning at most `result_bound` of them.
    pub async fn aggregate(
        &self,
        keywords: &[String],
        result_bound: usize,
        category: Option<Category>,
    ) -> Result<AggregatedResult> {
        if keywords.is_empty() {
            return Err(VidcatError::validation(
                "keywords",
                "At least one keyword is required",
            ));
        }
        if result_bound == 0 {
            return Err(VidcatError::validation(
                "maxResults",
                "maxResults must be at least 1",
            ));
        }
        self.ensure_credentials()?;

        let quota = keyword_quota(result_bound, keywords.len());
        debug!(
            "Aggregating {} keywords with quota {} (bound {})",
            keywords.len(),
            quota,
            result_bound
        );

        let (collected, outcomes) = self.fan_out(keywords, quota).await;

        let failed = outcomes.iter().filter(|o| o.is_failure()).count();
        if failed == keywords.len() {
            warn!("All {} keyword searches failed", failed);
        }

        let unique = filter_and_dedup(collected, self.min_duration_secs);
        let total_found = unique.len();
        let videos = shuffle_and_truncate(unique, result_bound, &mut rand::rng());

        info!(
            "Aggregated {} videos ({} found, {} keywords failed)",
            videos.len(),
            total_found,
            failed
        );

        Ok(AggregatedResult {
            videos,
            total_found,
            keywords: keywords.to_vec(),
            category,
            outcomes,
        })
    }

    /// Run every keyword concurrently; results come back in keyword order.
    async fn fan_out(
        &self,
        keywords: &[String],
        quota: usize,
    ) -> (Vec<VideoItem>, Vec<KeywordOutcome>) {
        let searches = keywords
            .iter()
            .map(|keyword| self.search_keyword(keyword, quota));
        let results = join_all(searches).await;

        let mut collected = Vec::new();
        let mut outcomes = Vec::with_capacity(keywords.len());

        for (keyword, result) in keywords.iter().zip(results) {
            match result {
                Ok(videos) => {
                    let outcome = KeywordOutcome::fetched(keyword, videos.len());
                    if let KeywordStatus::Fetched { count } = &outcome.status {
                        debug!("Keyword \"{}\" fetched {} videos", keyword, count);
                    }
                    outcomes.push(outcome);
                    collected.extend(videos.into_iter().map(|v| v.tagged(keyword)));
                }
                Err(e) => {
                    warn!("Error searching for keyword \"{}\": {}", keyword, e);
                    outcomes.push(KeywordOutcome::failed(keyword, e.to_string()));
                }
            }
        }

        (collected, outcomes)
    }

    async fn search_keyword(&self, keyword: &str, quota: usize) -> GatewayResult<Vec<VideoItem>> {
        let ids = self.gateway.search_by_keyword(keyword, quota).await?;
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        self.gateway.fetch_details(&ids).await
    }
}
