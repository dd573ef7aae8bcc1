//! Aggregated search results and per-keyword outcomes.

use super::{Category, VideoItem};
use serde::{Deserialize, Serialize};

/// Result of fanning a keyword set out to the gateway and merging it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedResult {
    /// Shuffled, truncated videos. Never longer than the requested bound.
    pub videos: Vec<VideoItem>,
    /// Number of videos left after filtering and deduplication, before truncation.
    pub total_found: usize,
    pub keywords: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    /// What happened to each keyword. Kept out of the wire format.
    #[serde(skip)]
    pub outcomes: Vec<KeywordOutcome>,
}

impl AggregatedResult {
    /// Keywords whose gateway calls failed.
    pub fn failed_keywords(&self) -> impl Iterator<Item = &KeywordOutcome> {
        self.outcomes.iter().filter(|o| o.is_failure())
    }

    /// Every keyword failed upstream, so the empty result says nothing about the keywords.
    pub fn all_failed(&self) -> bool {
        !self.outcomes.is_empty() && self.outcomes.iter().all(KeywordOutcome::is_failure)
    }
}

/// Outcome of a single keyword's search + detail round trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordOutcome {
    pub keyword: String,
    pub status: KeywordStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum KeywordStatus {
    /// Detail records returned upstream, before any filtering.
    Fetched { count: usize },
    Failed { reason: String },
}

impl KeywordOutcome {
    pub fn fetched(keyword: &str, count: usize) -> Self {
        Self {
            keyword: keyword.to_string(),
            status: KeywordStatus::Fetched { count },
        }
    }

    pub fn failed(keyword: &str, reason: impl Into<String>) -> Self {
        Self {
            keyword: keyword.to_string(),
            status: KeywordStatus::Failed {
                reason: reason.into(),
            },
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self.status, KeywordStatus::Failed { .. })
    }
}
