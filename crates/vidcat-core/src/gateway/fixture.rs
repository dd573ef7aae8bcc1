//! In-memory gateway serving canned results.
//!
//! Test support for this crate and for crates building on [`crate::VidcatApi`].
//! Keywords without registered videos return no ids.

use super::{GatewayError, GatewayResult, SearchGateway};
use crate::models::VideoItem;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

/// Gateway backed by per-keyword video lists.
#[derive(Debug)]
pub struct StaticGateway {
    results: HashMap<String, Vec<VideoItem>>,
    failures: HashMap<String, GatewayError>,
    credentials: bool,
    latency: Option<Duration>,
    search_calls: AtomicUsize,
    detail_calls: AtomicUsize,
    quotas: Mutex<Vec<(String, usize)>>,
}

impl Default for StaticGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl StaticGateway {
    pub fn new() -> Self {
        Self {
            results: HashMap::new(),
            failures: HashMap::new(),
            credentials: true,
            latency: None,
            search_calls: AtomicUsize::new(0),
            detail_calls: AtomicUsize::new(0),
            quotas: Mutex::new(Vec::new()),
        }
    }

    /// Register the videos a keyword search resolves to, in relevance order.
    pub fn with_videos(mut self, keyword: &str, videos: Vec<VideoItem>) -> Self {
        self.results.insert(keyword.to_string(), videos);
        self
    }

    /// Make every search for `keyword` fail with `error`.
    pub fn with_failure(mut self, keyword: &str, error: GatewayError) -> Self {
        self.failures.insert(keyword.to_string(), error);
        self
    }

    /// Report missing credentials, as an unconfigured client would.
    pub fn without_credentials(mut self) -> Self {
        self.credentials = false;
        self
    }

    /// Delay every search by `latency`.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    pub fn search_calls(&self) -> usize {
        self.search_calls.load(Ordering::SeqCst)
    }

    pub fn detail_calls(&self) -> usize {
        self.detail_calls.load(Ordering::SeqCst)
    }

    /// `(keyword, quota)` pairs in the order searches were issued.
    pub fn requested_quotas(&self) -> Vec<(String, usize)> {
        self.quotas
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn find_video(&self, id: &str) -> Option<&VideoItem> {
        self.results.values().flatten().find(|v| v.id == id)
    }
}

/// A minimal video record for fixtures.
pub fn sample_video(id: &str, duration: &str) -> VideoItem {
    VideoItem {
        id: id.to_string(),
        title: format!("Video {}", id),
        description: String::new(),
        thumbnail: format!("https://i.ytimg.com/vi/{}/mqdefault.jpg", id),
        channel_title: "Fixture Channel".to_string(),
        published_at: "2024-01-01T00:00:00Z".to_string(),
        duration: duration.to_string(),
        keyword: String::new(),
    }
}

#[async_trait]
impl SearchGateway for StaticGateway {
    fn has_credentials(&self) -> bool {
        self.credentials
    }

    async fn search_by_keyword(&self, keyword: &str, quota: usize) -> GatewayResult<Vec<String>> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        self.quotas
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push((keyword.to_string(), quota));

        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }

        if !self.credentials {
            return Err(GatewayError::MissingCredentials);
        }
        if let Some(error) = self.failures.get(keyword) {
            return Err(error.clone());
        }

        Ok(self
            .results
            .get(keyword)
            .map(|videos| videos.iter().take(quota).map(|v| v.id.clone()).collect())
            .unwrap_or_default())
    }

    async fn fetch_details(&self, ids: &[String]) -> GatewayResult<Vec<VideoItem>> {
        self.detail_calls.fetch_add(1, Ordering::SeqCst);
        Ok(ids
            .iter()
            .filter_map(|id| self.find_video(id).cloned())
            .collect())
    }
}
