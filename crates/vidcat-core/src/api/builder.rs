//! Builder for configuring VidcatApi initialization.

use std::sync::Arc;
use std::time::Duration;

use crate::aggregation::Aggregator;
use crate::cache::{Clock, ResultCache, SystemClock};
use crate::config::CacheConfig;
use crate::error::Result;
use crate::gateway::{RetryPolicy, SearchGateway, YouTubeClient};
use crate::store::CategoryStore;
use crate::VidcatApi;

/// Builder for configuring VidcatApi initialization.
///
/// # Example
///
/// ```rust,ignore
/// use vidcat_core::VidcatApi;
///
/// let api = VidcatApi::builder()
///     .api_key(Some("AIza...".to_string()))
///     .seed_categories(false)
///     .build()?;
/// ```
pub struct VidcatApiBuilder {
    api_key: Option<String>,
    base_url: Option<String>,
    retry: Option<RetryPolicy>,
    gateway: Option<Arc<dyn SearchGateway>>,
    clock: Arc<dyn Clock>,
    freshness: Duration,
    seed_categories: bool,
}

impl Default for VidcatApiBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl VidcatApiBuilder {
    pub fn new() -> Self {
        Self {
            api_key: None,
            base_url: None,
            retry: None,
            gateway: None,
            clock: Arc::new(SystemClock),
            freshness: CacheConfig::FRESHNESS_WINDOW,
            seed_categories: true,
        }
    }

    /// YouTube Data API key. Blank keys count as missing.
    pub fn api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key;
        self
    }

    /// Override the YouTube API base URL.
    ///
    /// Default: `https://www.googleapis.com/youtube/v3`
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = Some(retry);
        self
    }

    /// Use a custom gateway instead of the YouTube client.
    ///
    /// When set, `api_key`, `base_url` and `retry_policy` are ignored.
    pub fn gateway(mut self, gateway: Arc<dyn SearchGateway>) -> Self {
        self.gateway = Some(gateway);
        self
    }

    /// Time source for cache freshness.
    ///
    /// Default: the system clock
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// How long cached results stay fresh.
    ///
    /// Default: 10 minutes
    pub fn cache_freshness(mut self, freshness: Duration) -> Self {
        self.freshness = freshness;
        self
    }

    /// Start with the sports, music and tech categories.
    ///
    /// Default: `true`
    pub fn seed_categories(mut self, enable: bool) -> Self {
        self.seed_categories = enable;
        self
    }

    /// Build the VidcatApi instance.
    pub fn build(self) -> Result<VidcatApi> {
        let gateway: Arc<dyn SearchGateway> = match self.gateway {
            Some(gateway) => gateway,
            None => {
                let mut client = YouTubeClient::new(self.api_key)?;
                if let Some(base_url) = self.base_url {
                    client = client.with_base_url(base_url);
                }
                if let Some(retry) = self.retry {
                    client = client.with_retry(retry);
                }
                Arc::new(client)
            }
        };

        let cache = Arc::new(ResultCache::with_clock(self.clock, self.freshness));
        let store = if self.seed_categories {
            CategoryStore::seeded(cache.clone())
        } else {
            CategoryStore::new(cache.clone())
        };

        if !gateway.has_credentials() {
            tracing::warn!("YouTube API key is not configured; searches will fail");
        }

        Ok(VidcatApi {
            store: Arc::new(store),
            cache,
            aggregator: Aggregator::new(gateway),
        })
    }
}
