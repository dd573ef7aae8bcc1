//! YouTube Data API v3 client.
//!
//! One `search` call per keyword yields candidate ids; one `videos` call per
//! batch resolves them to snippets and content details.

use super::retry::RetryPolicy;
use super::types::{
    ErrorEnvelope, SearchListResponse, VideoListResponse, CREDENTIAL_REASONS, QUOTA_REASONS,
};
use super::{GatewayError, GatewayResult, SearchGateway};
use crate::config::GatewayConfig;
use crate::error::{Result, VidcatError};
use crate::models::VideoItem;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Client for the YouTube Data API.
pub struct YouTubeClient {
    client: Client,
    /// API key. Calls fail with [`GatewayError::MissingCredentials`] when absent.
    api_key: Option<String>,
    base_url: String,
    retry: RetryPolicy,
}

impl std::fmt::Debug for YouTubeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("YouTubeClient")
            .field("base_url", &self.base_url)
            .field("has_api_key", &self.api_key.is_some())
            .field("retry", &self.retry)
            .finish()
    }
}

impl YouTubeClient {
    /// Create a client against the public API.
    ///
    /// A missing or blank key is accepted here and reported per request.
    pub fn new(api_key: Option<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(GatewayConfig::REQUEST_TIMEOUT)
            .connect_timeout(GatewayConfig::CONNECT_TIMEOUT)
            .user_agent(GatewayConfig::USER_AGENT)
            .build()
            .map_err(|e| VidcatError::Config {
                message: format!("Failed to create HTTP client: {}", e),
            })?;

        Ok(Self {
            client,
            api_key: api_key
                .map(|k| k.trim().to_string())
                .filter(|k| !k.is_empty()),
            base_url: GatewayConfig::API_BASE_URL.to_string(),
            retry: RetryPolicy::default(),
        })
    }

    /// Point the client at a different API root (e.g. a local mock).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    fn api_key(&self) -> GatewayResult<&str> {
        self.api_key
            .as_deref()
            .ok_or(GatewayError::MissingCredentials)
    }

    /// GET `{base_url}/{endpoint}` with the key appended, decoding JSON.
    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, String)],
    ) -> GatewayResult<T> {
        let key = self.api_key()?;
        let url = format!("{}/{}", self.base_url, endpoint);
        let url = url.as_str();
        let client = &self.client;

        self.retry
            .run(endpoint, || async move {
                let response = client
                    .get(url)
                    .query(query)
                    .query(&[("key", key)])
                    .send()
                    .await?;

                let status = response.status();
                if !status.is_success() {
                    let body = response.text().await.unwrap_or_default();
                    return Err(classify_error(status, &body));
                }

                response.json::<T>().await.map_err(|e| GatewayError::Decode {
                    message: e.to_string(),
                })
            })
            .await
    }
}

/// Map a non-success response onto a [`GatewayError`].
pub(super) fn classify_error(status: StatusCode, body: &str) -> GatewayError {
    let envelope = serde_json::from_str::<ErrorEnvelope>(body).ok();
    let reasons: Vec<&str> = envelope
        .as_ref()
        .map(|e| e.error.errors.iter().map(|d| d.reason.as_str()).collect())
        .unwrap_or_default();

    if reasons.iter().any(|r| QUOTA_REASONS.contains(r)) {
        return GatewayError::QuotaExceeded;
    }
    if reasons.iter().any(|r| CREDENTIAL_REASONS.contains(r)) {
        return GatewayError::MissingCredentials;
    }

    let message = envelope
        .map(|e| e.error.message)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string()
        });

    GatewayError::Http {
        status: status.as_u16(),
        message,
    }
}

#[async_trait]
impl SearchGateway for YouTubeClient {
    fn has_credentials(&self) -> bool {
        self.api_key.is_some()
    }

    async fn search_by_keyword(&self, keyword: &str, quota: usize) -> GatewayResult<Vec<String>> {
        let max_results = quota.clamp(1, GatewayConfig::MAX_RESULTS_PER_CALL);
        let query = [
            ("part", "snippet".to_string()),
            ("q", keyword.to_string()),
            ("maxResults", max_results.to_string()),
            ("type", "video".to_string()),
            ("videoDuration", "medium".to_string()),
            ("order", "relevance".to_string()),
        ];

        let response: SearchListResponse = self.get_json("search", &query).await?;
        let ids: Vec<String> = response
            .items
            .into_iter()
            .filter_map(|item| item.id.video_id)
            .collect();

        debug!("Search '{}' returned {} video ids", keyword, ids.len());
        Ok(ids)
    }

    async fn fetch_details(&self, ids: &[String]) -> GatewayResult<Vec<VideoItem>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let query = [
            ("part", "contentDetails,snippet".to_string()),
            ("id", ids.join(",")),
        ];

        let response: VideoListResponse = self.get_json("videos", &query).await?;
        Ok(response.items.into_iter().map(VideoItem::from).collect())
    }
}
