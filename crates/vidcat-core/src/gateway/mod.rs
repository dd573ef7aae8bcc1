//! External search gateway.
//!
//! The aggregation engine talks to the video platform only through the
//! [`SearchGateway`] trait:
//! - [`SearchGateway::search_by_keyword`] resolves a keyword to candidate ids
//! - [`SearchGateway::fetch_details`] resolves a batch of ids to full records
//!
//! # Module Organization
//!
//! - [`youtube`] - YouTube Data API v3 client
//! - [`retry`] - Backoff policy for transient upstream failures
//! - [`fixture`] - In-memory gateway with canned results
//! - `types` - Upstream response payloads

pub mod fixture;
pub mod retry;
mod types;
pub mod youtube;

pub use fixture::{sample_video, StaticGateway};
pub use retry::RetryPolicy;
pub use youtube::YouTubeClient;

use crate::models::VideoItem;
use async_trait::async_trait;
use thiserror::Error;

/// Failure of a single upstream call.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GatewayError {
    #[error("YouTube API key is not configured")]
    MissingCredentials,

    #[error("YouTube API quota exceeded")]
    QuotaExceeded,

    #[error("YouTube API returned {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Network error: {message}")]
    Network { message: String },

    #[error("Request timed out")]
    Timeout,

    #[error("Failed to decode YouTube response: {message}")]
    Decode { message: String },
}

/// Result type alias for gateway calls.
pub type GatewayResult<T> = std::result::Result<T, GatewayError>;

impl GatewayError {
    /// Whether repeating the same call might succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            GatewayError::Network { .. } | GatewayError::Timeout => true,
            GatewayError::Http { status, .. } => *status >= 500,
            GatewayError::MissingCredentials
            | GatewayError::QuotaExceeded
            | GatewayError::Decode { .. } => false,
        }
    }
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            GatewayError::Timeout
        } else if err.is_decode() {
            GatewayError::Decode {
                message: err.to_string(),
            }
        } else {
            GatewayError::Network {
                message: err.to_string(),
            }
        }
    }
}

/// Search and detail lookups against the video platform.
#[async_trait]
pub trait SearchGateway: Send + Sync {
    /// Whether the gateway has the credentials it needs to make calls.
    ///
    /// Checked once before an aggregation fans out.
    fn has_credentials(&self) -> bool;

    /// Ids of up to `quota` videos matching `keyword`, in relevance order.
    async fn search_by_keyword(&self, keyword: &str, quota: usize) -> GatewayResult<Vec<String>>;

    /// Full records for `ids`, in one batched call.
    async fn fetch_details(&self, ids: &[String]) -> GatewayResult<Vec<VideoItem>>;
}
