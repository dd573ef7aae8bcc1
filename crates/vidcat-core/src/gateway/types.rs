//! YouTube Data API v3 payloads and conversions.

use crate::models::VideoItem;
use serde::Deserialize;

/// Error reasons that mean the daily or per-user quota is spent.
pub(super) const QUOTA_REASONS: &[&str] = &[
    "quotaExceeded",
    "dailyLimitExceeded",
    "rateLimitExceeded",
    "userRateLimitExceeded",
];

/// Error reasons that mean the configured key is unusable.
pub(super) const CREDENTIAL_REASONS: &[&str] = &["keyInvalid", "keyExpired"];

/// `GET /search` response.
#[derive(Debug, Deserialize)]
pub(super) struct SearchListResponse {
    #[serde(default)]
    pub items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
pub(super) struct SearchItem {
    pub id: SearchItemId,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct SearchItemId {
    /// Absent for channel or playlist hits.
    pub video_id: Option<String>,
}

/// `GET /videos` response.
#[derive(Debug, Deserialize)]
pub(super) struct VideoListResponse {
    #[serde(default)]
    pub items: Vec<VideoResource>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct VideoResource {
    pub id: String,
    #[serde(default)]
    pub snippet: Snippet,
    #[serde(default)]
    pub content_details: ContentDetails,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct Snippet {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub channel_title: String,
    #[serde(default)]
    pub published_at: String,
    #[serde(default)]
    pub thumbnails: Thumbnails,
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct Thumbnails {
    pub medium: Option<Thumbnail>,
    pub default: Option<Thumbnail>,
}

#[derive(Debug, Deserialize)]
pub(super) struct Thumbnail {
    pub url: String,
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct ContentDetails {
    #[serde(default)]
    pub duration: String,
}

/// Error envelope returned with non-2xx statuses.
#[derive(Debug, Deserialize)]
pub(super) struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub(super) struct ErrorBody {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub errors: Vec<ErrorDetail>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ErrorDetail {
    #[serde(default)]
    pub reason: String,
}

impl From<VideoResource> for VideoItem {
    fn from(resource: VideoResource) -> Self {
        let thumbnails = resource.snippet.thumbnails;
        let thumbnail = thumbnails
            .medium
            .or(thumbnails.default)
            .map(|t| t.url)
            .unwrap_or_default();

        VideoItem {
            id: resource.id,
            title: resource.snippet.title,
            description: resource.snippet.description,
            thumbnail,
            channel_title: resource.snippet.channel_title,
            published_at: resource.snippet.published_at,
            duration: resource.content_details.duration,
            keyword: String::new(),
        }
    }
}
