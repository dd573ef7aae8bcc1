//! Video records returned by the upstream gateway.

use serde::{Deserialize, Serialize};

/// A normalized video record.
///
/// `keyword` is the search keyword whose results produced this record; it is
/// filled in by the aggregation engine, not by the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub thumbnail: String,
    pub channel_title: String,
    /// RFC 3339 publish time as reported upstream.
    pub published_at: String,
    /// ISO-8601 duration, e.g. `PT4M13S`.
    pub duration: String,
    #[serde(default)]
    pub keyword: String,
}

impl VideoItem {
    /// Return the record tagged with the keyword that found it.
    pub fn tagged(mut self, keyword: &str) -> Self {
        self.keyword = keyword.to_string();
        self
    }
}
