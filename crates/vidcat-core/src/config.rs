//! Centralized configuration for Vidcat.
//!
//! Constants for the upstream gateway, the result cache, category defaults
//! and search request defaults. Runtime values (credentials, bind address)
//! are supplied by the server binary.

use std::time::Duration;

/// YouTube Data API gateway configuration.
pub struct GatewayConfig;

impl GatewayConfig {
    pub const API_BASE_URL: &'static str = "https://www.googleapis.com/youtube/v3";
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
    pub const USER_AGENT: &'static str = "vidcat/0.1";
    /// Upper bound the search endpoint accepts for `maxResults`.
    pub const MAX_RESULTS_PER_CALL: usize = 50;
    pub const RETRY_ATTEMPTS: u32 = 2;
    pub const RETRY_BASE_DELAY: Duration = Duration::from_millis(250);
    pub const RETRY_MAX_DELAY: Duration = Duration::from_secs(2);
    pub const API_KEY_ENV: &'static str = "YOUTUBE_API_KEY";
}

/// Result cache configuration.
pub struct CacheConfig;

impl CacheConfig {
    pub const FRESHNESS_WINDOW: Duration = Duration::from_secs(10 * 60);
}

/// Category defaults.
pub struct CategoryConfig;

impl CategoryConfig {
    pub const DEFAULT_COLOR: &'static str = "#667eea";
}

/// Search request defaults.
pub struct SearchConfig;

impl SearchConfig {
    pub const DEFAULT_MAX_RESULTS: usize = 50;
    /// Videos shorter than this are dropped from aggregated results.
    pub const MIN_DURATION_SECS: u64 = 60;
}
