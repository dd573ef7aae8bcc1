//! Vidcat Core - Headless library for category-driven video search.
//!
//! A category is a named set of search keywords. Searching a category fans
//! each keyword out to the YouTube Data API, merges the results, drops short
//! videos and duplicates, shuffles, and truncates to the requested size.
//! Aggregated results are cached for ten minutes and the cache is cleared
//! whenever a category changes.
//!
//! This crate has no HTTP server; see `vidcat-server` for the REST surface.
//!
//! # Example
//!
//! ```rust,ignore
//! use vidcat_core::VidcatApi;
//!
//! #[tokio::main]
//! async fn main() -> vidcat_core::Result<()> {
//!     let api = VidcatApi::builder()
//!         .api_key(std::env::var("YOUTUBE_API_KEY").ok())
//!         .build()?;
//!
//!     let sports = api.search_category("sports", 10).await?;
//!     println!("{} of {} videos", sports.data.videos.len(), sports.data.total_found);
//!
//!     Ok(())
//! }
//! ```

pub mod aggregation;
pub mod cache;
pub mod config;
pub mod error;
pub mod gateway;
pub mod models;
pub mod store;

mod api;

// Re-export commonly used types
pub use aggregation::Aggregator;
pub use cache::{CacheLookup, Clock, ManualClock, ResultCache, SystemClock};
pub use error::{Result, VidcatError};
pub use gateway::{GatewayError, SearchGateway, StaticGateway, YouTubeClient};
pub use models::{AggregatedResult, Category, CategoryUpdate, NewCategory, VideoItem};
pub use store::CategoryStore;

pub use api::{parse_query, VidcatApiBuilder};

use std::sync::Arc;

/// Main entry point for Vidcat operations.
///
/// Cheap to clone; clones share the category store and the result cache.
#[derive(Debug, Clone)]
pub struct VidcatApi {
    store: Arc<CategoryStore>,
    cache: Arc<ResultCache>,
    aggregator: Aggregator,
}

impl VidcatApi {
    /// Start configuring a new instance.
    pub fn builder() -> VidcatApiBuilder {
        VidcatApiBuilder::new()
    }

    /// Whether the upstream gateway has an API key.
    pub fn has_credentials(&self) -> bool {
        self.aggregator.has_credentials()
    }

    /// The shared result cache.
    pub fn cache(&self) -> &Arc<ResultCache> {
        &self.cache
    }
}
