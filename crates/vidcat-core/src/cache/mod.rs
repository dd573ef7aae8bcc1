//! Short-lived cache for aggregated search results.
//!
//! Provides:
//! - Fixed freshness window (10 minutes by default)
//! - Stale entries ignored and overwritten on the next miss, never evicted eagerly
//! - Wholesale invalidation whenever a category changes
//!
//! Concurrent misses on the same key may both compute and both write; the
//! last write wins. A result computed across an invalidation is returned to
//! its caller but never stored.

mod clock;

pub use clock::{Clock, ManualClock, SystemClock};

use crate::config::CacheConfig;
use crate::error::Result;
use crate::models::AggregatedResult;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::debug;

/// Cache key for a category search.
pub fn category_key(category_id: &str, result_bound: usize) -> String {
    format!("category:{}:{}", category_id, result_bound)
}

/// Cache key for a free-text search over already-normalized keywords.
pub fn search_key(keywords: &[String], result_bound: usize) -> String {
    format!("search:{}:{}", keywords.join(","), result_bound)
}

/// A stored aggregation result.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub key: String,
    pub data: AggregatedResult,
    pub cached_at: DateTime<Utc>,
}

/// What [`ResultCache::get_or_compute`] handed back.
#[derive(Debug, Clone)]
pub struct CacheLookup {
    pub data: AggregatedResult,
    pub from_cache: bool,
    pub cached_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

/// Process-wide result cache.
pub struct ResultCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
    /// Bumped by every `invalidate_all`, under the entries write lock.
    generation: AtomicU64,
    clock: Arc<dyn Clock>,
    freshness: Duration,
}

impl std::fmt::Debug for ResultCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResultCache")
            .field("freshness", &self.freshness)
            .finish_non_exhaustive()
    }
}

impl Default for ResultCache {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultCache {
    /// Create a cache on the system clock with the default window.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock), CacheConfig::FRESHNESS_WINDOW)
    }

    pub fn with_clock(clock: Arc<dyn Clock>, freshness: Duration) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            generation: AtomicU64::new(0),
            clock,
            freshness,
        }
    }

    fn is_fresh(&self, cached_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        match (now - cached_at).to_std() {
            Ok(age) => age < self.freshness,
            // Stored "in the future": the clock moved backwards.
            Err(_) => true,
        }
    }

    fn expiry(&self, cached_at: DateTime<Utc>) -> DateTime<Utc> {
        chrono::Duration::from_std(self.freshness)
            .ok()
            .and_then(|window| cached_at.checked_add_signed(window))
            .unwrap_or(cached_at)
    }

    /// The entry for `key`, if present and still fresh.
    pub async fn get_fresh(&self, key: &str) -> Option<CacheEntry> {
        let now = self.clock.now();
        let entries = self.entries.read().await;
        entries
            .get(key)
            .filter(|entry| self.is_fresh(entry.cached_at, now))
            .cloned()
    }

    /// Store `data` under `key`, replacing whatever was there.
    pub async fn insert(&self, key: &str, data: AggregatedResult) -> DateTime<Utc> {
        let cached_at = self.clock.now();
        let entry = CacheEntry {
            key: key.to_string(),
            data,
            cached_at,
        };
        self.entries.write().await.insert(key.to_string(), entry);
        cached_at
    }

    /// Serve `key` from the cache when fresh, otherwise run `compute` and store its result.
    ///
    /// Errors from `compute` are returned as-is and nothing is stored. Results
    /// where every keyword failed are not stored either, nor are results whose
    /// computation overlapped an [`invalidate_all`](Self::invalidate_all).
    pub async fn get_or_compute<F, Fut>(&self, key: &str, compute: F) -> Result<CacheLookup>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<AggregatedResult>>,
    {
        if let Some(entry) = self.get_fresh(key).await {
            debug!("Cache hit for '{}'", key);
            return Ok(CacheLookup {
                expires_at: self.expiry(entry.cached_at),
                data: entry.data,
                from_cache: true,
                cached_at: entry.cached_at,
            });
        }

        debug!("Cache miss for '{}'", key);
        let generation = self.generation.load(Ordering::Acquire);
        let data = compute().await?;
        let cached_at = self.clock.now();

        if data.all_failed() {
            debug!("Not caching '{}': every keyword failed", key);
        } else {
            let mut entries = self.entries.write().await;
            if self.generation.load(Ordering::Acquire) == generation {
                entries.insert(
                    key.to_string(),
                    CacheEntry {
                        key: key.to_string(),
                        data: data.clone(),
                        cached_at,
                    },
                );
            } else {
                debug!("Not caching '{}': invalidated during compute", key);
            }
        }

        Ok(CacheLookup {
            data,
            from_cache: false,
            cached_at,
            expires_at: self.expiry(cached_at),
        })
    }

    /// Drop every entry.
    pub async fn invalidate_all(&self) {
        let mut entries = self.entries.write().await;
        self.generation.fetch_add(1, Ordering::AcqRel);
        if !entries.is_empty() {
            debug!("Invalidating {} cached results", entries.len());
        }
        entries.clear();
    }

    /// Number of stored entries, stale ones included.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}
