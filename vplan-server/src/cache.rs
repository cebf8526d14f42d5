//! Caching layer for extracted plan text.
//!
//! Every request for the same day would otherwise download and extract the
//! same PDF again. Extracted text is cached per plan date for a short time so
//! that updates published during the day still show up quickly.

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use moka::future::Cache as MokaCache;

use crate::extract::Extracted;

/// Cached extraction result.
pub type TextEntry = Arc<Extracted>;

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries (one per plan date).
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(60),
            max_capacity: 16,
        }
    }
}

/// Cache of extracted plan text keyed by plan date.
pub struct TextCache {
    texts: MokaCache<NaiveDate, TextEntry>,
}

impl TextCache {
    /// Create a new cache with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        let texts = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { texts }
    }

    /// Get the text for a date, running `init` on a miss.
    ///
    /// Concurrent misses for the same date share one `init` run. Errors are
    /// not cached.
    pub async fn get_or_try_insert_with<F, E>(
        &self,
        date: NaiveDate,
        init: F,
    ) -> Result<TextEntry, Arc<E>>
    where
        F: Future<Output = Result<TextEntry, E>>,
        E: Send + Sync + 'static,
    {
        self.texts.try_get_with(date, init).await
    }

    /// Number of plan dates currently cached.
    pub async fn entry_count(&self) -> u64 {
        self.texts.run_pending_tasks().await;
        self.texts.entry_count()
    }
}
