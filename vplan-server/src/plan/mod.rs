//! Plan retrieval: credentials, download, extraction and caching.
//!
//! [`PlanService`] answers "what does the plan for this date say?" as plain
//! text. The download sits behind [`DocumentSource`] so tests and other
//! deployments can swap it out; extraction uses an injected
//! [`ExtractorChain`].

mod error;

use std::sync::Arc;

use chrono::NaiveDate;
use futures::FutureExt;
use futures::future::BoxFuture;
use tracing::{info, warn};

use crate::cache::{CacheConfig, TextCache, TextEntry};
use crate::extract::ExtractorChain;
use crate::iserv::{CookieSource, Cookies, IservError, PlanClient};

pub use error::PlanError;

/// Somewhere plan documents can be downloaded from.
pub trait DocumentSource: Send + Sync {
    /// Fetch the raw PDF for `date` using the current session cookies.
    fn fetch<'a>(
        &'a self,
        date: NaiveDate,
        cookies: &'a Cookies,
    ) -> BoxFuture<'a, Result<Vec<u8>, IservError>>;
}

impl DocumentSource for PlanClient {
    fn fetch<'a>(
        &'a self,
        date: NaiveDate,
        cookies: &'a Cookies,
    ) -> BoxFuture<'a, Result<Vec<u8>, IservError>> {
        self.fetch_pdf(date, cookies).boxed()
    }
}

/// Fetches and extracts plan text, caching the result per date.
pub struct PlanService {
    source: Arc<dyn DocumentSource>,
    extractors: Arc<ExtractorChain>,
    cookies: CookieSource,
    cache: TextCache,
}

impl PlanService {
    /// Create a service. Cookies are read from `cookies` on every request.
    pub fn new(
        source: impl DocumentSource + 'static,
        extractors: ExtractorChain,
        cookies: CookieSource,
        cache_config: &CacheConfig,
    ) -> Self {
        Self {
            source: Arc::new(source),
            extractors: Arc::new(extractors),
            cookies,
            cache: TextCache::new(cache_config),
        }
    }

    /// Number of session cookies currently available. Unreadable cookies
    /// count as none.
    pub fn cookie_count(&self) -> usize {
        match self.cookies.load() {
            Ok(cookies) => cookies.len(),
            Err(e) => {
                warn!(error = %e, "could not load cookies");
                0
            }
        }
    }

    /// Extractor names in priority order.
    pub fn extractor_names(&self) -> Vec<&'static str> {
        self.extractors.names()
    }

    /// Whether any extractor is configured.
    pub fn has_extractors(&self) -> bool {
        !self.extractors.is_empty()
    }

    /// Number of plan dates with cached text.
    pub async fn cached_plans(&self) -> u64 {
        self.cache.entry_count().await
    }

    /// Get the plan text for `date`, from cache if fresh.
    ///
    /// Concurrent requests for an uncached date share one download. The error
    /// is shared between them too, hence the `Arc`.
    pub async fn plan_text(&self, date: NaiveDate) -> Result<TextEntry, Arc<PlanError>> {
        let cookies = self
            .cookies
            .load()
            .map_err(|e| Arc::new(PlanError::from(e)))?;
        if cookies.is_empty() {
            return Err(Arc::new(PlanError::MissingCredentials));
        }

        self.cache
            .get_or_try_insert_with(date, self.download(date, &cookies))
            .await
    }

    async fn download(&self, date: NaiveDate, cookies: &Cookies) -> Result<TextEntry, PlanError> {
        let pdf = self.source.fetch(date, cookies).await?;

        let extractors = Arc::clone(&self.extractors);
        let extracted = tokio::task::spawn_blocking(move || extractors.extract(&pdf))
            .await
            .map_err(|e| PlanError::Worker {
                message: e.to_string(),
            })??;

        info!(
            %date,
            extractor = extracted.extractor,
            chars = extracted.text.chars().count(),
            "plan text extracted"
        );

        Ok(Arc::new(extracted))
    }
}
