//! PDF text extraction.
//!
//! The plan is published as a PDF. Extraction libraries differ in how well
//! they keep table rows together, so several [`TextExtractor`]s are tried in
//! priority order by an [`ExtractorChain`] until one returns text.

mod error;
mod layout;
mod pages;

use tracing::{debug, warn};

pub use error::ExtractError;
pub use layout::LayoutExtractor;
pub use pages::PageTextExtractor;

/// A way of turning PDF bytes into plain text.
///
/// Implementations are synchronous and may be CPU heavy; callers run them on a
/// blocking thread.
pub trait TextExtractor: Send + Sync {
    /// Short name for logs and the health endpoint.
    fn name(&self) -> &'static str;

    /// Extract all text from the document, pages in order.
    fn extract(&self, pdf: &[u8]) -> Result<String, ExtractError>;
}

/// Text produced by a chain, with the extractor that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extracted {
    pub text: String,
    pub extractor: &'static str,
}

/// Ordered list of extractors, tried until one yields non-empty text.
pub struct ExtractorChain {
    extractors: Vec<Box<dyn TextExtractor>>,
}

impl ExtractorChain {
    /// Create a chain from extractors in priority order.
    pub fn new(extractors: Vec<Box<dyn TextExtractor>>) -> Self {
        Self { extractors }
    }

    /// The default chain: layout-aware extraction first, then page text.
    pub fn with_defaults() -> Self {
        Self::new(vec![
            Box::new(LayoutExtractor),
            Box::new(PageTextExtractor),
        ])
    }

    /// Extractor names in priority order.
    pub fn names(&self) -> Vec<&'static str> {
        self.extractors.iter().map(|e| e.name()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.extractors.is_empty()
    }

    /// Run extractors in order and return the first non-blank result.
    pub fn extract(&self, pdf: &[u8]) -> Result<Extracted, ExtractError> {
        if self.extractors.is_empty() {
            return Err(ExtractError::Unavailable);
        }

        let mut attempts = Vec::new();

        for extractor in &self.extractors {
            match extractor.extract(pdf) {
                Ok(text) if !text.trim().is_empty() => {
                    debug!(
                        extractor = extractor.name(),
                        chars = text.chars().count(),
                        "extracted text"
                    );
                    return Ok(Extracted {
                        text,
                        extractor: extractor.name(),
                    });
                }
                Ok(_) => {
                    debug!(extractor = extractor.name(), "extractor returned no text");
                    attempts.push(format!("{}: no text", extractor.name()));
                }
                Err(e) => {
                    warn!(extractor = extractor.name(), error = %e, "extractor failed");
                    attempts.push(e.to_string());
                }
            }
        }

        Err(ExtractError::Failed { attempts })
    }
}

impl std::fmt::Debug for ExtractorChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExtractorChain")
            .field("extractors", &self.names())
            .finish()
    }
}
