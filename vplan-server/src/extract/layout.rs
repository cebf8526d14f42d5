//! Layout-aware extraction via `pdf-extract`.
//!
//! `pdf-extract` places text runs by their position on the page and breaks
//! lines where the baseline changes, so a table row usually ends up on one
//! line with its cells separated by spaces.

use std::panic::{self, AssertUnwindSafe};

use super::{ExtractError, TextExtractor};

const NAME: &str = "layout";

/// Extractor backed by `pdf_extract::extract_text_from_mem`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutExtractor;

impl TextExtractor for LayoutExtractor {
    fn name(&self) -> &'static str {
        NAME
    }

    fn extract(&self, pdf: &[u8]) -> Result<String, ExtractError> {
        // pdf-extract panics on some malformed font tables
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            pdf_extract::extract_text_from_mem(pdf)
        }))
        .map_err(|_| ExtractError::Panicked { extractor: NAME })?;

        result.map_err(|e| ExtractError::Pdf {
            extractor: NAME,
            message: e.to_string(),
        })
    }
}
