//! Page-by-page extraction via `lopdf`.

use lopdf::Document;

use super::{ExtractError, TextExtractor};

const NAME: &str = "pages";

/// Extractor that reads each page's text operators with `lopdf`.
///
/// Pages are joined with a blank line. Cell positions are not taken into
/// account, so rows may come out split; this is the fallback.
#[derive(Debug, Clone, Copy, Default)]
pub struct PageTextExtractor;

impl TextExtractor for PageTextExtractor {
    fn name(&self) -> &'static str {
        NAME
    }

    fn extract(&self, pdf: &[u8]) -> Result<String, ExtractError> {
        let doc = Document::load_mem(pdf).map_err(|e| pdf_error(&e))?;

        let mut text = String::new();
        for page_number in doc.get_pages().keys() {
            let page_text = doc.extract_text(&[*page_number]).map_err(|e| pdf_error(&e))?;
            if !page_text.is_empty() {
                text.push_str(&page_text);
                text.push_str("\n\n");
            }
        }

        Ok(text)
    }
}

fn pdf_error(e: &lopdf::Error) -> ExtractError {
    ExtractError::Pdf {
        extractor: NAME,
        message: e.to_string(),
    }
}
