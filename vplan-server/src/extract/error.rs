//! Text extraction error types.

/// Errors from turning a PDF document into plain text.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ExtractError {
    /// A single extractor could not read the document
    #[error("{extractor}: {message}")]
    Pdf {
        extractor: &'static str,
        message: String,
    },

    /// An extractor panicked while reading the document
    #[error("{extractor}: panicked while reading document")]
    Panicked { extractor: &'static str },

    /// No extractor is configured
    #[error("no text extractor available")]
    Unavailable,

    /// Every extractor failed or produced no text
    #[error("could not extract text from document ({})", .attempts.join("; "))]
    Failed { attempts: Vec<String> },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ExtractError::Pdf {
            extractor: "layout",
            message: "invalid xref".into(),
        };
        assert_eq!(err.to_string(), "layout: invalid xref");

        let err = ExtractError::Unavailable;
        assert_eq!(err.to_string(), "no text extractor available");

        let err = ExtractError::Failed {
            attempts: vec!["layout: invalid xref".into(), "pages: no text".into()],
        };
        assert_eq!(
            err.to_string(),
            "could not extract text from document (layout: invalid xref; pages: no text)"
        );
    }
}
