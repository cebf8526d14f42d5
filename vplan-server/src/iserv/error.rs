//! IServ client error types.

/// Errors from loading credentials or downloading the plan document.
#[derive(Debug, thiserror::Error)]
pub enum IservError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("network error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server rejected the session cookies
    #[error("unauthorized: session cookies were rejected")]
    Unauthorized,

    /// No plan has been published for this date
    #[error("plan document not found: {url}")]
    NotFound { url: String },

    /// Any other unexpected status
    #[error("plan download failed with status {status}: {message}")]
    Fetch { status: u16, message: String },

    /// The server answered, but not with a PDF (usually a login page)
    #[error("plan download returned {content_type} instead of a PDF")]
    NotPdf { content_type: String },

    /// Cookie file unreadable or malformed, or cookie not usable as a header
    #[error("cookie error: {message}")]
    Cookies { message: String },

    /// Client settings that cannot be used for requests
    #[error("invalid client configuration: {message}")]
    Config { message: String },
}
