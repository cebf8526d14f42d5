//! Plan retrieval error types.

use crate::extract::ExtractError;
use crate::iserv::IservError;

/// Errors that prevent plan text from being available.
///
/// The parser never sees these: a request either gets text to parse or one
/// of these errors as its response.
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    /// No session cookies configured
    #[error("no cookies configured: set ISERV_COOKIE_SAT, ISERV_COOKIE_SATID, ISERV_COOKIE_SESSION")]
    MissingCredentials,

    /// Downloading the document failed
    #[error(transparent)]
    Iserv(#[from] IservError),

    /// Turning the document into text failed
    #[error(transparent)]
    Extract(#[from] ExtractError),

    /// The blocking extraction task did not complete
    #[error("extraction task failed: {message}")]
    Worker { message: String },
}
