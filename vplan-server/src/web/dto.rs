//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::Entry;

/// Request to check the plan for a class.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CheckRequest {
    /// Class code, e.g. "11D" (required)
    pub class_name: String,

    /// Teacher name to look for
    pub teacher_name: Option<String>,

    /// "today" or "tomorrow" (defaults to today)
    pub date_type: Option<String>,
}

/// Plan check result.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckResponse {
    /// Whether any entry was found
    pub has_changes: bool,

    /// Matching plan entries in plan order
    pub entries: Vec<Entry>,

    /// Normalized class query
    pub class_name: String,

    /// Trimmed teacher query, null when absent
    pub teacher_name: Option<String>,

    /// Plan date, DD.MM.YYYY
    pub date: String,
}

/// Health check response.
///
/// Keys are snake_case, unlike [`CheckResponse`]; existing front ends read
/// `cookies_loaded` and `pdf_support`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub cookies_loaded: bool,
    pub cookies_count: usize,
    /// Extractor names in priority order
    pub extractors: Vec<&'static str>,
    pub pdf_support: bool,
    /// Plan dates with cached text
    pub cached_plans: u64,
}

/// Root endpoint response.
#[derive(Debug, Serialize)]
pub struct IndexResponse {
    pub message: &'static str,
    pub status: &'static str,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
