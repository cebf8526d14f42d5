//! Plan document HTTP client.

use chrono::NaiveDate;
use reqwest::StatusCode;
use reqwest::header::{ACCEPT, CONTENT_TYPE, COOKIE, HeaderMap, HeaderValue, REFERER, USER_AGENT};
use tracing::{debug, info, warn};

use super::cookies::Cookies;
use super::error::IservError;

/// Default location of the daily plan PDFs.
const DEFAULT_BASE_URL: &str =
    "https://kranichgym.de/iserv/plan/show/raw/1%20Vertretungspl%C3%A4ne";

/// Default referer, the IServ start page.
const DEFAULT_REFERER: &str = "https://kranichgym.de/iserv/";

const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Configuration for the plan client.
#[derive(Debug, Clone)]
pub struct PlanClientConfig {
    /// Directory URL holding `DD.MM.YY.pdf` files
    pub base_url: String,
    /// Sent as `Referer`
    pub referer: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl PlanClientConfig {
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            referer: DEFAULT_REFERER.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom base URL (for testing or another school).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the `Referer` sent with downloads.
    pub fn with_referer(mut self, referer: impl Into<String>) -> Self {
        self.referer = referer.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for PlanClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Downloads plan PDFs with the user's session cookies.
#[derive(Debug, Clone)]
pub struct PlanClient {
    http: reqwest::Client,
    base_url: String,
}

impl PlanClient {
    /// Create a client. Cookies are not part of the client; they are passed
    /// with each download.
    pub fn new(config: PlanClientConfig) -> Result<Self, IservError> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(DEFAULT_USER_AGENT));
        headers.insert(ACCEPT, HeaderValue::from_static("application/pdf"));

        let referer = HeaderValue::from_str(&config.referer).map_err(|_| IservError::Config {
            message: format!("invalid referer {:?}", config.referer),
        })?;
        headers.insert(REFERER, referer);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// URL of the plan for `date`, e.g. `.../28.01.26.pdf`.
    pub fn plan_url(&self, date: NaiveDate) -> String {
        format!("{}/{}.pdf", self.base_url, date.format("%d.%m.%y"))
    }

    /// Download the plan PDF for `date` with the given session cookies.
    pub async fn fetch_pdf(&self, date: NaiveDate, cookies: &Cookies) -> Result<Vec<u8>, IservError> {
        let url = self.plan_url(date);
        info!(%url, "downloading plan");

        let mut request = self.http.get(&url);
        if !cookies.is_empty() {
            let cookie =
                HeaderValue::from_str(&cookies.header_value()).map_err(|_| IservError::Cookies {
                    message: "cookie values are not valid header characters".to_string(),
                })?;
            request = request.header(COOKIE, cookie);
        }

        let response = request.send().await?;
        let status = response.status();

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("unknown")
            .to_string();
        debug!(status = status.as_u16(), %content_type, "plan response");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(status_error(status, url, &body));
        }

        if !content_type.contains("application/pdf") {
            warn!(%content_type, "plan response is not a PDF");
            return Err(IservError::NotPdf { content_type });
        }

        let bytes = response.bytes().await?;
        info!(bytes = bytes.len(), "plan downloaded");

        Ok(bytes.to_vec())
    }
}

/// Error for a non-success response. Other statuses keep the start of the body.
fn status_error(status: StatusCode, url: String, body: &str) -> IservError {
    match status {
        StatusCode::NOT_FOUND => IservError::NotFound { url },
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => IservError::Unauthorized,
        _ => IservError::Fetch {
            status: status.as_u16(),
            message: body.chars().take(200).collect(),
        },
    }
}
