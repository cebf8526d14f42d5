//! IServ session cookies.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::error::IservError;

/// Environment variables holding cookies, with the cookie name each maps to.
pub const COOKIE_ENV_VARS: &[(&str, &str)] = &[
    ("ISERV_COOKIE_SAT", "IServSAT"),
    ("ISERV_COOKIE_SATID", "IServSATId"),
    ("ISERV_COOKIE_SESSION", "IServSession"),
];

/// Session cookies sent with every plan download.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cookies {
    values: BTreeMap<String, String>,
}

/// Where session cookies are read from.
///
/// Cookies are read again on every [`load`](CookieSource::load), so a
/// refreshed `cookies.json` or new environment values apply without a
/// restart. Environment variables win over the file.
#[derive(Debug, Clone)]
pub struct CookieSource {
    file: PathBuf,
    lookup: fn(&str) -> Option<String>,
}

impl CookieSource {
    /// Read from the process environment, falling back to `file`.
    pub fn new(file: impl Into<PathBuf>) -> Self {
        Self {
            file: file.into(),
            lookup: env_var,
        }
    }

    /// Use another variable lookup instead of the process environment.
    pub fn with_lookup(mut self, lookup: fn(&str) -> Option<String>) -> Self {
        self.lookup = lookup;
        self
    }

    /// The fallback cookie file.
    pub fn file(&self) -> &Path {
        &self.file
    }

    /// Load the current cookies.
    ///
    /// The file is only read when none of the [`COOKIE_ENV_VARS`] is set. A
    /// missing file gives an empty set.
    pub fn load(&self) -> Result<Cookies, IservError> {
        if let Some(cookies) = Cookies::from_lookup(self.lookup) {
            debug!(count = cookies.len(), "cookies from environment");
            return Ok(cookies);
        }

        let cookies = Cookies::from_json_file(&self.file)?;
        if cookies.is_empty() {
            warn!(
                file = %self.file.display(),
                "no cookies found; set ISERV_COOKIE_SAT, ISERV_COOKIE_SATID, ISERV_COOKIE_SESSION"
            );
        } else {
            debug!(
                count = cookies.len(),
                file = %self.file.display(),
                "cookies from file"
            );
        }
        Ok(cookies)
    }
}

fn env_var(var: &str) -> Option<String> {
    std::env::var(var).ok()
}

impl Cookies {
    /// Build cookies from variable lookups. Returns `None` if no variable has
    /// a non-empty value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Option<Self> {
        let values: BTreeMap<String, String> = COOKIE_ENV_VARS
            .iter()
            .filter_map(|(var, name)| {
                lookup(var)
                    .filter(|v| !v.is_empty())
                    .map(|v| (name.to_string(), v))
            })
            .collect();

        (!values.is_empty()).then_some(Self { values })
    }

    /// Read a flat JSON object of cookie name to value.
    pub fn from_json_file(path: &Path) -> Result<Self, IservError> {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => {
                return Err(IservError::Cookies {
                    message: format!("failed to read {}: {e}", path.display()),
                });
            }
        };

        let values: BTreeMap<String, String> =
            serde_json::from_str(&json).map_err(|e| IservError::Cookies {
                message: format!("invalid cookie file {}: {e}", path.display()),
            })?;

        Ok(Self { values })
    }

    /// Build from name/value pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value for the `Cookie` request header, e.g. `IServSAT=abc; IServSession=def`.
    pub fn header_value(&self) -> String {
        self.values
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("; ")
    }
}
