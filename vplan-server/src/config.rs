//! Server configuration from environment variables.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use crate::iserv::PlanClientConfig;

/// Default listening port.
const DEFAULT_PORT: u16 = 5000;

/// Default cookie file, relative to the working directory.
const DEFAULT_COOKIES_FILE: &str = "cookies.json";

/// Errors from reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

/// Configuration for the whole server process.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to
    pub bind_addr: IpAddr,
    /// Port to listen on (`PORT`)
    pub port: u16,
    /// Fallback cookie file (`COOKIES_FILE`)
    pub cookies_file: PathBuf,
    /// Plan download settings (`ISERV_PLAN_URL`, `ISERV_REFERER`,
    /// `ISERV_TIMEOUT_SECS`)
    pub client: PlanClientConfig,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through a variable lookup. Unset or empty
    /// variables take their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let mut config = Self::default();

        if let Some(value) = get("BIND_ADDR") {
            config.bind_addr = parse_var("BIND_ADDR", &value)?;
        }
        if let Some(value) = get("PORT") {
            config.port = parse_var("PORT", &value)?;
        }
        if let Some(value) = get("COOKIES_FILE") {
            config.cookies_file = PathBuf::from(value);
        }
        if let Some(value) = get("ISERV_PLAN_URL") {
            config.client = config.client.with_base_url(value.trim());
        }
        if let Some(value) = get("ISERV_REFERER") {
            config.client = config.client.with_referer(value.trim());
        }
        if let Some(value) = get("ISERV_TIMEOUT_SECS") {
            config.client = config
                .client
                .with_timeout(parse_var("ISERV_TIMEOUT_SECS", &value)?);
        }

        Ok(config)
    }

    /// Socket address to listen on.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            cookies_file: PathBuf::from(DEFAULT_COOKIES_FILE),
            client: PlanClientConfig::new(),
        }
    }
}

fn parse_var<T: std::str::FromStr>(var: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Invalid {
        var,
        value: value.to_string(),
    })
}
