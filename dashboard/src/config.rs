//! Dashboard configuration
//!
//! Resolved from command line flags, then the environment (a `.env` file is
//! loaded first), then built-in defaults.

use std::time::Duration;
use url::Url;

use crate::error::{DashboardError, DashboardResult};

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8080";
pub const BACKEND_URL_ENV: &str = "DASHBOARD_BACKEND_URL";
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(3000);
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Pacing of the two polling cycles; they are tuned independently
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollingConfig {
    pub main_interval: Duration,
    pub history_interval: Duration,
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            main_interval: DEFAULT_POLL_INTERVAL,
            history_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Backend base address without trailing slash
    pub backend_url: String,
    pub polling: PollingConfig,
    pub request_timeout: Duration,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            polling: PollingConfig::default(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl DashboardConfig {
    /// Build and validate a configuration
    pub fn new(
        backend_url: &str,
        main_interval: Duration,
        history_interval: Duration,
        request_timeout: Duration,
    ) -> DashboardResult<Self> {
        let config = Self {
            backend_url: normalize_base_url(backend_url)?,
            polling: PollingConfig {
                main_interval,
                history_interval,
            },
            request_timeout,
        };
        config.validate()?;
        Ok(config)
    }

    /// Pick the backend URL: explicit flag, then environment, then default
    pub fn resolve_backend_url(flag: Option<String>) -> String {
        flag.or_else(|| std::env::var(BACKEND_URL_ENV).ok())
            .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string())
    }

    pub fn validate(&self) -> DashboardResult<()> {
        if self.polling.main_interval.is_zero() {
            return Err(DashboardError::config("main poll interval must be greater than zero"));
        }
        if self.polling.history_interval.is_zero() {
            return Err(DashboardError::config("history poll interval must be greater than zero"));
        }
        if self.request_timeout.is_zero() {
            return Err(DashboardError::config("request timeout must be greater than zero"));
        }
        Ok(())
    }
}

/// Validate an http(s) base URL and strip trailing slashes so paths can be
/// appended verbatim
pub fn normalize_base_url(raw: &str) -> DashboardResult<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    let parsed = Url::parse(trimmed).map_err(|e| {
        DashboardError::from(shared::SharedError::InvalidConfig {
            field: "backend_url".to_string(),
            value: format!("{raw} ({e})"),
        })
    })?;

    match parsed.scheme() {
        "http" | "https" => Ok(trimmed.to_string()),
        other => Err(DashboardError::from(shared::SharedError::InvalidConfig {
            field: "backend_url".to_string(),
            value: format!("{raw} (unsupported scheme {other})"),
        })),
    }
}
