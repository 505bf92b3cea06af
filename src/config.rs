//! Configuration for the pager
//!
//! Settings load from a YAML (or JSON, which YAML accepts) file. Every
//! field has a default, so an empty file is a valid configuration.
//!
//! ```yaml
//! base_url: https://hacker-news.firebaseio.com/v0
//! page_size: 10
//! request_timeout_ms: 10000
//! page_timeout_ms: 30000
//! max_concurrency: 16
//! rate_limit:
//!   requests_per_second: 50
//!   burst_size: 25
//! ```

use crate::error::{Error, Result, ResultExt};
use crate::http::{HttpClientConfig, RateLimiterConfig};
use crate::source::{DEFAULT_BASE_URL, DEFAULT_MAX_CONCURRENCY};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Default number of items per page
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Pager configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the item API
    pub base_url: String,

    /// Items per page
    pub page_size: usize,

    /// Deadline for a single HTTP request
    pub request_timeout_ms: u64,

    /// Deadline for fetching all items of one page
    pub page_timeout_ms: u64,

    /// Item requests kept in flight per page
    pub max_concurrency: usize,

    /// User agent sent with every request
    pub user_agent: Option<String>,

    /// Client-side rate limit; absent means unlimited
    pub rate_limit: Option<RateLimiterConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            request_timeout_ms: 10_000,
            page_timeout_ms: 30_000,
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            user_agent: None,
            rate_limit: Some(RateLimiterConfig::default()),
        }
    }
}

impl Config {
    /// Load configuration from a YAML or JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML or JSON string
    pub fn from_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Config = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check values that would make the pager unusable
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(Error::InvalidPageSize);
        }
        if self.max_concurrency == 0 {
            return Err(Error::config("max_concurrency must be at least 1"));
        }
        if self.request_timeout_ms == 0 || self.page_timeout_ms == 0 {
            return Err(Error::config("timeouts must be greater than zero"));
        }
        url::Url::parse(&self.base_url)?;
        Ok(())
    }

    /// Request timeout as a duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    /// Page timeout as a duration
    pub fn page_timeout(&self) -> Duration {
        Duration::from_millis(self.page_timeout_ms)
    }

    /// Build the HTTP client configuration these settings describe
    pub fn http_client_config(&self) -> HttpClientConfig {
        let mut builder = HttpClientConfig::builder()
            .base_url(&self.base_url)
            .timeout(self.request_timeout());

        builder = match &self.rate_limit {
            Some(limit) => builder.rate_limit(limit.clone()),
            None => builder.no_rate_limit(),
        };

        if let Some(agent) = &self.user_agent {
            builder = builder.user_agent(agent);
        }

        builder.build()
    }
}
