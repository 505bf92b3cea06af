//! Hacker News API client
//!
//! Endpoints used:
//! - `{base}/{feed}stories.json` - ordered identifier list of a feed
//! - `{base}/item/{id}.json` - one item record, or `null` when unknown

use super::{ItemSource, DEFAULT_MAX_CONCURRENCY};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::http::{HttpClient, HttpClientConfig};
use crate::types::{Feed, Item, ItemId};
use async_trait::async_trait;
use tracing::{debug, info};

/// Base URL of the public API
pub const DEFAULT_BASE_URL: &str = "https://hacker-news.firebaseio.com/v0";

/// Item source backed by the public Hacker News API
#[derive(Debug)]
pub struct HackerNewsClient {
    http: HttpClient,
    base_url: String,
    max_concurrency: usize,
}

impl HackerNewsClient {
    /// Create a client against the public API with default settings
    pub fn new() -> Result<Self> {
        Self::from_config(&Config::default())
    }

    /// Create a client from a loaded configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;
        let http = HttpClient::with_config(config.http_client_config())?;
        Ok(Self::with_http(http, &config.base_url).with_max_concurrency(config.max_concurrency))
    }

    /// Create a client over an existing HTTP client
    pub fn with_http(http: HttpClient, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
        }
    }

    /// Create a client against another base URL, other settings default
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let http = HttpClient::with_config(HttpClientConfig::default())?;
        Ok(Self::with_http(http, base_url))
    }

    /// Set the number of item requests kept in flight per batch
    #[must_use]
    pub fn with_max_concurrency(mut self, max_concurrency: usize) -> Self {
        self.max_concurrency = max_concurrency.max(1);
        self
    }

    /// Base URL requests are made against
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn feed_url(&self, feed: Feed) -> String {
        format!("{}/{}.json", self.base_url, feed.endpoint())
    }

    fn item_url(&self, id: ItemId) -> String {
        format!("{}/item/{id}.json", self.base_url)
    }
}

#[async_trait]
impl ItemSource for HackerNewsClient {
    async fn fetch_feed_ids(&self, feed: Feed) -> Result<Vec<ItemId>> {
        let ids: Option<Vec<ItemId>> = self.http.get_json(&self.feed_url(feed)).await?;
        let ids = ids.unwrap_or_default();
        info!("Fetched {} identifiers for feed '{}'", ids.len(), feed);
        Ok(ids)
    }

    async fn fetch_item(&self, id: ItemId) -> Result<Item> {
        let item: Option<Item> = self.http.get_json(&self.item_url(id)).await?;
        match item {
            Some(item) => {
                debug!("Fetched item {}", id);
                Ok(item)
            }
            None => Err(Error::ItemNotFound { id }),
        }
    }

    fn max_concurrency(&self) -> usize {
        self.max_concurrency
    }
}
