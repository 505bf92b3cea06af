//! Item source module
//!
//! The external collaborator the paginator pulls from: full identifier
//! lists per feed, and item records by identifier.
//!
//! # Overview
//!
//! - `ItemSource` - the trait the paginator is written against
//! - `HackerNewsClient` - the implementation over the public HTTP API
//! - `StaticSource` - an in-memory implementation for tests and demos

mod client;
mod memory;

pub use client::{HackerNewsClient, DEFAULT_BASE_URL};
pub use memory::StaticSource;

use crate::error::Result;
use crate::types::{Feed, Item, ItemId};
use async_trait::async_trait;
use futures::stream::{self, StreamExt, TryStreamExt};

/// Default number of item requests kept in flight per page
pub const DEFAULT_MAX_CONCURRENCY: usize = 16;

/// A read-only source of feeds and items
#[async_trait]
pub trait ItemSource: Send + Sync {
    /// Fetch the full, ordered identifier list of a feed
    async fn fetch_feed_ids(&self, feed: Feed) -> Result<Vec<ItemId>>;

    /// Fetch one item record
    ///
    /// A missing record is an error, never a placeholder.
    async fn fetch_item(&self, id: ItemId) -> Result<Item>;

    /// Upper bound on concurrent `fetch_item` calls issued by `fetch_items`
    fn max_concurrency(&self) -> usize {
        DEFAULT_MAX_CONCURRENCY
    }

    /// Fetch several items concurrently, returned in input order
    ///
    /// The first failure (in input order) aborts the batch; requests still
    /// in flight are dropped.
    async fn fetch_items(&self, ids: &[ItemId]) -> Result<Vec<Item>> {
        stream::iter(ids.iter().copied())
            .map(|id| self.fetch_item(id))
            .buffered(self.max_concurrency().max(1))
            .try_collect()
            .await
    }

    /// Fetch a window of a feed's identifier list
    ///
    /// The API has no paging of its own, so the whole list is fetched and
    /// sliced. Out-of-range windows are empty rather than errors.
    async fn fetch_feed_window(
        &self,
        feed: Feed,
        offset: usize,
        limit: Option<usize>,
    ) -> Result<Vec<ItemId>> {
        let ids = self.fetch_feed_ids(feed).await?;
        let start = offset.min(ids.len());
        let end = match limit {
            Some(limit) => start.saturating_add(limit).min(ids.len()),
            None => ids.len(),
        };
        Ok(ids[start..end].to_vec())
    }

    /// Fetch the leading items of a feed
    async fn fetch_feed_items(&self, feed: Feed, limit: Option<usize>) -> Result<Vec<Item>> {
        let ids = self.fetch_feed_window(feed, 0, limit).await?;
        self.fetch_items(&ids).await
    }
}
