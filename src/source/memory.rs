//! In-memory item source

use super::ItemSource;
use crate::error::{Error, Result};
use crate::types::{Feed, Item, ItemId};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Static in-memory item source.
///
/// Feeds and items are fixed at construction. Identifiers listed in a feed
/// but without a stored item fail with `ItemNotFound`, which makes partial
/// fetch failures easy to stage.
#[derive(Debug, Default)]
pub struct StaticSource {
    feeds: HashMap<Feed, Vec<ItemId>>,
    items: HashMap<ItemId, Item>,
    delay: Option<Duration>,
    item_requests: AtomicUsize,
    feed_requests: AtomicUsize,
}

impl StaticSource {
    /// Create an empty source
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the identifier list of a feed, storing a titled item for each id
    #[must_use]
    pub fn with_feed(mut self, feed: Feed, ids: impl IntoIterator<Item = ItemId>) -> Self {
        let ids: Vec<ItemId> = ids.into_iter().collect();
        for &id in &ids {
            self.items.entry(id).or_insert_with(|| {
                let mut item = Item::new(id);
                item.title = Some(format!("Item {id}"));
                item
            });
        }
        self.feeds.insert(feed, ids);
        self
    }

    /// Set the identifier list of a feed without storing any items
    #[must_use]
    pub fn with_feed_ids(mut self, feed: Feed, ids: impl IntoIterator<Item = ItemId>) -> Self {
        self.feeds.insert(feed, ids.into_iter().collect());
        self
    }

    /// Store an item, replacing any previous record with the same id
    #[must_use]
    pub fn with_item(mut self, item: Item) -> Self {
        self.items.insert(item.id, item);
        self
    }

    /// Drop a stored item so fetching it fails
    #[must_use]
    pub fn without_item(mut self, id: ItemId) -> Self {
        self.items.remove(&id);
        self
    }

    /// Delay every response
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Number of `fetch_item` calls served so far
    pub fn item_requests(&self) -> usize {
        self.item_requests.load(Ordering::SeqCst)
    }

    /// Number of `fetch_feed_ids` calls served so far
    pub fn feed_requests(&self) -> usize {
        self.feed_requests.load(Ordering::SeqCst)
    }

    async fn pause(&self) {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
    }
}

#[async_trait]
impl ItemSource for StaticSource {
    async fn fetch_feed_ids(&self, feed: Feed) -> Result<Vec<ItemId>> {
        self.feed_requests.fetch_add(1, Ordering::SeqCst);
        self.pause().await;
        Ok(self.feeds.get(&feed).cloned().unwrap_or_default())
    }

    async fn fetch_item(&self, id: ItemId) -> Result<Item> {
        self.item_requests.fetch_add(1, Ordering::SeqCst);
        self.pause().await;
        self.items
            .get(&id)
            .cloned()
            .ok_or(Error::ItemNotFound { id })
    }
}
