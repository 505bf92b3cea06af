//! One paginator per feed
//!
//! The deck is what a display layer drives: every feed gets its own
//! paginator over a shared item source, identifier lists load up front,
//! and navigation returns a [`Page`] snapshot carrying the items together
//! with the flags that decide which controls to enable.

use crate::error::{Error, Result};
use crate::pagination::{Paginator, DEFAULT_PAGE_TIMEOUT};
use crate::source::ItemSource;
use crate::types::{Feed, Item};
use futures::future::join_all;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{info, warn};

/// A page of a feed as handed to the display layer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    pub feed: Feed,
    pub page: usize,
    pub total_pages: usize,
    pub has_next: bool,
    pub has_previous: bool,
    pub items: Vec<Item>,
}

/// Navigation state of a feed, without items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeedStatus {
    pub feed: Feed,
    pub identifiers: usize,
    pub page: usize,
    pub total_pages: usize,
    pub has_next: bool,
    pub has_previous: bool,
}

/// Per-feed paginators over one item source
pub struct FeedDeck {
    source: Arc<dyn ItemSource>,
    pagers: HashMap<Feed, Mutex<Paginator<dyn ItemSource>>>,
}

impl FeedDeck {
    /// Create a deck with an empty paginator for every feed
    pub fn new(source: Arc<dyn ItemSource>, page_size: usize) -> Result<Self> {
        Self::with_page_timeout(source, page_size, DEFAULT_PAGE_TIMEOUT)
    }

    /// Create a deck whose paginators use the given page deadline
    pub fn with_page_timeout(
        source: Arc<dyn ItemSource>,
        page_size: usize,
        timeout: Duration,
    ) -> Result<Self> {
        let mut pagers = HashMap::new();
        for feed in Feed::ALL {
            let paginator =
                Paginator::new(Arc::clone(&source), page_size)?.with_page_timeout(timeout);
            pagers.insert(feed, Mutex::new(paginator));
        }
        Ok(Self { source, pagers })
    }

    /// Fetch and load the identifier list of one feed
    ///
    /// The page index is left as it was.
    pub async fn load(&self, feed: Feed) -> Result<usize> {
        let ids = self.source.fetch_feed_ids(feed).await?;
        let count = ids.len();
        self.pager(feed)?.lock().await.set_identifiers(ids);
        Ok(count)
    }

    /// Load every feed concurrently
    ///
    /// Each feed reports its own outcome; one failing feed does not stop
    /// the others.
    pub async fn load_all(&self) -> Vec<(Feed, Result<usize>)> {
        let results = join_all(
            Feed::ALL
                .iter()
                .map(|&feed| async move { (feed, self.load(feed).await) }),
        )
        .await;

        for (feed, result) in &results {
            match result {
                Ok(count) => info!("Feed '{}' ready with {} identifiers", feed, count),
                Err(e) => warn!("Feed '{}' failed to load: {}", feed, e),
            }
        }
        results
    }

    /// Items of the current page of a feed
    pub async fn current(&self, feed: Feed) -> Result<Page> {
        let paginator = self.pager(feed)?.lock().await;
        let items = paginator.load_current().await?;
        Ok(snapshot(feed, &paginator, items))
    }

    /// Move a feed forward one page
    pub async fn next(&self, feed: Feed) -> Result<Page> {
        let mut paginator = self.pager(feed)?.lock().await;
        let items = paginator.next().await?;
        Ok(snapshot(feed, &paginator, items))
    }

    /// Move a feed back one page
    pub async fn previous(&self, feed: Feed) -> Result<Page> {
        let mut paginator = self.pager(feed)?.lock().await;
        let items = paginator.previous().await?;
        Ok(snapshot(feed, &paginator, items))
    }

    /// Put a feed back on page 0
    pub async fn reset(&self, feed: Feed) -> Result<()> {
        self.pager(feed)?.lock().await.reset_page();
        Ok(())
    }

    /// Navigation state of a feed
    pub async fn status(&self, feed: Feed) -> Result<FeedStatus> {
        let paginator = self.pager(feed)?.lock().await;
        Ok(FeedStatus {
            feed,
            identifiers: paginator.len(),
            page: paginator.current_page(),
            total_pages: paginator.total_pages(),
            has_next: paginator.has_next(),
            has_previous: paginator.has_previous(),
        })
    }

    fn pager(&self, feed: Feed) -> Result<&Mutex<Paginator<dyn ItemSource>>> {
        self.pagers
            .get(&feed)
            .ok_or_else(|| Error::unknown_feed(feed.name()))
    }
}

impl std::fmt::Debug for FeedDeck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeedDeck")
            .field("feeds", &self.pagers.len())
            .finish_non_exhaustive()
    }
}

fn snapshot(feed: Feed, paginator: &Paginator<dyn ItemSource>, items: Vec<Item>) -> Page {
    Page {
        feed,
        page: paginator.current_page(),
        total_pages: paginator.total_pages(),
        has_next: paginator.has_next(),
        has_previous: paginator.has_previous(),
        items,
    }
}
