//! Windowed paginator over one feed's identifier list

use super::types::PageBounds;
use crate::error::{Error, Result};
use crate::source::ItemSource;
use crate::types::{Feed, Item, ItemId};
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Default deadline for fetching one page of items
pub const DEFAULT_PAGE_TIMEOUT: Duration = Duration::from_secs(30);

/// Serves fixed-size pages of items from a flat identifier list.
///
/// Identifiers are loaded once with [`set_identifiers`](Self::set_identifiers);
/// item bodies are fetched from the source on every navigation call and
/// never kept.
///
/// Navigation takes `&mut self`, so one instance cannot have two
/// navigations in flight. Share it behind a `tokio::sync::Mutex` when
/// several tasks drive it.
pub struct Paginator<S: ?Sized> {
    source: Arc<S>,
    ids: Vec<ItemId>,
    page_size: NonZeroUsize,
    current_page: usize,
    total_pages: usize,
    page_timeout: Duration,
}

impl<S: ItemSource + ?Sized> Paginator<S> {
    /// Create a paginator with no identifiers, positioned on page 0
    pub fn new(source: Arc<S>, page_size: usize) -> Result<Self> {
        let page_size = NonZeroUsize::new(page_size).ok_or(Error::InvalidPageSize)?;
        Ok(Self {
            source,
            ids: Vec::new(),
            page_size,
            current_page: 0,
            total_pages: 0,
            page_timeout: DEFAULT_PAGE_TIMEOUT,
        })
    }

    /// Set the deadline for fetching one page
    #[must_use]
    pub fn with_page_timeout(mut self, timeout: Duration) -> Self {
        self.page_timeout = timeout;
        self
    }

    /// Replace the identifier list
    ///
    /// The current page index is kept, which may leave it past the end of a
    /// shorter list. Call [`reset_page`](Self::reset_page) for a full reset.
    pub fn set_identifiers(&mut self, ids: Vec<ItemId>) {
        self.ids = ids;
        self.total_pages = self.ids.len() / self.page_size.get();
        debug!(
            "Loaded {} identifiers, {} full pages of {}",
            self.ids.len(),
            self.total_pages,
            self.page_size
        );
    }

    /// Fetch a feed's identifier list from the source and load it
    ///
    /// Returns the number of identifiers loaded.
    pub async fn load_identifiers(&mut self, feed: Feed) -> Result<usize> {
        let ids = self.source.fetch_feed_ids(feed).await?;
        let count = ids.len();
        self.set_identifiers(ids);
        info!("Paginator for '{}' loaded {} identifiers", feed, count);
        Ok(count)
    }

    /// Move back to page 0 without fetching anything
    pub fn reset_page(&mut self) {
        self.current_page = 0;
    }

    /// Fetch the items of the current page
    pub async fn load_current(&self) -> Result<Vec<Item>> {
        self.load_page(self.current_page).await
    }

    /// Fetch the items of any addressable page without moving the cursor
    pub async fn load_page(&self, page: usize) -> Result<Vec<Item>> {
        let bounds = self.bounds_for(page)?;
        self.fetch_page(bounds).await
    }

    /// Fetch the items of the following page and move to it
    ///
    /// The index only advances once the fetch has succeeded.
    #[allow(clippy::should_implement_trait)]
    pub async fn next(&mut self) -> Result<Vec<Item>> {
        let Some(target) = self.current_page.checked_add(1) else {
            return Err(Error::out_of_bounds(i64::MAX, self.ids.len()));
        };
        let bounds = self.bounds_for(target)?;
        let items = self.fetch_page(bounds).await?;
        self.current_page = target;
        Ok(items)
    }

    /// Fetch the items of the preceding page and move to it
    ///
    /// Always out of bounds on page 0. The index only moves back once the
    /// fetch has succeeded.
    pub async fn previous(&mut self) -> Result<Vec<Item>> {
        let Some(target) = self.current_page.checked_sub(1) else {
            warn!("Previous page requested on page 0");
            return Err(Error::out_of_bounds(-1, self.ids.len()));
        };
        let bounds = self.bounds_for(target)?;
        let items = self.fetch_page(bounds).await?;
        self.current_page = target;
        Ok(items)
    }

    /// Check if there is a full page past the current one
    ///
    /// A trailing partial page is still reachable with `next()` but is not
    /// advertised here.
    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Check if the current page is past page 0
    pub fn has_previous(&self) -> bool {
        self.current_page > 0
    }

    /// Current page index
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Number of full pages: `floor(len / page_size)`
    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Items per page
    pub fn page_size(&self) -> usize {
        self.page_size.get()
    }

    /// Deadline for fetching one page
    pub fn page_timeout(&self) -> Duration {
        self.page_timeout
    }

    /// The loaded identifier list
    pub fn identifiers(&self) -> &[ItemId] {
        &self.ids
    }

    /// Number of loaded identifiers
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Check if no identifiers are loaded
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// The item source pages are fetched from
    pub fn source(&self) -> &Arc<S> {
        &self.source
    }

    /// Window of `page`, or `None` if that page is not addressable
    pub fn page_bounds(&self, page: usize) -> Option<PageBounds> {
        PageBounds::compute(page, self.page_size.get(), self.ids.len())
    }

    /// Identifiers of the current page
    pub fn current_identifiers(&self) -> Result<&[ItemId]> {
        let bounds = self.bounds_for(self.current_page)?;
        Ok(&self.ids[bounds.range()])
    }

    fn bounds_for(&self, page: usize) -> Result<PageBounds> {
        self.page_bounds(page).ok_or_else(|| {
            warn!(
                "Page {} out of bounds ({} identifiers, page size {})",
                page,
                self.ids.len(),
                self.page_size
            );
            Error::out_of_bounds(i64::try_from(page).unwrap_or(i64::MAX), self.ids.len())
        })
    }

    async fn fetch_page(&self, bounds: PageBounds) -> Result<Vec<Item>> {
        let ids = &self.ids[bounds.range()];
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        debug!(
            "Fetching page {} [{}, {}) of {} identifiers",
            bounds.page,
            bounds.start,
            bounds.end,
            self.ids.len()
        );

        match tokio::time::timeout(self.page_timeout, self.source.fetch_items(ids)).await {
            Ok(result) => result,
            Err(_) => {
                warn!(
                    "Page {} not fetched within {:?}",
                    bounds.page, self.page_timeout
                );
                Err(Error::Timeout {
                    timeout_ms: self.page_timeout.as_millis() as u64,
                })
            }
        }
    }
}

impl<S: ?Sized> std::fmt::Debug for Paginator<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Paginator")
            .field("len", &self.ids.len())
            .field("page_size", &self.page_size)
            .field("current_page", &self.current_page)
            .field("total_pages", &self.total_pages)
            .field("page_timeout", &self.page_timeout)
            .finish_non_exhaustive()
    }
}
