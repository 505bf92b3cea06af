//! Pagination types
//!
//! Defines the page window shared by all navigation operations.

use std::ops::Range;

/// The `[start, end)` window of one page over an identifier list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageBounds {
    /// Page index the window belongs to
    pub page: usize,
    /// First identifier position (inclusive)
    pub start: usize,
    /// Last identifier position (exclusive), clamped to the list length
    pub end: usize,
}

impl PageBounds {
    /// Compute the window of `page`, or `None` when the page is not
    /// addressable in a list of `len` identifiers
    ///
    /// A page is addressable when its start does not lie beyond the end of
    /// the list. The page starting exactly at `len` is the empty page.
    pub fn compute(page: usize, page_size: usize, len: usize) -> Option<Self> {
        let start = page.checked_mul(page_size)?;
        if start > len {
            return None;
        }
        let end = start.saturating_add(page_size).min(len);
        Some(Self { page, start, end })
    }

    /// Number of identifiers in the window
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if the window holds no identifiers
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Window as a slice range
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}
