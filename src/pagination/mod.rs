//! Pagination module
//!
//! Windowed pagination over an API that only hands out full identifier
//! lists per feed.
//!
//! # Overview
//!
//! A `Paginator` holds one feed's identifiers and a page cursor. Each
//! navigation call computes the page window, fetches just those items from
//! the `ItemSource`, and moves the cursor only when the fetch succeeds.
//!
//! # Bounds
//!
//! For page `p` of size `s` over `n` identifiers the window is
//! `[p * s, min(p * s + s, n))`. A page is addressable iff `p * s <= n`;
//! anything else is `Error::OutOfBounds` and makes no request. `has_next()`
//! counts only full pages (`p < n / s`), so a trailing partial page is
//! reachable but not advertised.

mod paginator;
mod types;

pub use paginator::{Paginator, DEFAULT_PAGE_TIMEOUT};
pub use types::PageBounds;

#[cfg(test)]
mod tests;
