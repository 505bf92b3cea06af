//! # hn-pager
//!
//! Windowed pagination over the Hacker News item API.
//!
//! The API hands out each feed (top, new, best, ask, show, job) as one
//! flat, ordered list of item identifiers and serves item bodies one at a
//! time. This crate turns that into fixed-size pages fetched on demand.
//!
//! ## Features
//!
//! - **Paginator**: page cursor over one feed, lazy per-page item fetches
//! - **Item Source**: async trait with an HTTP client for the public API
//! - **Feed Deck**: one paginator per feed, loaded up front
//! - **Timeouts**: per-request and per-page deadlines instead of hangs
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use hn_pager::{Feed, HackerNewsClient, Paginator, Result};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = Arc::new(HackerNewsClient::new()?);
//!     let mut pages = Paginator::new(client, 10)?;
//!     pages.load_identifiers(Feed::Top).await?;
//!
//!     let first = pages.load_current().await?;
//!     if pages.has_next() {
//!         let second = pages.next().await?;
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐   ids    ┌─────────────┐  ids of page  ┌──────────────┐
//! │  ItemSource  │ ───────► │  Paginator  │ ────────────► │  ItemSource  │
//! │ (feed lists) │          │ page cursor │ ◄──────────── │ (item bodies)│
//! └──────────────┘          └──────┬──────┘     items     └──────────────┘
//!                                  │ Vec<Item>
//!                           ┌──────┴──────┐
//!                           │ FeedDeck /  │
//!                           │ CLI display │
//!                           └─────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Item, feed and identifier types
pub mod types;

/// Configuration loading
pub mod config;

/// HTTP client with timeouts and rate limiting
pub mod http;

/// Item sources
pub mod source;

/// Windowed pagination
pub mod pagination;

/// Per-feed paginators
pub mod deck;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::Config;
pub use deck::{FeedDeck, FeedStatus, Page};
pub use error::{Error, Result};
pub use pagination::{PageBounds, Paginator};
pub use source::{HackerNewsClient, ItemSource, StaticSource};
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
