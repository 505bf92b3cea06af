//! Common types used throughout hn-pager
//!
//! This module contains the item record, the feed enumeration,
//! and the identifier alias shared by every other module.

use crate::error::Error;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Type Aliases
// ============================================================================

/// Identifier of an item in the remote item source
pub type ItemId = u64;

// ============================================================================
// Feed
// ============================================================================

/// A named, ordered collection of item identifiers maintained by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Feed {
    Top,
    New,
    Best,
    Ask,
    Show,
    Job,
}

impl Feed {
    /// All feeds, in display order
    pub const ALL: [Feed; 6] = [
        Feed::Top,
        Feed::Job,
        Feed::New,
        Feed::Best,
        Feed::Show,
        Feed::Ask,
    ];

    /// Short lowercase name (`top`, `new`, ...)
    pub fn name(self) -> &'static str {
        match self {
            Feed::Top => "top",
            Feed::New => "new",
            Feed::Best => "best",
            Feed::Ask => "ask",
            Feed::Show => "show",
            Feed::Job => "job",
        }
    }

    /// API endpoint stem, without the `.json` suffix
    pub fn endpoint(self) -> String {
        format!("{}stories", self.name())
    }

    /// Human-readable label
    pub fn label(self) -> &'static str {
        match self {
            Feed::Top => "Top Stories",
            Feed::New => "New",
            Feed::Best => "Best",
            Feed::Ask => "Ask HN",
            Feed::Show => "Show HN",
            Feed::Job => "Jobs",
        }
    }

    /// Upper bound on the number of identifiers the API returns for this feed
    pub fn max_ids(self) -> usize {
        match self {
            Feed::Top | Feed::New | Feed::Best => 500,
            Feed::Ask | Feed::Show | Feed::Job => 200,
        }
    }
}

impl fmt::Display for Feed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Feed {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "top" | "topstories" => Ok(Feed::Top),
            "new" | "newstories" => Ok(Feed::New),
            "best" | "beststories" => Ok(Feed::Best),
            "ask" | "askstories" => Ok(Feed::Ask),
            "show" | "showstories" => Ok(Feed::Show),
            "job" | "jobs" | "jobstories" => Ok(Feed::Job),
            _ => Err(Error::unknown_feed(s)),
        }
    }
}

// ============================================================================
// Item
// ============================================================================

/// Kind of item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Job,
    Story,
    Comment,
    Poll,
    #[serde(rename = "pollopt")]
    PollOpt,
}

/// A content record fetched by identifier
///
/// Only `id` is guaranteed by the API; deleted and dead items in particular
/// arrive with most fields missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,

    #[serde(default)]
    pub deleted: bool,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<ItemType>,

    /// Username of the author
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub by: Option<String>,

    /// Creation time, unix seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<i64>,

    #[serde(default)]
    pub dead: bool,

    /// Parent comment or story
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<ItemId>,

    /// Poll this option belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poll: Option<ItemId>,

    /// Comment ids, ranked in display order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub kids: Vec<ItemId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// HTML body
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Poll options
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parts: Vec<ItemId>,

    /// Total comment count
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descendants: Option<u64>,
}

impl Item {
    /// Create an item with only an identifier set
    pub fn new(id: ItemId) -> Self {
        Self {
            id,
            deleted: false,
            kind: None,
            by: None,
            time: None,
            dead: false,
            parent: None,
            poll: None,
            kids: Vec::new(),
            url: None,
            score: None,
            title: None,
            text: None,
            parts: Vec::new(),
            descendants: None,
        }
    }

    /// Creation time as a UTC timestamp
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.time.and_then(|t| DateTime::from_timestamp(t, 0))
    }

    /// Link to the item's discussion page on the website
    pub fn discussion_url(&self) -> String {
        format!("https://news.ycombinator.com/item?id={}", self.id)
    }

    /// Deleted or dead
    pub fn is_hidden(&self) -> bool {
        self.deleted || self.dead
    }
}
