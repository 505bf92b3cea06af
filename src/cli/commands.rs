//! CLI commands and argument parsing

use crate::types::{Feed, ItemId};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Page through Hacker News feeds
#[derive(Parser, Debug)]
#[command(name = "hn-pager")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML or JSON)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the API base URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Output format
    #[arg(short, long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the available feeds
    Feeds,

    /// Print the identifiers of a feed
    Ids {
        /// Feed name (top, new, best, ask, show, job)
        #[arg(value_parser = parse_feed)]
        feed: Feed,

        /// Skip this many identifiers
        #[arg(long, default_value = "0")]
        offset: usize,

        /// Print at most this many identifiers
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Print a single item
    Item {
        /// Item identifier
        id: ItemId,
    },

    /// Print one page of a feed
    Page {
        /// Feed name (top, new, best, ask, show, job)
        #[arg(value_parser = parse_feed)]
        feed: Feed,

        /// Zero-based page index
        #[arg(short, long, default_value = "0")]
        page: usize,

        /// Items per page (defaults to the configured page size)
        #[arg(long)]
        page_size: Option<usize>,
    },

    /// Page through a feed interactively
    Browse {
        /// Feed name (top, new, best, ask, show, job)
        #[arg(value_parser = parse_feed, default_value = "top")]
        feed: Feed,

        /// Items per page (defaults to the configured page size)
        #[arg(long)]
        page_size: Option<usize>,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one document per line)
    Json,
    /// Human-readable output
    Pretty,
}

fn parse_feed(s: &str) -> Result<Feed, String> {
    s.parse().map_err(|e: crate::Error| e.to_string())
}
