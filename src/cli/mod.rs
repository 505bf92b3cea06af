//! CLI module
//!
//! Command-line front-end over the pager.
//!
//! # Commands
//!
//! - `feeds` - List the available feeds
//! - `ids` - Print a feed's identifiers
//! - `item` - Print one item
//! - `page` - Print one page of a feed
//! - `browse` - Page through a feed interactively

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
