//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::Config;
use crate::deck::Page;
use crate::error::{Result, ResultExt};
use crate::pagination::Paginator;
use crate::source::{HackerNewsClient, ItemSource};
use crate::types::{Feed, Item, ItemId};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

/// CLI runner
#[derive(Debug)]
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Feeds => {
                self.feeds();
                Ok(())
            }
            Commands::Ids {
                feed,
                offset,
                limit,
            } => self.ids(*feed, *offset, *limit).await,
            Commands::Item { id } => self.item(*id).await,
            Commands::Page {
                feed,
                page,
                page_size,
            } => self.page(*feed, *page, *page_size).await,
            Commands::Browse { feed, page_size } => self.browse(*feed, *page_size).await,
        }
    }

    /// Load configuration, applying command-line overrides
    fn load_config(&self) -> Result<Config> {
        let mut config = match &self.cli.config {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };

        if let Some(base_url) = &self.cli.base_url {
            config.base_url.clone_from(base_url);
        }

        config.validate()?;
        debug!("Using configuration: {:?}", config);
        Ok(config)
    }

    fn paginator(
        &self,
        config: &Config,
        page_size: Option<usize>,
    ) -> Result<Paginator<HackerNewsClient>> {
        let client = Arc::new(HackerNewsClient::from_config(config)?);
        Ok(Paginator::new(client, page_size.unwrap_or(config.page_size))?
            .with_page_timeout(config.page_timeout()))
    }

    /// List feeds
    fn feeds(&self) {
        for feed in Feed::ALL {
            match self.cli.format {
                OutputFormat::Json => println!(
                    "{}",
                    json!({
                        "feed": feed,
                        "label": feed.label(),
                        "endpoint": feed.endpoint(),
                        "max_ids": feed.max_ids(),
                    })
                ),
                OutputFormat::Pretty => println!("{:<6} {}", feed.name(), feed.label()),
            }
        }
    }

    /// Print feed identifiers
    async fn ids(&self, feed: Feed, offset: usize, limit: Option<usize>) -> Result<()> {
        let config = self.load_config()?;
        let client = HackerNewsClient::from_config(&config)?;
        let ids = client.fetch_feed_window(feed, offset, limit).await?;

        match self.cli.format {
            OutputFormat::Json => print_json(&ids)?,
            OutputFormat::Pretty => {
                for id in ids {
                    println!("{id}");
                }
            }
        }
        Ok(())
    }

    /// Print one item
    async fn item(&self, id: ItemId) -> Result<()> {
        let config = self.load_config()?;
        let client = HackerNewsClient::from_config(&config)?;
        let item = client.fetch_item(id).await?;

        match self.cli.format {
            OutputFormat::Json => print_json(&item)?,
            OutputFormat::Pretty => print_item(0, &item),
        }
        Ok(())
    }

    /// Print one page of a feed
    async fn page(&self, feed: Feed, page: usize, page_size: Option<usize>) -> Result<()> {
        let config = self.load_config()?;
        let mut paginator = self.paginator(&config, page_size)?;
        load_feed(&mut paginator, feed).await?;

        let items = paginator.load_page(page).await?;
        let view = Page {
            feed,
            page,
            total_pages: paginator.total_pages(),
            has_next: page < paginator.total_pages(),
            has_previous: page > 0,
            items,
        };
        self.print_page(&view, paginator.page_size())
    }

    /// Interactive paging loop over stdin
    async fn browse(&self, feed: Feed, page_size: Option<usize>) -> Result<()> {
        let config = self.load_config()?;
        let mut paginator = self.paginator(&config, page_size)?;
        load_feed(&mut paginator, feed).await?;

        let mut items = paginator.load_current().await?;
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        loop {
            let view = Page {
                feed,
                page: paginator.current_page(),
                total_pages: paginator.total_pages(),
                has_next: paginator.has_next(),
                has_previous: paginator.has_previous(),
                items: std::mem::take(&mut items),
            };
            self.print_page(&view, paginator.page_size())?;
            eprintln!("{}", prompt(view.has_next, view.has_previous));

            let Some(line) = lines.next_line().await? else {
                return Ok(());
            };

            let result = match line.trim() {
                "n" if view.has_next => paginator.next().await.map(Some),
                "p" if view.has_previous => paginator.previous().await.map(Some),
                "r" => match paginator.load_identifiers(feed).await {
                    Ok(_) => paginator.load_current().await.map(Some),
                    Err(e) => Err(e),
                },
                "0" => {
                    paginator.reset_page();
                    paginator.load_current().await.map(Some)
                }
                "q" => return Ok(()),
                other => {
                    eprintln!("Unrecognised command: {other:?}");
                    Ok(None)
                }
            };

            items = keep_page_on_error(result, view.items)?;
        }
    }

    fn print_page(&self, page: &Page, page_size: usize) -> Result<()> {
        match self.cli.format {
            OutputFormat::Json => print_json(page),
            OutputFormat::Pretty => {
                println!(
                    "== {} - page {} ({} full pages) ==",
                    page.feed.label(),
                    page.page + 1,
                    page.total_pages
                );
                if page.items.is_empty() {
                    println!("(no items)");
                }
                let first_rank = page.page * page_size + 1;
                for (offset, item) in page.items.iter().enumerate() {
                    print_item(first_rank + offset, item);
                }
                Ok(())
            }
        }
    }
}

async fn load_feed(paginator: &mut Paginator<HackerNewsClient>, feed: Feed) -> Result<usize> {
    paginator
        .load_identifiers(feed)
        .await
        .with_context(|| format!("Failed to load the {} feed", feed.label()))
}

/// Resolve one browse step against the page on screen
///
/// `Ok(None)` and recoverable errors keep `shown`; the error is reported
/// so the user knows why the page did not change.
fn keep_page_on_error(result: Result<Option<Vec<Item>>>, shown: Vec<Item>) -> Result<Vec<Item>> {
    match result {
        Ok(Some(items)) => Ok(items),
        Ok(None) => Ok(shown),
        Err(e) if e.is_out_of_bounds() => {
            eprintln!("Error: {e}");
            eprintln!("Press 0 to return to the first page");
            Ok(shown)
        }
        Err(e) if e.is_fetch_failure() => {
            eprintln!("Error: {e}");
            Ok(shown)
        }
        Err(e) => Err(e),
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string(value)?);
    Ok(())
}

fn print_item(rank: usize, item: &Item) {
    let title = item
        .title
        .as_deref()
        .or(item.text.as_deref())
        .unwrap_or("[untitled]");
    let hidden = if item.is_hidden() { " [hidden]" } else { "" };

    if rank > 0 {
        println!("{rank:>4}. {title}{hidden}");
    } else {
        println!("{title}{hidden}");
    }

    let mut meta = Vec::new();
    if let Some(score) = item.score {
        meta.push(format!("{score} points"));
    }
    if let Some(by) = &item.by {
        meta.push(format!("by {by}"));
    }
    if let Some(at) = item.created_at() {
        meta.push(at.format("%Y-%m-%d %H:%M UTC").to_string());
    }
    if let Some(count) = item.descendants {
        meta.push(format!("{count} comments"));
    }
    if !meta.is_empty() {
        println!("      {}", meta.join(" | "));
    }
    println!("      {}", item.url.as_deref().unwrap_or(&item.discussion_url()));
}

fn prompt(has_next: bool, has_previous: bool) -> String {
    let mut options = Vec::new();
    if has_next {
        options.push("[n]ext");
    }
    if has_previous {
        options.push("[p]revious");
    }
    options.extend(["[r]eload", "[0] first page", "[q]uit"]);
    options.join("  ")
}
