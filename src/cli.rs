//! Command-line interface definitions for Front Pages Feed.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! Every option has a default matching the published feed, so the binary can
//! be run with no arguments at all.

use crate::models::FeedConfig;
use clap::Parser;

/// Command-line arguments for the Front Pages Feed application.
///
/// # Examples
///
/// ```sh
/// # Scrape the default source and write ./rss.xml and ./frontpages.json
/// frontpages_feed
///
/// # Write the feeds somewhere else
/// frontpages_feed -r site/rss.xml -j site/frontpages.json
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Page to scrape for front page images
    #[arg(
        long,
        env = "FRONTPAGES_SOURCE_URL",
        default_value = "https://www.tomorrowspapers.co.uk/"
    )]
    pub source_url: String,

    /// Public URL of the published feed, reported in the JSON feed metadata
    #[arg(
        long,
        env = "FRONTPAGES_FEED_URL",
        default_value = "https://lak7474.github.io/frontpages-app-repo/rss.xml"
    )]
    pub feed_url: String,

    /// Output path for the RSS feed
    #[arg(short, long, default_value = "rss.xml")]
    pub rss_output: String,

    /// Output path for the JSON feed
    #[arg(short, long, default_value = "frontpages.json")]
    pub json_output: String,

    /// Feed title
    #[arg(
        long,
        default_value = "UK Newspaper Front Pages - Tomorrow's Papers Today"
    )]
    pub title: String,

    /// Feed description
    #[arg(
        long,
        default_value = "Daily UK newspaper front pages from Tomorrow's Papers Today"
    )]
    pub description: String,
}

impl Cli {
    /// Static metadata shared by both rendered feeds.
    pub fn feed_config(&self) -> FeedConfig {
        FeedConfig {
            title: self.title.clone(),
            description: self.description.clone(),
            source_url: self.source_url.clone(),
            feed_url: self.feed_url.clone(),
        }
    }
}
