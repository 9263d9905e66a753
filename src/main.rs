//! # Front Pages Feed
//!
//! Scrapes tomorrow's UK newspaper front pages from a single listing page and
//! publishes them as an RSS 2.0 feed and a JSON feed.
//!
//! ## Usage
//!
//! ```sh
//! frontpages_feed -r rss.xml -j frontpages.json
//! ```
//!
//! ## Architecture
//!
//! One run is a straight line:
//! 1. **Fetching**: Download the source page once with a browser-like client
//! 2. **Extraction**: Pick up to ten front page images with cascading selectors
//! 3. **Output**: Render and write the RSS and JSON feeds
//!
//! When nothing is found no files are written.

use chrono::Utc;
use clap::Parser;
use reqwest::Client;
use std::error::Error;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod models;
mod outputs;
mod scrapers;
#[cfg(test)]
mod test_support;
mod utils;

use cli::Cli;
use outputs::{json, rss};
use scrapers::tomorrows_papers;

#[tokio::main(flavor = "current_thread")]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("frontpages_feed starting up");

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    let client = tomorrows_papers::build_client()?;
    run(&args, &client).await;

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );

    Ok(())
}

/// Scrape the source page and write both feeds.
///
/// Returns the number of front pages found. When that is zero no files are
/// written. Render and write failures are logged; one failed feed does not
/// stop the other.
#[instrument(level = "info", skip_all, fields(source_url = %args.source_url))]
async fn run(args: &Cli, client: &Client) -> usize {
    let config = args.feed_config();

    // ---- Fetch and extract ----
    info!("Scraping front pages");
    let items = tomorrows_papers::fetch_front_pages(client, &config.source_url).await;

    if items.is_empty() {
        info!("No front page images found.");
        return 0;
    }

    info!(count = items.len(), "Found front page images");
    for item in &items {
        info!(label = %item.label, url = %item.url, "Front page");
    }

    // ---- Feeds ----
    let now = Utc::now();

    match rss::render_rss(&items, &config, now) {
        Ok(xml) => {
            if let Err(e) = rss::write_rss(&args.rss_output, &xml).await {
                error!(path = %args.rss_output, error = %e, "Failed writing RSS feed");
            }
        }
        Err(e) => error!(error = %e, "Failed rendering RSS feed"),
    }

    match json::render_json(&items, &config, now) {
        Ok(doc) => {
            if let Err(e) = json::write_json(&args.json_output, &doc).await {
                error!(path = %args.json_output, error = %e, "Failed writing JSON feed");
            }
        }
        Err(e) => error!(error = %e, "Failed rendering JSON feed"),
    }

    items.len()
}
