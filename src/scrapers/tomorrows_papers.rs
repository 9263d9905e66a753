//! Tomorrow's Papers Today front page scraper.
//!
//! This module scrapes newspaper front page images from
//! [Tomorrow's Papers Today](https://www.tomorrowspapers.co.uk/). The page
//! markup is not under our control, so images are located with a cascade of
//! selectors ordered from most to least specific. The first selector that
//! yields anything wins, and only the catch-all `img` selector is left to pick
//! up pages where nothing more specific matches.
//!
//! # Filtering
//!
//! For each matched `<img>`:
//! - the URL comes from `src`, falling back to `data-src`
//! - relative URLs are made absolute; anything that is not `http(s)` is skipped
//! - images that declare `width`/`height` below 100 are skipped
//! - the label is the `alt` text, or a cleaned-up filename
//! - anything mentioning a logo, icon, avatar or profile is skipped
//! - URLs already collected are skipped
//!
//! At most [`MAX_CANDIDATES`] images are returned.

use crate::models::Candidate;
use crate::utils::{
    is_blocked, is_too_small, label_from_url, resolve_image_url, site_origin, truncate_for_log,
};
use once_cell::sync::Lazy;
use reqwest::Client;
use reqwest::header::{
    ACCEPT, ACCEPT_ENCODING, ACCEPT_LANGUAGE, CONNECTION, HeaderMap, HeaderValue,
    UPGRADE_INSECURE_REQUESTS,
};
use scraper::{ElementRef, Html, Selector};
use std::collections::HashSet;
use std::error::Error;
use tracing::{debug, error, info, instrument};

/// Upper bound on images collected from one page.
pub const MAX_CANDIDATES: usize = 10;

const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Image selectors, most specific first.
const IMAGE_SELECTORS: &[&str] = &[
    "img[src*='front']",
    "img[alt*='front']",
    "img[alt*='newspaper']",
    ".front-page img",
    "article img",
    "main img",
    "img",
];

static SELECTORS: Lazy<Vec<Selector>> = Lazy::new(|| {
    IMAGE_SELECTORS
        .iter()
        .map(|s| Selector::parse(s).unwrap())
        .collect()
});

/// Build the HTTP client used for the source page.
///
/// Sends the header set of a desktop Chrome browser, since the site answers
/// plain clients with `403 Forbidden`. No timeout or retry policy is set; the
/// page is fetched exactly once.
///
/// # Errors
///
/// Returns an error if the TLS backend cannot be initialized.
pub fn build_client() -> Result<Client, Box<dyn Error>> {
    let mut headers = HeaderMap::new();
    headers.insert(
        ACCEPT,
        HeaderValue::from_static(
            "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8",
        ),
    );
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.5"));
    headers.insert(ACCEPT_ENCODING, HeaderValue::from_static("gzip, deflate"));
    headers.insert(CONNECTION, HeaderValue::from_static("keep-alive"));
    headers.insert(UPGRADE_INSECURE_REQUESTS, HeaderValue::from_static("1"));

    let client = Client::builder()
        .user_agent(BROWSER_USER_AGENT)
        .default_headers(headers)
        .build()?;
    Ok(client)
}

/// Fetch the source page and extract its front page images.
///
/// Never fails: transport errors and non-2xx responses are logged and turned
/// into an empty list.
///
/// # Arguments
///
/// * `client` - Client from [`build_client`]
/// * `source_url` - Page to scrape; its origin is used for root-relative image URLs
#[instrument(level = "info", skip(client))]
pub async fn fetch_front_pages(client: &Client, source_url: &str) -> Vec<Candidate> {
    let origin = match site_origin(source_url) {
        Ok(origin) => origin,
        Err(e) => {
            error!(error = %e, "Invalid source URL");
            return Vec::new();
        }
    };

    let html = match fetch_html(client, source_url).await {
        Ok(html) => html,
        Err(e) => {
            error!(error = %e, "Error fetching front pages");
            return Vec::new();
        }
    };
    debug!(bytes = html.len(), preview = %truncate_for_log(&html, 200), "Fetched source page");

    let candidates = extract_candidates(&html, &origin);
    info!(count = candidates.len(), "Extracted front page candidates");
    candidates
}

async fn fetch_html(client: &Client, url: &str) -> Result<String, Box<dyn Error>> {
    let response = client.get(url).send().await?.error_for_status()?;
    Ok(response.text().await?)
}

/// Extract up to [`MAX_CANDIDATES`] front page images from an HTML document.
///
/// Selectors are tried in order; once a selector has produced at least one
/// candidate the remaining selectors are not consulted.
///
/// # Arguments
///
/// * `html` - The raw page body
/// * `origin` - `scheme://host` prefixed to root-relative image URLs
pub fn extract_candidates(html: &str, origin: &str) -> Vec<Candidate> {
    let document = Html::parse_document(html);
    let mut candidates: Vec<Candidate> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    'selectors: for (selector, raw) in SELECTORS.iter().zip(IMAGE_SELECTORS) {
        for img in document.select(selector) {
            let Some(candidate) = candidate_from_img(img, origin) else {
                continue;
            };
            if seen.insert(candidate.url.clone()) {
                debug!(selector = *raw, label = %candidate.label, url = %candidate.url, "Accepted image");
                candidates.push(candidate);
            }
            if candidates.len() >= MAX_CANDIDATES {
                break 'selectors;
            }
        }

        if !candidates.is_empty() {
            debug!(selector = *raw, count = candidates.len(), "Selector matched; skipping broader selectors");
            break;
        }
    }

    candidates
}

/// Apply the per-image filters, returning `None` for anything skipped.
fn candidate_from_img(img: ElementRef<'_>, origin: &str) -> Option<Candidate> {
    let element = img.value();
    let src = element
        .attr("src")
        .filter(|s| !s.is_empty())
        .or_else(|| element.attr("data-src").filter(|s| !s.is_empty()))?;

    let url = resolve_image_url(src, origin)?;

    if is_too_small(element.attr("width"), element.attr("height")) {
        return None;
    }

    let label = match element.attr("alt") {
        Some(alt) if !alt.trim().is_empty() => alt.to_string(),
        _ => label_from_url(&url),
    };

    if is_blocked(&url) || is_blocked(&label) {
        return None;
    }

    Some(Candidate::new(label, url))
}
