//! Utility functions for URL normalization, label cleanup, and date formatting.
//!
//! This module provides helper functions used throughout the application:
//! - Image URL resolution against the source site's origin
//! - Label derivation from image filenames
//! - The size and blocklist filters used to skip logos and icons
//! - Timestamp formatting for both feed formats
//! - String truncation for logging

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use url::Url;

/// Label used when neither the `alt` text nor the filename yields anything.
pub const FALLBACK_LABEL: &str = "Newspaper Front Page";

/// Substrings that mark an image as site furniture rather than a front page.
pub const BLOCKED_WORDS: &[&str] = &["logo", "icon", "avatar", "profile"];

/// Images narrower or shorter than this (in declared pixels) are skipped.
pub const MIN_DIMENSION: i64 = 100;

static TRAILING_NUMBER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"-\d+$").unwrap());

/// Derive the `scheme://host[:port]` origin used for root-relative URLs.
///
/// # Errors
///
/// Returns an error if `source_url` is not an absolute URL with a host.
pub fn site_origin(source_url: &str) -> Result<String, Box<dyn Error>> {
    let parsed = Url::parse(source_url)?;
    if parsed.host_str().is_none() {
        return Err(format!("source URL has no host: {source_url}").into());
    }
    Ok(parsed.origin().ascii_serialization())
}

/// Turn an image reference into an absolute URL.
///
/// - `//cdn/x.jpg` becomes `https://cdn/x.jpg`
/// - `/x.jpg` is prefixed with `origin`
/// - anything else must already start with `http`, or `None` is returned
///
/// # Examples
///
/// ```ignore
/// assert_eq!(
///     resolve_image_url("/a.jpg", "https://example.com").as_deref(),
///     Some("https://example.com/a.jpg")
/// );
/// assert_eq!(resolve_image_url("a.jpg", "https://example.com"), None);
/// ```
pub fn resolve_image_url(src: &str, origin: &str) -> Option<String> {
    if src.starts_with("//") {
        Some(format!("https:{src}"))
    } else if src.starts_with('/') {
        Some(format!("{origin}{src}"))
    } else if src.starts_with("http") {
        Some(src.to_string())
    } else {
        None
    }
}

/// Build a label from the filename part of an image URL.
///
/// The last path segment is cut at its first `.`, a trailing `-<digits>`
/// suffix is dropped, and the remaining hyphens become spaces. Falls back to
/// [`FALLBACK_LABEL`] when nothing is left.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(label_from_url("https://x.test/daily-mirror-1.jpg"), "daily mirror");
/// assert_eq!(label_from_url("https://x.test/-1.jpg"), "Newspaper Front Page");
/// ```
pub fn label_from_url(url: &str) -> String {
    let filename = url.rsplit('/').next().unwrap_or_default();
    let stem = filename.split('.').next().unwrap_or_default();
    let stem = TRAILING_NUMBER_RE.replace(stem, "");
    let label = stem.replace('-', " ").trim().to_string();
    if label.is_empty() {
        FALLBACK_LABEL.to_string()
    } else {
        label
    }
}

/// Case-insensitive check against [`BLOCKED_WORDS`].
pub fn is_blocked(text: &str) -> bool {
    let lowered = text.to_lowercase();
    BLOCKED_WORDS.iter().any(|word| lowered.contains(word))
}

/// Decide whether declared `width`/`height` attributes mark an image as too small.
///
/// Only applies when both attributes are present and both parse as integers;
/// anything else counts as unknown and never excludes the image.
pub fn is_too_small(width: Option<&str>, height: Option<&str>) -> bool {
    let (Some(width), Some(height)) = (width, height) else {
        return false;
    };
    match (width.trim().parse::<i64>(), height.trim().parse::<i64>()) {
        (Ok(w), Ok(h)) => w < MIN_DIMENSION || h < MIN_DIMENSION,
        _ => false,
    }
}

/// RSS date, e.g. `Tue, 06 May 2025 20:30:00 +0000`.
pub fn rfc822_date(now: DateTime<Utc>) -> String {
    now.format("%a, %d %b %Y %H:%M:%S +0000").to_string()
}

/// JSON feed date, e.g. `2025-05-06 20:30:00`.
pub fn json_feed_date(now: DateTime<Utc>) -> String {
    now.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Truncate a string for logging purposes.
///
/// Long strings are cut to `max` characters with an ellipsis and a count of
/// the omitted bytes appended.
pub fn truncate_for_log(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        None => s.to_string(),
        Some((cut, _)) => format!("{}…(+{} bytes)", &s[..cut], s.len() - cut),
    }
}
