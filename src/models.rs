//! Data models for scraped front pages and the feeds built from them.
//!
//! This module defines the core data structures used throughout the application:
//! - [`Candidate`]: One front page image found on the source page
//! - [`FeedConfig`]: Static metadata shared by both output feeds
//! - [`JsonFeed`], [`JsonFeedMeta`], [`JsonFeedItem`]: The JSON feed document
//!
//! The JSON models use camelCase field names where the published feed format
//! requires them, hence the `#[allow(non_snake_case)]` attribute.

use serde::Serialize;
use serde_json::{Map, Value};

/// A front page image discovered on the source page.
///
/// Candidates are only produced by the extractor, which guarantees that the
/// URL is absolute and that no two candidates in one run share a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Human readable name of the paper, never empty.
    pub label: String,
    /// Absolute `http(s)` URL of the image.
    pub url: String,
}

impl Candidate {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }
}

/// Static metadata embedded in every rendered feed.
#[derive(Debug, Clone)]
pub struct FeedConfig {
    /// Feed title, shared by the RSS channel and the JSON `feed` object.
    pub title: String,
    /// Feed description.
    pub description: String,
    /// The page the images were scraped from.
    pub source_url: String,
    /// Where the published feed itself lives.
    pub feed_url: String,
}

/// Top-level JSON feed document.
#[derive(Debug, Serialize)]
pub struct JsonFeed {
    /// Always `"ok"`.
    pub status: String,
    pub feed: JsonFeedMeta,
    pub items: Vec<JsonFeedItem>,
}

/// The `feed` object of the JSON document.
#[derive(Debug, Serialize)]
pub struct JsonFeedMeta {
    pub url: String,
    pub title: String,
    pub link: String,
    pub author: String,
    pub description: String,
    pub image: String,
}

/// One entry of the JSON feed.
///
/// `description` and `content` carry the same `<img>` snippet.
#[allow(non_snake_case)]
#[derive(Debug, Serialize)]
pub struct JsonFeedItem {
    pub title: String,
    /// `YYYY-MM-DD HH:MM:SS` in UTC, identical for every item of one render.
    pub pubDate: String,
    pub link: String,
    pub guid: String,
    pub author: String,
    pub thumbnail: String,
    pub description: String,
    pub content: String,
    /// Always an empty object.
    pub enclosure: Map<String, Value>,
    /// Always an empty array.
    pub categories: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_creation() {
        let candidate = Candidate::new("Daily Mirror", "https://example.com/a.jpg");
        assert_eq!(candidate.label, "Daily Mirror");
        assert_eq!(candidate.url, "https://example.com/a.jpg");
    }

    #[test]
    fn test_json_feed_item_serialization() {
        let item = JsonFeedItem {
            title: "The Times".to_string(),
            pubDate: "2025-05-06 20:30:00".to_string(),
            link: "https://example.com/t.jpg".to_string(),
            guid: "https://example.com/t.jpg".to_string(),
            author: String::new(),
            thumbnail: String::new(),
            description: "<img>".to_string(),
            content: "<img>".to_string(),
            enclosure: Map::new(),
            categories: vec![],
        };

        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["pubDate"], "2025-05-06 20:30:00");
        assert_eq!(value["enclosure"], serde_json::json!({}));
        assert_eq!(value["categories"], serde_json::json!([]));
        assert!(value.get("pub_date").is_none());
    }

    #[test]
    fn test_json_feed_field_order() {
        let feed = JsonFeed {
            status: "ok".to_string(),
            feed: JsonFeedMeta {
                url: "https://example.com/rss.xml".to_string(),
                title: "Title".to_string(),
                link: "https://example.com/".to_string(),
                author: String::new(),
                description: "Desc".to_string(),
                image: String::new(),
            },
            items: vec![],
        };

        let json = serde_json::to_string(&feed).unwrap();
        let status = json.find("\"status\"").unwrap();
        let meta = json.find("\"feed\"").unwrap();
        let items = json.find("\"items\"").unwrap();
        assert!(status < meta && meta < items);
    }
}
