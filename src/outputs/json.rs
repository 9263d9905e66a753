//! JSON feed output.
//!
//! Serializes the scraped front pages into the `{status, feed, items}`
//! document consumed by the front pages web app. Unlike the RSS output, no
//! markup escaping is applied: labels appear verbatim, both in `title` and
//! inside the embedded `<img>` snippet.

use crate::models::{Candidate, FeedConfig, JsonFeed, JsonFeedItem, JsonFeedMeta};
use crate::utils::json_feed_date;
use chrono::{DateTime, Utc};
use serde_json::Map;
use std::error::Error;
use tokio::fs;
use tracing::{info, instrument};

/// HTML snippet stored in both `description` and `content` of an item.
pub fn image_html(label: &str, url: &str) -> String {
    format!(r#"<img src="{url}" alt="{label}">"#)
}

/// Render the candidates as a pretty-printed JSON feed.
///
/// Every item shares the same `pubDate`, taken from `now`.
///
/// # Arguments
///
/// * `items` - Candidates in discovery order; may be empty
/// * `config` - Feed metadata; `feed_url` becomes `feed.url`
/// * `now` - Render time
pub fn render_json(
    items: &[Candidate],
    config: &FeedConfig,
    now: DateTime<Utc>,
) -> Result<String, Box<dyn Error>> {
    let pub_date = json_feed_date(now);

    let feed = JsonFeed {
        status: "ok".to_string(),
        feed: JsonFeedMeta {
            url: config.feed_url.clone(),
            title: config.title.clone(),
            link: config.source_url.clone(),
            author: String::new(),
            description: config.description.clone(),
            image: String::new(),
        },
        items: items
            .iter()
            .map(|item| {
                let html = image_html(&item.label, &item.url);
                JsonFeedItem {
                    title: item.label.clone(),
                    pubDate: pub_date.clone(),
                    link: item.url.clone(),
                    guid: item.url.clone(),
                    author: String::new(),
                    thumbnail: String::new(),
                    description: html.clone(),
                    content: html,
                    enclosure: Map::new(),
                    categories: Vec::new(),
                }
            })
            .collect(),
    };

    Ok(serde_json::to_string_pretty(&feed)?)
}

/// Write a rendered JSON feed to `path`.
#[instrument(level = "info", skip_all, fields(%path))]
pub async fn write_json(path: &str, json: &str) -> Result<(), Box<dyn Error>> {
    fs::write(path, json).await?;
    info!(bytes = json.len(), "Wrote JSON feed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::{Value, json};

    fn config() -> FeedConfig {
        FeedConfig {
            title: "UK Newspaper Front Pages - Tomorrow's Papers Today".to_string(),
            description: "Daily UK newspaper front pages from Tomorrow's Papers Today".to_string(),
            source_url: "https://www.tomorrowspapers.co.uk/".to_string(),
            feed_url: "https://example.github.io/frontpages/rss.xml".to_string(),
        }
    }

    fn render(items: &[Candidate]) -> Value {
        let now = Utc.with_ymd_and_hms(2025, 5, 6, 20, 30, 0).unwrap();
        let json = render_json(items, &config(), now).unwrap();
        serde_json::from_str(&json).unwrap()
    }

    #[test]
    fn test_single_item() {
        let doc = render(&[Candidate::new("Daily Mirror", "https://example.com/a.jpg")]);

        let items = doc["items"].as_array().unwrap();
        assert_eq!(items.len(), 1);
        let item = &items[0];
        assert_eq!(item["title"], "Daily Mirror");
        assert_eq!(item["link"], "https://example.com/a.jpg");
        assert_eq!(item["guid"], item["link"]);
        assert_eq!(
            item["description"],
            r#"<img src="https://example.com/a.jpg" alt="Daily Mirror">"#
        );
        assert_eq!(item["content"], item["description"]);
        assert_eq!(item["pubDate"], "2025-05-06 20:30:00");
        assert_eq!(item["author"], "");
        assert_eq!(item["thumbnail"], "");
        assert_eq!(item["enclosure"], json!({}));
        assert_eq!(item["categories"], json!([]));
    }

    #[test]
    fn test_feed_metadata() {
        let doc = render(&[]);

        assert_eq!(doc["status"], "ok");
        assert_eq!(
            doc["feed"],
            json!({
                "url": "https://example.github.io/frontpages/rss.xml",
                "title": "UK Newspaper Front Pages - Tomorrow's Papers Today",
                "link": "https://www.tomorrowspapers.co.uk/",
                "author": "",
                "description": "Daily UK newspaper front pages from Tomorrow's Papers Today",
                "image": ""
            })
        );
    }

    #[test]
    fn test_empty_list() {
        let doc = render(&[]);
        assert_eq!(doc["items"], json!([]));
    }

    #[test]
    fn test_label_is_not_escaped() {
        let doc = render(&[Candidate::new("Mail & <Sunday>", "https://example.com/m.jpg")]);

        assert_eq!(doc["items"][0]["title"], "Mail & <Sunday>");
        assert_eq!(
            doc["items"][0]["content"],
            r#"<img src="https://example.com/m.jpg" alt="Mail & <Sunday>">"#
        );
    }

    #[test]
    fn test_items_share_pub_date() {
        let doc = render(&[
            Candidate::new("The Times", "https://example.com/t.jpg"),
            Candidate::new("The Sun", "https://example.com/s.jpg"),
        ]);

        let items = doc["items"].as_array().unwrap();
        assert_eq!(items[0]["title"], "The Times");
        assert_eq!(items[1]["title"], "The Sun");
        assert_eq!(items[0]["pubDate"], items[1]["pubDate"]);
    }

    #[test]
    fn test_pretty_printed() {
        let now = Utc.with_ymd_and_hms(2025, 5, 6, 20, 30, 0).unwrap();
        let json = render_json(&[], &config(), now).unwrap();
        assert!(json.starts_with("{\n  \"status\": \"ok\",\n  \"feed\": {"));
    }

    #[tokio::test]
    async fn test_write_json() {
        let path = std::env::temp_dir().join(format!("frontpages_json_{}.json", std::process::id()));
        let path = path.to_str().unwrap().to_string();

        write_json(&path, "{}").await.unwrap();
        assert_eq!(tokio::fs::read_to_string(&path).await.unwrap(), "{}");
        tokio::fs::remove_file(&path).await.unwrap();
    }
}
