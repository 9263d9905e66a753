//! RSS 2.0 output.
//!
//! Renders the scraped front pages as an RSS channel. Every item links to the
//! image itself and embeds it in a CDATA `<img>` tag so feed readers show the
//! front page inline.
//!
//! # Output Shape
//!
//! ```text
//! <?xml version="1.0" encoding="UTF-8"?>
//! <rss version="2.0">
//!   <channel>
//!     <title/> <link/> <description/> <lastBuildDate/> <language/>
//!     <item> <title/> <link/> <description/> <guid/> <pubDate/> </item>
//!   </channel>
//! </rss>
//! ```

use crate::models::{Candidate, FeedConfig};
use crate::utils::rfc822_date;
use chrono::{DateTime, Utc};
use quick_xml::Writer;
use quick_xml::escape::partial_escape;
use quick_xml::events::{BytesCData, BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use std::error::Error;
use std::io::Write;
use tokio::fs;
use tracing::{info, instrument};

const LANGUAGE: &str = "en-GB";

/// Render the candidates as an RSS 2.0 document.
///
/// `now` stamps both `lastBuildDate` and every item's `pubDate`. Only `&`,
/// `<` and `>` are escaped in element text.
///
/// # Arguments
///
/// * `items` - Candidates in discovery order; may be empty
/// * `config` - Channel title, description and source link
/// * `now` - Render time
pub fn render_rss(
    items: &[Candidate],
    config: &FeedConfig,
    now: DateTime<Utc>,
) -> Result<String, Box<dyn Error>> {
    let date = rfc822_date(now);
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut rss = BytesStart::new("rss");
    rss.push_attribute(("version", "2.0"));
    writer.write_event(Event::Start(rss))?;
    writer.write_event(Event::Start(BytesStart::new("channel")))?;

    write_text_element(&mut writer, "title", &config.title)?;
    write_text_element(&mut writer, "link", &config.source_url)?;
    write_text_element(&mut writer, "description", &config.description)?;
    write_text_element(&mut writer, "lastBuildDate", &date)?;
    write_text_element(&mut writer, "language", LANGUAGE)?;

    for item in items {
        let title = partial_escape(item.label.as_str());
        writer.write_event(Event::Start(BytesStart::new("item")))?;
        write_text_element(&mut writer, "title", &item.label)?;
        write_text_element(&mut writer, "link", &item.url)?;

        let image = format!(r#"<img src="{}" alt="{}" />"#, item.url, title);
        writer.write_event(Event::Start(BytesStart::new("description")))?;
        writer.write_event(Event::CData(BytesCData::new(split_cdata_terminator(&image))))?;
        writer.write_event(Event::End(BytesEnd::new("description")))?;

        write_text_element(&mut writer, "guid", &item.url)?;
        write_text_element(&mut writer, "pubDate", &date)?;
        writer.write_event(Event::End(BytesEnd::new("item")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("channel")))?;
    writer.write_event(Event::End(BytesEnd::new("rss")))?;

    let mut out = writer.into_inner();
    out.push(b'\n');
    Ok(String::from_utf8(out)?)
}

fn write_text_element<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    text: &str,
) -> Result<(), Box<dyn Error>> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::from_escaped(partial_escape(text))))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

/// A literal `]]>` would end the CDATA section early, so it is split across
/// two adjacent sections.
fn split_cdata_terminator(content: &str) -> String {
    content.replace("]]>", "]]]]><![CDATA[>")
}

/// Write a rendered RSS document to `path`.
#[instrument(level = "info", skip_all, fields(%path))]
pub async fn write_rss(path: &str, xml: &str) -> Result<(), Box<dyn Error>> {
    fs::write(path, xml).await?;
    info!(bytes = xml.len(), "Wrote RSS feed");
    Ok(())
}
