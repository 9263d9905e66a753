//! Feed generation for the scraped front pages.
//!
//! Both renderers take the same candidate list and [`FeedConfig`] and return
//! the finished document as a string; writing it to disk is a separate step.
//!
//! # Submodules
//!
//! - [`rss`]: RSS 2.0 channel, labels XML-escaped
//! - [`json`]: `{status, feed, items}` JSON document, labels verbatim
//!
//! # Output Files
//!
//! ```text
//! ./rss.xml
//! ./frontpages.json
//! ```
//!
//! [`FeedConfig`]: crate::models::FeedConfig

pub mod json;
pub mod rss;
