//! Front page scrapers.
//!
//! Each scraper turns one source page into a list of [`Candidate`] images.
//!
//! # Supported Sources
//!
//! | Source | Module | Method | Notes |
//! |--------|--------|--------|-------|
//! | Tomorrow's Papers Today | [`tomorrows_papers`] | HTML scraping | Cascading image selectors |
//!
//! # Common Patterns
//!
//! A scraper module exports:
//! - `build_client()`: An HTTP client configured for the source
//! - `fetch_front_pages(client, url)`: Downloads the page and extracts candidates;
//!   failures are logged and produce an empty list
//! - `extract_candidates(html, origin)`: The pure extraction step, usable in tests
//!
//! [`Candidate`]: crate::models::Candidate

pub mod tomorrows_papers;
