//! Packs the main content of many web pages into one text file.
//!
//! Each URL goes through a Firecrawl-compatible scrape endpoint,
//! one request at a time, and every page that comes back is appended
//! to a fixed header as a `Title:`/`URL:` block.
pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod io;
pub mod pack;
pub mod schedule;
pub mod urls;
