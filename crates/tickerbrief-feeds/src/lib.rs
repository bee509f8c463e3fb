//! Feed retrieval for tickerbrief.
//!
//! Fetches RSS/Atom documents over HTTP, parses their entries, and turns them
//! into normalized [`tickerbrief_core::FeedItem`]s. Per-source failures are
//! collected as messages rather than aborting a run.

pub mod client;
pub mod collect;
pub mod error;
pub mod extract;
pub mod parse;

mod retry;

pub use client::FeedClient;
pub use collect::{collect_items, Collection};
pub use error::FeedError;
pub use extract::extract_items;
pub use parse::{parse_feed, FeedEntry};
