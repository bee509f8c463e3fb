//! Shared types and configuration for tickerbrief.
//!
//! Holds the [`FeedItem`] record every other crate passes around, the feed
//! source list, and the environment-driven [`AppConfig`].

pub mod app_config;
pub mod config;
pub mod error;
pub mod items;
pub mod sources;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use error::ConfigError;
pub use items::FeedItem;
pub use sources::{default_sources, load_sources, FeedSource, SourceTemplate, SourcesFile};
