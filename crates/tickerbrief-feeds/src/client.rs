//! HTTP client for RSS/Atom feed endpoints.

use std::time::Duration;

use reqwest::Client;
use tickerbrief_core::{AppConfig, FeedItem, FeedSource};

use crate::error::FeedError;
use crate::extract::extract_items;
use crate::parse::parse_feed;
use crate::retry::retry_with_backoff;

/// Fetches feed documents with a fixed `User-Agent`, timeout and retry policy.
///
/// Some feed hosts reject the default `reqwest` agent, so one is always set.
pub struct FeedClient {
    client: Client,
    /// Maximum number of retry attempts after the first failure.
    max_retries: u32,
    backoff_base_ms: u64,
}

impl FeedClient {
    /// Creates a `FeedClient`.
    ///
    /// `max_retries` is the number of additional attempts after the first
    /// failure for transient errors (network, 429, 5xx). Set to `0` to disable
    /// retries.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        timeout_secs: u64,
        user_agent: &str,
        max_retries: u32,
        backoff_base_ms: u64,
    ) -> Result<Self, FeedError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            max_retries,
            backoff_base_ms,
        })
    }

    /// Creates a `FeedClient` from the request settings in `config`.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn from_app_config(config: &AppConfig) -> Result<Self, FeedError> {
        Self::new(
            config.request_timeout_secs,
            &config.user_agent,
            config.max_retries,
            config.retry_backoff_base_ms,
        )
    }

    /// GET `url` and return the response body.
    ///
    /// # Errors
    ///
    /// - [`FeedError::UnexpectedStatus`] for any non-2xx status (429 and 5xx
    ///   are retried first).
    /// - [`FeedError::Http`] on network failure after all retries.
    pub async fn fetch(&self, url: &str) -> Result<String, FeedError> {
        retry_with_backoff(self.max_retries, self.backoff_base_ms, || async move {
            let response = self.client.get(url).send().await?;
            let status = response.status();
            if !status.is_success() {
                return Err(FeedError::UnexpectedStatus {
                    status: status.as_u16(),
                    url: url.to_owned(),
                });
            }
            Ok(response.text().await?)
        })
        .await
    }

    /// Fetch, parse and extract the items of one source.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError`] if the fetch fails or the document is not
    /// well-formed XML.
    pub async fn fetch_items(&self, source: &FeedSource) -> Result<Vec<FeedItem>, FeedError> {
        let body = self.fetch(&source.url).await?;
        let entries = parse_feed(&body)?;
        Ok(extract_items(entries, &source.name))
    }
}
