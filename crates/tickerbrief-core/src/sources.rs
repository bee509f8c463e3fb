//! Feed source list: built-in defaults and the optional sources file.

use std::path::Path;

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// A feed source whose URL may still contain `{ticker}` / `{query}` placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceTemplate {
    pub name: String,
    pub url: String,
}

/// A feed source ready to fetch: placeholders already substituted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedSource {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct SourcesFile {
    #[serde(default)]
    pub sources: Vec<SourceTemplate>,
}

const DEFAULT_SOURCES: &[(&str, &str)] = &[
    (
        "Yahoo Finance",
        "https://finance.yahoo.com/rss/headline?s={ticker}",
    ),
    (
        "Google News",
        "https://news.google.com/rss/search?q={query}&hl=en-US&gl=US&ceid=US:en",
    ),
    (
        "PR Newswire",
        "https://www.prnewswire.com/rss/news-releases-list.rss",
    ),
    (
        "Business Wire",
        "https://feed.businesswire.com/rss/home/?rss=G1QFDERJXkJeEFhWXg==",
    ),
    (
        "SEC - Company Filings (CIK 0001792789)",
        "https://www.sec.gov/cgi-bin/browse-edgar?action=getcompany&CIK=0001792789&type=&dateb=&owner=exclude&count=40&output=atom",
    ),
];

/// The built-in source templates used when no sources file exists.
#[must_use]
pub fn default_sources() -> Vec<SourceTemplate> {
    DEFAULT_SOURCES
        .iter()
        .map(|&(name, url)| SourceTemplate {
            name: name.to_string(),
            url: url.to_string(),
        })
        .collect()
}

impl SourceTemplate {
    /// Substitute `{ticker}` and `{query}` with percent-encoded values.
    #[must_use]
    pub fn render(&self, ticker: &str, query: &str) -> FeedSource {
        let ticker = utf8_percent_encode(ticker, NON_ALPHANUMERIC).to_string();
        let query = utf8_percent_encode(query, NON_ALPHANUMERIC).to_string();
        FeedSource {
            name: self.name.clone(),
            url: self
                .url
                .replace("{ticker}", &ticker)
                .replace("{query}", &query),
        }
    }
}

/// Load source templates from `path` and render them for `ticker` / `query`.
///
/// A missing file is not an error: the built-in defaults are used instead.
/// Files ending in `.yaml` or `.yml` are parsed as YAML, anything else as JSON.
///
/// # Errors
///
/// Returns `ConfigError` if the file exists but cannot be read, parsed, or
/// fails validation.
pub fn load_sources(
    path: &Path,
    ticker: &str,
    query: &str,
) -> Result<Vec<FeedSource>, ConfigError> {
    let templates = if path.exists() {
        read_sources_file(path)?.sources
    } else {
        default_sources()
    };

    validate_sources(&templates)?;

    Ok(templates
        .iter()
        .map(|template| template.render(ticker, query))
        .collect())
}

fn read_sources_file(path: &Path) -> Result<SourcesFile, ConfigError> {
    let display = path.display().to_string();
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::SourcesFileIo {
        path: display.clone(),
        source: e,
    })?;

    let is_yaml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

    if is_yaml {
        serde_yaml::from_str(&content).map_err(|e| ConfigError::SourcesFileParse {
            path: display,
            reason: e.to_string(),
        })
    } else {
        serde_json::from_str(&content).map_err(|e| ConfigError::SourcesFileParse {
            path: display,
            reason: e.to_string(),
        })
    }
}

fn validate_sources(templates: &[SourceTemplate]) -> Result<(), ConfigError> {
    for (idx, template) in templates.iter().enumerate() {
        if template.name.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "source #{} has an empty name",
                idx + 1
            )));
        }
        if template.url.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "source '{}' has an empty url",
                template.name
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "sources_test.rs"]
mod tests;
