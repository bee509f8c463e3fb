use serde::{Deserialize, Serialize};

/// One entry extracted from a news feed.
///
/// Empty strings stand in for absent fields. Once extracted an item is never
/// mutated; the digest pipeline only reads it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedItem {
    /// Display name of the feed the item came from.
    pub source: String,
    pub title: String,
    pub link: String,
    pub summary: String,
    /// Publication date exactly as the feed reported it.
    pub published: String,
}

impl FeedItem {
    /// Key used to detect duplicates: the link when present, else the title.
    ///
    /// Items with neither share the empty key.
    #[must_use]
    pub fn identity_key(&self) -> &str {
        if self.link.is_empty() {
            &self.title
        } else {
            &self.link
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(title: &str, link: &str) -> FeedItem {
        FeedItem {
            source: "Test".to_string(),
            title: title.to_string(),
            link: link.to_string(),
            ..FeedItem::default()
        }
    }

    #[test]
    fn identity_key_prefers_link() {
        assert_eq!(item("Headline", "https://a").identity_key(), "https://a");
    }

    #[test]
    fn identity_key_falls_back_to_title() {
        assert_eq!(item("Headline", "").identity_key(), "Headline");
    }

    #[test]
    fn identity_key_is_empty_without_link_or_title() {
        assert_eq!(item("", "").identity_key(), "");
    }
}
