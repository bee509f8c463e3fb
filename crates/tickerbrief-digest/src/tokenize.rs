//! Word tokenizer shared by the summarizer and the sentiment scorer.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

/// Function words dropped before frequency counting.
pub const STOPWORDS: &[&str] = &[
    "a", "an", "the", "and", "or", "but", "if", "while", "of", "to", "in", "on", "for", "with",
    "without", "by", "as", "is", "are", "was", "were", "be", "been", "this", "that", "these",
    "those", "from", "at", "it", "its", "into", "over", "under", "about", "after", "before",
    "between", "not", "no", "you", "your", "we", "our", "they", "their", "i", "me", "my", "us",
    "he", "she", "him", "her", "them", "his", "hers", "ours", "theirs",
];

/// Tokens of this many characters or fewer are dropped.
const MAX_DROPPED_LEN: usize = 2;

static WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-z']+").expect("valid word regex"));

/// Lowercase `text` and return its content words in order.
///
/// A word is a maximal run of ASCII letters and apostrophes; stopwords and
/// words of two characters or fewer are skipped. Repeats are kept because
/// callers count them.
#[must_use]
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    WORD_RE
        .find_iter(&lowered)
        .map(|m| m.as_str())
        .filter(|word| word.len() > MAX_DROPPED_LEN && !STOPWORDS.contains(word))
        .map(str::to_owned)
        .collect()
}

/// Count how often each token of `text` occurs.
#[must_use]
pub fn token_frequencies(text: &str) -> HashMap<String, usize> {
    let mut freq = HashMap::new();
    for token in tokenize(text) {
        *freq.entry(token).or_insert(0) += 1;
    }
    freq
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_has_no_tokens() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn lowercases_and_splits_on_punctuation() {
        assert_eq!(
            tokenize("Revenue-growth BEAT estimates!"),
            vec!["revenue", "growth", "beat", "estimates"]
        );
    }

    #[test]
    fn drops_stopwords_and_short_tokens() {
        let tokens = tokenize("It is up to the board of directors to act on it");
        assert_eq!(tokens, vec!["board", "directors", "act"]);
    }

    #[test]
    fn keeps_apostrophes_inside_tokens() {
        assert_eq!(tokenize("DoorDash's outlook"), vec!["doordash's", "outlook"]);
    }

    #[test]
    fn digits_separate_tokens() {
        assert_eq!(tokenize("Q3revenue 2024results"), vec!["revenue", "results"]);
    }

    #[test]
    fn non_ascii_letters_separate_tokens() {
        assert_eq!(tokenize("café société"), vec!["caf", "soci"]);
    }

    #[test]
    fn preserves_repeats_and_order() {
        assert_eq!(
            tokenize("growth, growth and more growth"),
            vec!["growth", "growth", "more", "growth"]
        );
    }

    #[test]
    fn never_yields_stopwords_or_short_tokens() {
        let text = "The quick brown fox and I went over to them; hers, ours, theirs. A an at by.";
        for token in tokenize(text) {
            assert!(token.len() > 2, "short token leaked: {token}");
            assert!(!STOPWORDS.contains(&token.as_str()), "stopword leaked: {token}");
        }
    }

    #[test]
    fn frequencies_count_repeats() {
        let freq = token_frequencies("Stock surges. Stock falls. Stock!");
        assert_eq!(freq.get("stock"), Some(&3));
        assert_eq!(freq.get("surges"), Some(&1));
        assert_eq!(freq.get("falls"), Some(&1));
        assert_eq!(freq.len(), 3);
    }
}
