/// Unicode `White_Space` plus the ASCII information separators U+001C..=U+001F.
pub(crate) fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Trim [`is_space`] characters from both ends.
pub(crate) fn trim_space(text: &str) -> &str {
    text.trim_matches(is_space)
}

/// Collapse every whitespace run to a single space and trim the ends.
///
/// The file and record separators (U+001C..=U+001F) count as whitespace.
#[must_use]
pub fn normalize_text(text: &str) -> String {
    text.split(is_space)
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string_stays_empty() {
        assert_eq!(normalize_text(""), "");
    }

    #[test]
    fn whitespace_only_becomes_empty() {
        assert_eq!(normalize_text(" \n\t  "), "");
    }

    #[test]
    fn collapses_newlines_and_tabs() {
        assert_eq!(
            normalize_text("  Shares\n\trose   sharply\r\n today "),
            "Shares rose sharply today"
        );
    }

    #[test]
    fn already_normal_text_is_unchanged() {
        assert_eq!(normalize_text("a b c"), "a b c");
    }

    #[test]
    fn information_separators_are_whitespace() {
        assert_eq!(
            normalize_text("\u{1c}Shares\u{1d}rose\u{1e}\u{1f} today\u{1f}"),
            "Shares rose today"
        );
    }

    #[test]
    fn unicode_spaces_collapse() {
        assert_eq!(normalize_text("a\u{a0}\u{2003}b\u{3000}"), "a b");
    }

    #[test]
    fn trim_space_strips_separators() {
        assert_eq!(trim_space("\u{1f} x y \u{1c}"), "x y");
    }
}
