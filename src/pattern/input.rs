//! Splitting free-form input into individual patterns.

use std::sync::LazyLock;

use regex::Regex;

/// Separators between patterns: a comma with optional trailing whitespace,
/// or a line break.
#[allow(clippy::expect_used)]
static PATTERN_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r",\s*|\r?\n").expect("pattern separator regex is valid") // Static pattern, safe to panic
});

/// Splits `input` into trimmed, non-empty patterns, preserving order.
///
/// # Examples
///
/// ```
/// use fusker_core::pattern::split_pattern_list;
///
/// let patterns = split_pattern_list("http://x/[1-2].jpg, http://y/[a-b].png\n");
/// assert_eq!(patterns, vec!["http://x/[1-2].jpg", "http://y/[a-b].png"]);
/// ```
#[must_use]
pub fn split_pattern_list(input: &str) -> Vec<String> {
    PATTERN_SEPARATOR
        .split(input)
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_on_comma_and_whitespace() {
        assert_eq!(
            split_pattern_list("a[1-2],b[1-2],   c"),
            vec!["a[1-2]", "b[1-2]", "c"]
        );
    }

    #[test]
    fn test_split_on_newlines() {
        assert_eq!(split_pattern_list("one\r\ntwo\nthree"), vec!["one", "two", "three"]);
    }

    #[test]
    fn test_split_skips_empty_pieces() {
        assert_eq!(split_pattern_list(" , ,x,\n\n"), vec!["x"]);
        assert!(split_pattern_list("   ").is_empty());
    }

    #[test]
    fn test_split_single_pattern_is_trimmed() {
        assert_eq!(split_pattern_list("  http://x/[a-c].jpg  "), vec!["http://x/[a-c].jpg"]);
    }
}
