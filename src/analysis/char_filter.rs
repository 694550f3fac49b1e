//! Char filter implementations for text normalization.
//!
//! Char filters pre-process the text string before it is passed to the
//! tokenizer. Every filter is a total string-to-string transform.
//!
//! # Available Filters
//!
//! - [`pattern_replace::PatternReplaceCharFilter`] - Regex-based replacement
//! - [`CaseFoldCharFilter`] - Lowercase folding
//! - [`WhitespaceTrimCharFilter`] - Collapse blank runs and trim
//! - [`crate::analysis::cleaner::TextCleaner`] - The full cleaning chain
//!
//! # Examples
//!
//! ```
//! use textsift::analysis::char_filter::CharFilter;
//! use textsift::analysis::char_filter::pattern_replace::PatternReplaceCharFilter;
//!
//! let filter = PatternReplaceCharFilter::new(r"\d+", "").unwrap();
//! assert_eq!(filter.filter("route 66"), "route ");
//! ```

use std::sync::LazyLock;

use regex::Regex;

/// Trait for character filters that transform text before tokenization.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

pub mod pattern_replace;

/// Folds text to lowercase.
#[derive(Clone, Debug, Default)]
pub struct CaseFoldCharFilter;

impl CaseFoldCharFilter {
    pub fn new() -> Self {
        CaseFoldCharFilter
    }
}

impl CharFilter for CaseFoldCharFilter {
    fn filter(&self, input: &str) -> String {
        input.to_lowercase()
    }

    fn name(&self) -> &'static str {
        "case_fold"
    }
}

static BLANK_RUN: LazyLock<Regex> = LazyLock::new(|| {
    // Horizontal blanks only, line breaks survive.
    Regex::new(r"[ \t]{2,}").expect("blank run pattern is valid")
});

/// Collapses runs of spaces and tabs to a single space, then trims both ends.
#[derive(Clone, Debug, Default)]
pub struct WhitespaceTrimCharFilter;

impl WhitespaceTrimCharFilter {
    pub fn new() -> Self {
        WhitespaceTrimCharFilter
    }
}

impl CharFilter for WhitespaceTrimCharFilter {
    fn filter(&self, input: &str) -> String {
        BLANK_RUN.replace_all(input, " ").trim().to_string()
    }

    fn name(&self) -> &'static str {
        "whitespace_trim"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_fold() {
        assert_eq!(CaseFoldCharFilter::new().filter("Hello WORLD"), "hello world");
    }

    #[test]
    fn test_whitespace_trim() {
        let filter = WhitespaceTrimCharFilter::new();
        assert_eq!(filter.filter("  costs \t  now  "), "costs now");
        assert_eq!(filter.filter("a\n\nb"), "a\n\nb");
        assert_eq!(filter.filter("   "), "");
    }
}
