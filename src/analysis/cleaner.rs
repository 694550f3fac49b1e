//! Configurable text cleaning.
//!
//! [`TextCleaner`] applies an ordered chain of substitutions to raw text.
//! Each stage except the first and last is gated by one flag of
//! [`CleaningConfig`]:
//!
//! 1. Non-breaking spaces become ordinary spaces (always)
//! 2. URLs (`http…`, `www.…`, any case) are removed
//! 3. Email addresses are removed
//! 4. Angle-bracket tags are removed; a tag never spans a line break
//! 5. Digits are removed, then citation brackets left empty (`[]`)
//! 6. Everything but ASCII letters and whitespace is removed
//! 7. Text is folded to lowercase
//! 8. Blank runs are collapsed and the ends trimmed (always)
//!
//! Markup and addresses go before special-character stripping, otherwise
//! their letters would leak through as words.
//!
//! # Examples
//!
//! ```
//! use textsift::analysis::cleaner::{CleaningConfig, clean};
//!
//! let cleaned = clean("Report[1] costs $5 <b>now</b>", &CleaningConfig::default());
//! assert_eq!(cleaned, "report costs now");
//! ```

use std::fmt;
use std::sync::{Arc, LazyLock};

use serde::{Deserialize, Serialize};

use crate::analysis::char_filter::pattern_replace::PatternReplaceCharFilter;
use crate::analysis::char_filter::{CaseFoldCharFilter, CharFilter, WhitespaceTrimCharFilter};

/// Flags selecting which cleaning stages run. All stages are on by default.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CleaningConfig {
    pub remove_digits: bool,
    pub remove_urls: bool,
    pub remove_emails: bool,
    pub remove_html: bool,
    pub lowercase: bool,
    pub remove_special_chars: bool,
}

impl Default for CleaningConfig {
    fn default() -> Self {
        CleaningConfig {
            remove_digits: true,
            remove_urls: true,
            remove_emails: true,
            remove_html: true,
            lowercase: true,
            remove_special_chars: true,
        }
    }
}

impl CleaningConfig {
    /// A config with every optional stage disabled.
    pub fn none() -> Self {
        CleaningConfig {
            remove_digits: false,
            remove_urls: false,
            remove_emails: false,
            remove_html: false,
            lowercase: false,
            remove_special_chars: false,
        }
    }

    /// Only digits, citation brackets and non-letters go; case, URLs, emails
    /// and tags are left to special-character removal.
    pub fn letters_only() -> Self {
        CleaningConfig {
            remove_digits: true,
            remove_special_chars: true,
            ..Self::none()
        }
    }

    /// Settings for text handed to a sentiment scorer: structural noise goes,
    /// case and punctuation stay.
    pub fn for_sentiment(self) -> Self {
        CleaningConfig {
            lowercase: false,
            remove_special_chars: false,
            ..self
        }
    }
}

fn stage(pattern: &str, replacement: &str, name: &'static str) -> Arc<dyn CharFilter> {
    let filter = PatternReplaceCharFilter::new(pattern, replacement)
        .expect("cleaning patterns are valid")
        .with_name(name);
    Arc::new(filter)
}

static NBSP: LazyLock<Arc<dyn CharFilter>> = LazyLock::new(|| stage("\u{a0}", " ", "nbsp"));
static URLS: LazyLock<Arc<dyn CharFilter>> =
    LazyLock::new(|| stage(r"(?i)http\S+|www\.\S+", "", "urls"));
static EMAILS: LazyLock<Arc<dyn CharFilter>> = LazyLock::new(|| stage(r"\S+@\S+", "", "emails"));
static HTML: LazyLock<Arc<dyn CharFilter>> = LazyLock::new(|| stage(r"<[^>\n]+>", "", "html"));
static DIGITS: LazyLock<Arc<dyn CharFilter>> = LazyLock::new(|| stage(r"\d+", "", "digits"));
static EMPTY_BRACKETS: LazyLock<Arc<dyn CharFilter>> =
    LazyLock::new(|| stage(r"\[\]", "", "empty_brackets"));
static SPECIAL_CHARS: LazyLock<Arc<dyn CharFilter>> =
    LazyLock::new(|| stage(r"[^a-zA-Z\s]", "", "special_chars"));

/// The cleaning chain selected by a [`CleaningConfig`].
#[derive(Clone)]
pub struct TextCleaner {
    config: CleaningConfig,
    stages: Vec<Arc<dyn CharFilter>>,
}

impl TextCleaner {
    /// Build the stage chain for `config`.
    pub fn new(config: CleaningConfig) -> Self {
        let mut stages: Vec<Arc<dyn CharFilter>> = vec![Arc::clone(&NBSP)];

        if config.remove_urls {
            stages.push(Arc::clone(&URLS));
        }
        if config.remove_emails {
            stages.push(Arc::clone(&EMAILS));
        }
        if config.remove_html {
            stages.push(Arc::clone(&HTML));
        }
        if config.remove_digits {
            stages.push(Arc::clone(&DIGITS));
            stages.push(Arc::clone(&EMPTY_BRACKETS));
        }
        if config.remove_special_chars {
            stages.push(Arc::clone(&SPECIAL_CHARS));
        }
        if config.lowercase {
            stages.push(Arc::new(CaseFoldCharFilter::new()));
        }
        stages.push(Arc::new(WhitespaceTrimCharFilter::new()));

        TextCleaner { config, stages }
    }

    /// The config this cleaner was built from.
    pub fn config(&self) -> &CleaningConfig {
        &self.config
    }

    /// Names of the stages in application order.
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }

    /// Run every stage over `text`.
    pub fn clean(&self, text: &str) -> String {
        let mut cleaned = text.to_string();
        for stage in &self.stages {
            cleaned = stage.filter(&cleaned);
        }
        cleaned
    }
}

impl Default for TextCleaner {
    fn default() -> Self {
        Self::new(CleaningConfig::default())
    }
}

impl CharFilter for TextCleaner {
    fn filter(&self, input: &str) -> String {
        self.clean(input)
    }

    fn name(&self) -> &'static str {
        "text_cleaner"
    }
}

impl fmt::Debug for TextCleaner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextCleaner")
            .field("config", &self.config)
            .field("stages", &self.stage_names())
            .finish()
    }
}

/// Clean `text` with a one-off cleaner built from `config`.
pub fn clean(text: &str, config: &CleaningConfig) -> String {
    TextCleaner::new(*config).clean(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_all_stages() {
        let config = CleaningConfig::default();
        assert_eq!(
            clean("Report[1] costs $5 <b>now</b>", &config),
            "report costs now"
        );

        let keep_case = CleaningConfig {
            lowercase: false,
            ..config
        };
        assert_eq!(
            clean("Report[1] costs $5 <b>now</b>", &keep_case),
            "Report costs now"
        );
    }

    #[test]
    fn test_empty_and_fully_stripped_input() {
        let config = CleaningConfig::default();
        assert_eq!(clean("", &config), "");
        assert_eq!(clean("12345 !!! <br/>", &config), "");
        assert_eq!(clean("   \u{a0}  ", &CleaningConfig::none()), "");
    }

    #[test]
    fn test_non_breaking_space_always_replaced() {
        let cleaned = clean("New\u{a0}Delhi", &CleaningConfig::none());
        assert_eq!(cleaned, "New Delhi");
    }

    #[test]
    fn test_urls_and_emails() {
        let config = CleaningConfig::default();
        assert_eq!(
            clean("see https://example.com/a?b=1 or www.example.org today", &config),
            "see or today"
        );
        assert_eq!(clean("mail jane.doe@example.com now", &config), "mail now");
        assert_eq!(clean("Visit HTTPS://EXAMPLE.COM today", &config), "visit today");
        assert_eq!(clean("WWW.Example.org and Www.x.io", &config), "and");
    }

    #[test]
    fn test_urls_removed_before_special_chars() {
        let only_special = CleaningConfig {
            remove_urls: false,
            ..CleaningConfig::default()
        };
        // Without URL removal the address letters leak through.
        assert_eq!(clean("go http://abc.io", &only_special), "go httpabcio");
        assert_eq!(clean("go http://abc.io", &CleaningConfig::default()), "go");
    }

    #[test]
    fn test_html_tags() {
        let config = CleaningConfig {
            remove_special_chars: false,
            lowercase: false,
            ..CleaningConfig::default()
        };
        assert_eq!(
            clean("<p class=\"x\">Hello</p> <i>there</i>", &config),
            "Hello there"
        );
        // A tag broken over two lines is left to special-character removal.
        assert_eq!(
            clean("a <span\nclass=big> river", &CleaningConfig::default()),
            "a span\nclassbig river"
        );
    }

    #[test]
    fn test_citation_brackets_removed_with_digits() {
        let config = CleaningConfig {
            remove_special_chars: false,
            lowercase: false,
            ..CleaningConfig::default()
        };
        assert_eq!(
            clean("India[12] is a country[3].", &config),
            "India is a country."
        );
    }

    #[test]
    fn test_digits_kept_when_disabled() {
        let config = CleaningConfig {
            remove_digits: false,
            remove_special_chars: false,
            ..CleaningConfig::default()
        };
        assert_eq!(clean("Year 2024 [1]", &config), "year 2024 [1]");
    }

    #[test]
    fn test_special_chars_leave_only_letters_and_whitespace() {
        let config = CleaningConfig::default();
        let cleaned = clean("Hello, World! It's   a fine-day; isn't it?", &config);
        assert!(
            cleaned
                .chars()
                .all(|c| c.is_ascii_alphabetic() || c.is_whitespace())
        );
        assert_eq!(cleaned, "hello world its a fineday isnt it");
    }

    #[test]
    fn test_idempotent() {
        let configs = [
            CleaningConfig::default(),
            CleaningConfig {
                lowercase: false,
                ..CleaningConfig::default()
            },
            CleaningConfig {
                remove_urls: false,
                remove_html: false,
                ..CleaningConfig::default()
            },
        ];
        let inputs = [
            "Report[1] costs $5 <b>now</b>",
            "see https://example.com  and a@b.c\u{a0}ok",
            "Plain text, with punctuation!\nSecond line.",
            "Visit HTTPS://EXAMPLE.COM today",
            "HTTPServer rocks",
            "a <span\nclass=big> river",
        ];

        for config in &configs {
            for input in inputs {
                let once = clean(input, config);
                assert_eq!(clean(&once, config), once);
            }
        }
    }

    #[test]
    fn test_stage_names_follow_config() {
        let cleaner = TextCleaner::new(CleaningConfig {
            remove_emails: false,
            lowercase: false,
            ..CleaningConfig::default()
        });
        assert_eq!(
            cleaner.stage_names(),
            vec![
                "nbsp",
                "urls",
                "html",
                "digits",
                "empty_brackets",
                "special_chars",
                "whitespace_trim"
            ]
        );
    }

    #[test]
    fn test_for_sentiment_keeps_case_and_punctuation() {
        let config = CleaningConfig::default().for_sentiment();
        assert_eq!(
            clean("GREAT news!!! see http://x.io <b>now</b>", &config),
            "GREAT news!!! see now"
        );
    }

    #[test]
    fn test_letters_only_keeps_case() {
        let config = CleaningConfig::letters_only();
        assert_eq!(
            clean("India[1] is a Country\u{a0}in Asia.", &config),
            "India is a Country in Asia"
        );
        assert_eq!(clean("see http://x.io now", &config), "see httpxio now");
    }

    #[test]
    fn test_config_deserialize_defaults() {
        let config: CleaningConfig = serde_json::from_str(r#"{"lowercase": false}"#).unwrap();
        assert!(!config.lowercase);
        assert!(config.remove_digits);
        assert!(config.remove_special_chars);
    }
}
