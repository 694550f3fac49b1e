//! Resources compiled into the crate.

use std::collections::HashSet;
use std::sync::Arc;

use super::{DEFAULT_LANGUAGE, LanguageResources};
use crate::analysis::token_filter::lemma::{Lemmatizer, RuleLemmatizer};
use crate::analysis::token_filter::stop::DEFAULT_ENGLISH_STOP_WORDS_SET;
use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::unicode_word::UnicodeWordTokenizer;
use crate::error::{Result, TextsiftError};
use crate::sentiment::SentimentScorer;
use crate::sentiment::vader::VaderScorer;

/// English stopwords, the rule-based lemmatizer and the bundled valence
/// lexicon. Any other language has a tokenizer but no data.
#[derive(Clone, Debug)]
pub struct BuiltinResources {
    language: String,
}

impl BuiltinResources {
    /// Built-in resources for `language`.
    pub fn new<S: Into<String>>(language: S) -> Self {
        BuiltinResources {
            language: language.into(),
        }
    }

    /// Built-in English resources.
    pub fn english() -> Self {
        Self::new(DEFAULT_LANGUAGE)
    }

    fn ensure_supported(&self, what: &str) -> Result<()> {
        if self.language == DEFAULT_LANGUAGE {
            Ok(())
        } else {
            Err(TextsiftError::resource(format!(
                "no built-in {what} for language '{}'",
                self.language
            )))
        }
    }
}

impl Default for BuiltinResources {
    fn default() -> Self {
        Self::english()
    }
}

impl LanguageResources for BuiltinResources {
    fn language(&self) -> &str {
        &self.language
    }

    fn word_tokenizer(&self) -> Arc<dyn Tokenizer> {
        Arc::new(UnicodeWordTokenizer::new())
    }

    fn stop_words(&self) -> Result<Arc<HashSet<String>>> {
        self.ensure_supported("stopwords")?;
        Ok(Arc::new(DEFAULT_ENGLISH_STOP_WORDS_SET.clone()))
    }

    fn lemmatizer(&self) -> Result<Arc<dyn Lemmatizer>> {
        self.ensure_supported("lemmatizer")?;
        Ok(Arc::new(RuleLemmatizer::new()))
    }

    fn sentiment_scorer(&self) -> Result<Arc<dyn SentimentScorer>> {
        self.ensure_supported("sentiment lexicon")?;
        Ok(Arc::new(VaderScorer::builtin()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english() {
        let resources = BuiltinResources::english();
        assert_eq!(resources.language(), "english");
        assert_eq!(resources.stop_words().unwrap().len(), 179);
        assert_eq!(resources.lemmatizer().unwrap().lemmatize("stories"), "story");
        assert!(resources.sentiment_scorer().unwrap().score("great").compound > 0.0);
    }

    #[test]
    fn test_unsupported_language() {
        let resources = BuiltinResources::new("french");
        assert_eq!(resources.word_tokenizer().name(), "unicode_word");
        assert!(matches!(resources.stop_words(), Err(TextsiftError::Resource(_))));
        assert!(resources.lemmatizer().is_err());
        assert!(resources.sentiment_scorer().is_err());
    }
}
