//! Resources read from a directory on disk.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::debug;

use super::{DEFAULT_LANGUAGE, LanguageResources};
use crate::analysis::token_filter::lemma::{DictionaryLemmatizer, Lemmatizer, RuleLemmatizer};
use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::unicode_word::UnicodeWordTokenizer;
use crate::error::{Result, TextsiftError};
use crate::sentiment::SentimentScorer;
use crate::sentiment::vader::VaderScorer;

pub(crate) const STOPWORDS_DIR: &str = "stopwords";
pub(crate) const LEMMAS_DIR: &str = "lemmas";
pub(crate) const SENTIMENT_DIR: &str = "sentiment";
pub(crate) const LEXICON_FILE: &str = "vader_lexicon.txt";

/// Loads resource files from a root directory each time they are requested.
///
/// For English, forms missing from the lemma table fall back to the
/// rule-based lemmatizer.
#[derive(Clone, Debug)]
pub struct DirectoryResources {
    root: PathBuf,
    language: String,
}

impl DirectoryResources {
    /// Resources for `language` under `root`.
    pub fn new<P: Into<PathBuf>, S: Into<String>>(root: P, language: S) -> Self {
        DirectoryResources {
            root: root.into(),
            language: language.into(),
        }
    }

    /// The root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the stopword list.
    pub fn stop_words_path(&self) -> PathBuf {
        self.root.join(STOPWORDS_DIR).join(&self.language)
    }

    /// Path of the lemma table.
    pub fn lemmas_path(&self) -> PathBuf {
        self.root
            .join(LEMMAS_DIR)
            .join(format!("{}.tsv", self.language))
    }

    /// Path of the valence lexicon.
    pub fn lexicon_path(&self) -> PathBuf {
        self.root.join(SENTIMENT_DIR).join(LEXICON_FILE)
    }
}

fn require_file(path: &Path) -> Result<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(TextsiftError::resource(format!(
            "resource file {} not found (run `textsift provision`)",
            path.display()
        )))
    }
}

impl LanguageResources for DirectoryResources {
    fn language(&self) -> &str {
        &self.language
    }

    fn word_tokenizer(&self) -> Arc<dyn Tokenizer> {
        Arc::new(UnicodeWordTokenizer::new())
    }

    fn stop_words(&self) -> Result<Arc<HashSet<String>>> {
        let path = self.stop_words_path();
        require_file(&path)?;
        let contents = fs::read_to_string(&path).map_err(|e| {
            TextsiftError::resource(format!("cannot read {}: {e}", path.display()))
        })?;

        let words: HashSet<String> = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect();
        debug!("loaded {} stopwords from {}", words.len(), path.display());

        Ok(Arc::new(words))
    }

    fn lemmatizer(&self) -> Result<Arc<dyn Lemmatizer>> {
        let path = self.lemmas_path();
        require_file(&path)?;
        let mut lemmatizer = DictionaryLemmatizer::from_path(&path)?;
        debug!("loaded {} lemmas from {}", lemmatizer.len(), path.display());

        if self.language == DEFAULT_LANGUAGE {
            lemmatizer = lemmatizer.with_fallback(Arc::new(RuleLemmatizer::new()));
        }
        Ok(Arc::new(lemmatizer))
    }

    fn sentiment_scorer(&self) -> Result<Arc<dyn SentimentScorer>> {
        let path = self.lexicon_path();
        require_file(&path)?;
        let scorer = VaderScorer::from_path(&path)?;
        debug!(
            "loaded {} lexicon entries from {}",
            scorer.lexicon_len(),
            path.display()
        );
        Ok(Arc::new(scorer))
    }
}
