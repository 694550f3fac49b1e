//! Language resources: word tokenizer, stopwords, lemmatizer and sentiment
//! scorer for one language.
//!
//! The rest of the crate never loads NLP data itself. It asks a
//! [`LanguageResources`] provider, which either serves the data compiled into
//! the crate ([`BuiltinResources`]) or reads it from a directory laid out by
//! [`provision`] ([`DirectoryResources`]).
//!
//! ```text
//! <root>/
//!   stopwords/<language>          one word per line
//!   lemmas/<language>.tsv         form<TAB>lemma
//!   sentiment/vader_lexicon.txt   token<TAB>valence[<TAB>...]
//! ```

use std::collections::HashSet;
use std::sync::Arc;

use crate::analysis::token_filter::lemma::Lemmatizer;
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;
use crate::sentiment::SentimentScorer;

pub mod builtin;
pub mod directory;
pub mod provision;

pub use builtin::BuiltinResources;
pub use directory::DirectoryResources;
pub use provision::{ProvisionReport, provision};

/// Language the built-in data covers.
pub const DEFAULT_LANGUAGE: &str = "english";

/// Provider of per-language NLP capabilities.
///
/// Fallible methods fail when the data for the language is missing, so callers
/// should fetch everything they need before starting work.
pub trait LanguageResources: Send + Sync {
    /// The language served.
    fn language(&self) -> &str;

    /// Tokenizer splitting text into words and punctuation.
    fn word_tokenizer(&self) -> Arc<dyn Tokenizer>;

    /// Stopword set, compared exactly and case-sensitively.
    fn stop_words(&self) -> Result<Arc<HashSet<String>>>;

    /// Word-to-lemma mapping.
    fn lemmatizer(&self) -> Result<Arc<dyn Lemmatizer>>;

    /// Polarity scorer.
    fn sentiment_scorer(&self) -> Result<Arc<dyn SentimentScorer>>;
}
