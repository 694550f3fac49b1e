//! Lemmatizing token filter and lemmatizer implementations.

use std::sync::Arc;

use super::Filter;
use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for lemmatizers mapping a surface form to its dictionary form.
pub trait Lemmatizer: Send + Sync {
    /// Return the lemma of `word`, or `word` itself when none is known.
    fn lemmatize(&self, word: &str) -> String;

    /// Get the name of this lemmatizer.
    fn name(&self) -> &'static str;
}

// Lemmatizer implementations
pub mod dictionary;
pub mod rule;

pub use dictionary::DictionaryLemmatizer;
pub use rule::RuleLemmatizer;

/// Filter that replaces every token with its lemma, one to one.
#[derive(Clone)]
pub struct LemmaFilter {
    lemmatizer: Arc<dyn Lemmatizer>,
}

impl std::fmt::Debug for LemmaFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LemmaFilter")
            .field("lemmatizer", &self.lemmatizer.name())
            .finish()
    }
}

impl LemmaFilter {
    /// Create a lemma filter with the rule-based lemmatizer.
    pub fn new() -> Self {
        LemmaFilter {
            lemmatizer: Arc::new(RuleLemmatizer::new()),
        }
    }

    /// Create a lemma filter with a custom lemmatizer.
    pub fn with_lemmatizer(lemmatizer: Arc<dyn Lemmatizer>) -> Self {
        LemmaFilter { lemmatizer }
    }
}

impl Default for LemmaFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for LemmaFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens = tokens
            .map(|token| {
                let lemma = self.lemmatizer.lemmatize(&token.text);
                token.with_text(lemma)
            })
            .collect::<Vec<_>>();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "lemma"
    }
}
