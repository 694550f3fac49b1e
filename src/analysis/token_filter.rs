//! Token filter implementations for token transformation.
//!
//! Filters transform the token streams produced by tokenizers.
//!
//! # Available Filters
//!
//! - [`stop::StopFilter`] - Removes stop words
//! - [`lemma::LemmaFilter`] - Maps tokens to their lemmas
//!
//! # Examples
//!
//! ```
//! use textsift::analysis::token_filter::Filter;
//! use textsift::analysis::token_filter::stop::StopFilter;
//! use textsift::analysis::token::Token;
//!
//! let filter = StopFilter::from_words(vec!["the"]);
//! let tokens = vec![Token::new("the", 0), Token::new("river", 1)];
//! let filtered: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(filtered.len(), 1);
//! assert_eq!(filtered[0].text, "river");
//! ```
//!
//! # Filter Chaining
//!
//! ```text
//! Tokenizer → Stop Words → Lemmatizer
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
///
/// Filters receive a stream of tokens and produce a new stream, allowing
/// them to modify or drop tokens.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

// Individual filter modules
pub mod lemma;
pub mod stop;
