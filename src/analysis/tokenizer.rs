//! Tokenizer implementations for text analysis.
//!
//! Tokenizers are the first step after cleaning, responsible for splitting
//! text into tokens.
//!
//! # Available Tokenizers
//!
//! - [`whitespace::WhitespaceTokenizer`] - Splits on whitespace runs
//! - [`unicode_word::UnicodeWordTokenizer`] - Unicode word boundaries, punctuation kept as tokens
//!
//! # Examples
//!
//! ```
//! use textsift::analysis::tokenizer::Tokenizer;
//! use textsift::analysis::tokenizer::whitespace::WhitespaceTokenizer;
//!
//! let tokenizer = WhitespaceTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("Hello world").unwrap().collect();
//! assert_eq!(tokens.len(), 2);
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` so tokenizers can be shared through
/// language resources.
///
/// # Examples
///
/// Implementing a custom tokenizer:
///
/// ```
/// use textsift::analysis::token::{Token, TokenStream};
/// use textsift::analysis::tokenizer::Tokenizer;
/// use textsift::error::Result;
///
/// struct CommaTokenizer;
///
/// impl Tokenizer for CommaTokenizer {
///     fn tokenize(&self, text: &str) -> Result<TokenStream> {
///         let tokens: Vec<Token> = text
///             .split(',')
///             .enumerate()
///             .map(|(i, s)| Token::new(s, i))
///             .collect();
///         Ok(Box::new(tokens.into_iter()))
///     }
///
///     fn name(&self) -> &'static str {
///         "comma"
///     }
/// }
/// ```
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

// Individual tokenizer modules
pub mod unicode_word;
pub mod whitespace;
