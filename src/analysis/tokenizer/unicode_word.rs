//! Unicode word tokenizer implementation.
//!
//! Splits on Unicode word boundaries (UAX #29). Words come out whole
//! ("don't", "3.14"), each punctuation mark comes out as its own token, and
//! whitespace is dropped. This mirrors the shape of a word tokenizer that
//! keeps punctuation, so text that skipped cleaning still yields "!" and ","
//! tokens.

use unicode_segmentation::UnicodeSegmentation;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// A tokenizer that follows Unicode word boundaries.
#[derive(Clone, Debug, Default)]
pub struct UnicodeWordTokenizer;

impl UnicodeWordTokenizer {
    /// Create a tokenizer that keeps words and punctuation.
    pub fn new() -> Self {
        UnicodeWordTokenizer
    }
}

impl Tokenizer for UnicodeWordTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens: Vec<Token> = text
            .split_word_bound_indices()
            .filter(|(_, segment)| !segment.chars().all(char::is_whitespace))
            .enumerate()
            .map(|(position, (start, segment))| {
                Token::with_offsets(segment, position, start, start + segment.len())
            })
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "unicode_word"
    }
}
