//! Text analysis module for Textsift.
//!
//! This module provides the text processing pipeline: char filters that clean
//! raw text, tokenizers that split it, and token filters that drop stopwords
//! and lemmatize what remains.
//!
//! ```text
//! Raw Text → TextCleaner → Tokenizer → StopFilter → LemmaFilter → Tokens
//! ```

pub mod analyzer;
pub mod char_filter;
pub mod cleaner;
pub mod processor;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

// Re-export commonly used types
pub use cleaner::{CleaningConfig, TextCleaner, clean};
pub use processor::{ProcessOptions, TextProcessor};
pub use token::Token;
