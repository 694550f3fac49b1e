//! Error types for the Textsift library.
//!
//! All fallible operations return [`TextsiftError`] through the crate-wide
//! [`Result`] alias. Cleaning itself never fails; errors come from reading
//! input, loading language resources, or invalid configuration.
//!
//! # Examples
//!
//! ```
//! use textsift::error::{Result, TextsiftError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(TextsiftError::invalid_argument("batch size must be positive"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Textsift operations.
#[derive(Error, Debug)]
pub enum TextsiftError {
    /// I/O errors (missing input file, undecodable text, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A language resource (stopwords, lemmas, lexicon) is missing or unreadable
    #[error("Resource error: {0}")]
    Resource(String),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with TextsiftError.
pub type Result<T> = std::result::Result<T, TextsiftError>;

impl TextsiftError {
    /// Create a new resource error.
    pub fn resource<S: Into<String>>(msg: S) -> Self {
        TextsiftError::Resource(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        TextsiftError::Config(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        TextsiftError::Other(format!("Invalid argument: {}", msg.into()))
    }
}
