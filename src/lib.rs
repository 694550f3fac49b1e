//! # Textsift
//!
//! Configurable text cleaning and corpus statistics.
//!
//! ## Features
//!
//! - Ordered, toggleable cleaning stages (URLs, emails, HTML, digits, punctuation)
//! - Word-boundary tokenization, stopword removal and lemmatization
//! - Batched reading of large files
//! - Word and n-gram frequency ranking
//! - Lexicon-based sentiment scoring
//! - Built-in or on-disk language resources
//!
//! ```
//! use textsift::analysis::cleaner::{CleaningConfig, clean};
//!
//! assert_eq!(clean("Report[1] costs $5 <b>now</b>", &CleaningConfig::default()), "report costs now");
//! ```

pub mod analysis;
pub mod batch;
pub mod cli;
pub mod config;
pub mod error;
pub mod frequency;
pub mod report;
pub mod resources;
pub mod sentiment;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
