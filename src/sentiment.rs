//! Sentiment polarity scoring.
//!
//! A [`SentimentScorer`] turns a piece of text into a [`SentimentScore`]. Text
//! handed to a scorer should be free of URLs, emails and markup but keep its
//! original casing and punctuation, because capitals and exclamation marks
//! carry intensity. See [`crate::analysis::cleaner::CleaningConfig::for_sentiment`].
//!
//! # Examples
//!
//! ```
//! use textsift::sentiment::SentimentScorer;
//! use textsift::sentiment::vader::VaderScorer;
//!
//! let scorer = VaderScorer::builtin();
//! let score = scorer.score("This is wonderful and great!");
//! assert!(score.positive > score.negative);
//! assert!(score.compound > 0.5);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

pub mod vader;

/// Polarity of a text: proportions of negative, neutral and positive
/// content, and a normalized compound score in `[-1, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SentimentScore {
    #[serde(rename = "neg")]
    pub negative: f64,
    #[serde(rename = "neu")]
    pub neutral: f64,
    #[serde(rename = "pos")]
    pub positive: f64,
    pub compound: f64,
}

impl fmt::Display for SentimentScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{'neg': {}, 'neu': {}, 'pos': {}, 'compound': {}}}",
            self.negative, self.neutral, self.positive, self.compound
        )
    }
}

/// Trait for sentiment scorers.
pub trait SentimentScorer: Send + Sync {
    /// Score `text`. Scoring never fails; text without signal scores neutral.
    fn score(&self, text: &str) -> SentimentScore;

    /// Get the name of this scorer.
    fn name(&self) -> &'static str;
}
