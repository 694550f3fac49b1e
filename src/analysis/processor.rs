//! Text normalization: clean, tokenize, drop stopwords, lemmatize.
//!
//! [`TextProcessor`] assembles a [`PipelineAnalyzer`] from [`ProcessOptions`]
//! and a [`LanguageResources`] provider. Resources are fetched once at
//! construction, so a missing stopword list or lemma table fails there rather
//! than halfway through a file.
//!
//! # Examples
//!
//! ```
//! use textsift::analysis::processor::{ProcessOptions, TextProcessor};
//! use textsift::resources::BuiltinResources;
//!
//! let processor = TextProcessor::new(&ProcessOptions::default(), &BuiltinResources::english())
//!     .unwrap();
//! let tokens = processor.process("The rivers of India[1] flow into the sea.").unwrap();
//! assert_eq!(tokens, vec!["river", "india", "flow", "sea"]);
//! ```

use std::sync::Arc;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::cleaner::{CleaningConfig, TextCleaner};
use crate::analysis::token_filter::lemma::LemmaFilter;
use crate::analysis::token_filter::stop::StopFilter;
use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::whitespace::WhitespaceTokenizer;
use crate::error::Result;
use crate::resources::LanguageResources;

/// Which normalization steps [`TextProcessor`] runs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessOptions {
    /// Run the text cleaner before tokenizing.
    pub clean: bool,
    /// Use the language's word tokenizer; otherwise split on whitespace.
    pub tokenize: bool,
    /// Drop tokens found in the language stopword set.
    pub remove_stopwords: bool,
    /// Map tokens to lemmas.
    pub lemmatize: bool,
    /// Language whose resources are used.
    pub language: String,
    /// Cleaning stages applied when `clean` is set.
    pub cleaning: CleaningConfig,
}

impl Default for ProcessOptions {
    fn default() -> Self {
        ProcessOptions {
            clean: true,
            tokenize: true,
            remove_stopwords: true,
            lemmatize: true,
            language: "english".to_string(),
            cleaning: CleaningConfig::default(),
        }
    }
}

/// Turns raw text into normalized tokens.
#[derive(Clone, Debug)]
pub struct TextProcessor {
    analyzer: PipelineAnalyzer,
}

impl TextProcessor {
    /// Build the pipeline for `options`, pulling what it needs from `resources`.
    pub fn new(options: &ProcessOptions, resources: &dyn LanguageResources) -> Result<Self> {
        let tokenizer: Arc<dyn Tokenizer> = if options.tokenize {
            resources.word_tokenizer()
        } else {
            Arc::new(WhitespaceTokenizer::new())
        };

        let mut analyzer = PipelineAnalyzer::new(tokenizer);

        if options.clean {
            analyzer = analyzer.add_char_filter(Arc::new(TextCleaner::new(options.cleaning)));
        }
        if options.remove_stopwords {
            let stop_words = resources.stop_words()?;
            analyzer = analyzer.add_filter(Arc::new(StopFilter::with_shared_stop_words(stop_words)));
        }
        if options.lemmatize {
            let lemmatizer = resources.lemmatizer()?;
            analyzer = analyzer.add_filter(Arc::new(LemmaFilter::with_lemmatizer(lemmatizer)));
        }

        let analyzer = analyzer.with_name(format!("{}_processor", resources.language()));
        debug!("built text processor: {analyzer:?}");

        Ok(TextProcessor { analyzer })
    }

    /// The underlying analysis pipeline.
    pub fn analyzer(&self) -> &PipelineAnalyzer {
        &self.analyzer
    }

    /// Normalize `text` into an ordered token list.
    pub fn process(&self, text: &str) -> Result<Vec<String>> {
        Ok(self
            .analyzer
            .analyze(text)?
            .map(|token| token.text)
            .collect())
    }
}
