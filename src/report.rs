//! End-to-end corpus statistics for one file.
//!
//! [`CorpusReport::build`] makes three passes over the input:
//!
//! 1. stream token batches into a [`FrequencyAggregator`];
//! 2. read the token list again as one sequence and count n-grams over it;
//! 3. read the raw text, clean it keeping case and punctuation, and score its
//!    sentiment.
//!
//! [`CleanPreview`] is the lighter variant: clean each line and count
//! whitespace-separated words without tokenizing or normalizing.

use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::Serialize;

use crate::analysis::cleaner::{CleaningConfig, TextCleaner};
use crate::analysis::processor::TextProcessor;
use crate::batch::{BatchReader, TokenBatch};
use crate::config::AnalysisConfig;
use crate::error::Result;
use crate::frequency::{FrequencyAggregator, FrequencyTable, NgramAggregator};
use crate::resources::LanguageResources;
use crate::sentiment::SentimentScore;

/// A word and how often it occurred.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: u64,
}

/// An n-gram and how often it occurred.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NgramCount {
    pub ngram: Vec<String>,
    pub count: u64,
}

/// Word frequencies, n-grams and sentiment of one file.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CorpusReport {
    pub source: PathBuf,
    pub total_words: u64,
    pub unique_words: usize,
    pub batches: usize,
    pub top_words: Vec<WordCount>,
    pub ngram_size: usize,
    pub top_ngrams: Vec<NgramCount>,
    pub sentiment: SentimentScore,
}

impl CorpusReport {
    /// Analyze the file at `path`.
    ///
    /// All resources are loaded before the file is read, so a missing stopword
    /// list or lexicon fails before any work is done.
    pub fn build<P: AsRef<Path>>(
        path: P,
        config: &AnalysisConfig,
        resources: &dyn LanguageResources,
    ) -> Result<Self> {
        let path = path.as_ref();
        config.validate()?;

        let processor = TextProcessor::new(&config.process, resources)?;
        let scorer = resources.sentiment_scorer()?;
        let mut ngrams = NgramAggregator::new(config.ngram_size)?;

        info!("analyzing {}", path.display());

        let mut frequencies = FrequencyAggregator::new();
        let mut batches = 0;
        for batch in BatchReader::open(path, &processor, config.batch_size)? {
            let batch = batch?;
            debug!("batch {batches}: {} tokens", batch.len());
            frequencies.update(&batch);
            batches += 1;
        }
        info!(
            "counted {} words ({} unique) in {batches} batches",
            frequencies.total(),
            frequencies.unique()
        );

        let tokens: TokenBatch = BatchReader::open(path, &processor, config.batch_size)?
            .collect::<Result<Vec<_>>>()?
            .concat();
        ngrams.update(&tokens);
        debug!("counted {} {}-grams", ngrams.total(), ngrams.width());

        let raw = fs::read_to_string(path)?;
        let text = if config.process.clean {
            TextCleaner::new(config.process.cleaning.for_sentiment()).clean(&raw)
        } else {
            raw
        };
        let sentiment = scorer.score(&text);
        debug!("sentiment via {}: {sentiment}", scorer.name());

        Ok(CorpusReport {
            source: path.to_path_buf(),
            total_words: frequencies.total(),
            unique_words: frequencies.unique(),
            batches,
            top_words: frequencies
                .top_k(config.top_words)
                .into_iter()
                .map(|(word, count)| WordCount { word, count })
                .collect(),
            ngram_size: config.ngram_size,
            top_ngrams: ngrams
                .top_k(config.top_ngrams)
                .into_iter()
                .map(|(ngram, count)| NgramCount { ngram, count })
                .collect(),
            sentiment,
        })
    }
}

/// Cleaned lines and plain word counts of one file.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CleanPreview {
    pub source: PathBuf,
    /// The first cleaned lines, in file order.
    pub lines: Vec<String>,
    pub total_words: u64,
    pub top_words: Vec<WordCount>,
}

impl CleanPreview {
    /// Clean every line of `path`, keep the first `preview_lines` of them and
    /// count the words of all of them.
    pub fn build<P: AsRef<Path>>(
        path: P,
        cleaning: CleaningConfig,
        preview_lines: usize,
        top_words: usize,
    ) -> Result<Self> {
        let path = path.as_ref();
        let cleaner = TextCleaner::new(cleaning);
        let reader = BufReader::new(File::open(path)?);

        let mut lines = Vec::with_capacity(preview_lines);
        let mut words: FrequencyTable<String> = FrequencyTable::new();
        for line in reader.lines() {
            let cleaned = cleaner.clean(&line?);
            words.extend(cleaned.split_whitespace().map(str::to_string));
            if lines.len() < preview_lines {
                lines.push(cleaned);
            }
        }
        info!("{}: {} words after cleaning", path.display(), words.total());

        Ok(CleanPreview {
            source: path.to_path_buf(),
            lines,
            total_words: words.total(),
            top_words: words
                .top_k(top_words)
                .into_iter()
                .map(|(word, count)| WordCount { word, count })
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TextsiftError;
    use crate::resources::BuiltinResources;
    use tempfile::TempDir;

    fn write_corpus(dir: &TempDir, text: &str) -> PathBuf {
        let path = dir.path().join("corpus.txt");
        fs::write(&path, text).unwrap();
        path
    }

    #[test]
    fn test_report() {
        let dir = TempDir::new().unwrap();
        let path = write_corpus(
            &dir,
            "Rivers are wonderful.\nThe rivers feed great plains.\nRivers feed the sea!\n",
        );
        let config = AnalysisConfig {
            batch_size: 2,
            ..AnalysisConfig::default()
        };

        let report = CorpusReport::build(&path, &config, &BuiltinResources::english()).unwrap();

        // river wonderful | river feed great plain | river feed sea
        assert_eq!(report.total_words, 9);
        assert_eq!(report.unique_words, 6);
        assert_eq!(report.batches, 3);
        assert_eq!(
            report.top_words[0],
            WordCount {
                word: "river".to_string(),
                count: 3
            }
        );
        assert_eq!(report.top_words[1].word, "feed");
        assert_eq!(report.top_ngrams[0].ngram, vec!["river", "feed"]);
        assert_eq!(report.top_ngrams[0].count, 2);
        assert!(report.sentiment.compound > 0.0);
    }

    #[test]
    fn test_report_counts_match_top_words() {
        let dir = TempDir::new().unwrap();
        let path = write_corpus(&dir, "a b c\nd e f\n");
        let config = AnalysisConfig {
            top_words: 100,
            process: crate::analysis::processor::ProcessOptions {
                remove_stopwords: false,
                ..Default::default()
            },
            ..AnalysisConfig::default()
        };

        let report = CorpusReport::build(&path, &config, &BuiltinResources::english()).unwrap();
        let sum: u64 = report.top_words.iter().map(|w| w.count).sum();
        assert_eq!(sum, report.total_words);
    }

    #[test]
    fn test_report_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = CorpusReport::build(
            dir.path().join("absent.txt"),
            &AnalysisConfig::default(),
            &BuiltinResources::english(),
        );
        assert!(matches!(result, Err(TextsiftError::Io(_))));
    }

    #[test]
    fn test_report_empty_file() {
        let dir = TempDir::new().unwrap();
        let path = write_corpus(&dir, "");
        let report =
            CorpusReport::build(&path, &AnalysisConfig::default(), &BuiltinResources::english())
                .unwrap();

        assert_eq!(report.total_words, 0);
        assert_eq!(report.batches, 0);
        assert!(report.top_words.is_empty());
        assert!(report.top_ngrams.is_empty());
        assert_eq!(report.sentiment, SentimentScore::default());
    }

    #[test]
    fn test_clean_preview() {
        let dir = TempDir::new().unwrap();
        let path = write_corpus(
            &dir,
            "India[1] is a country.\nIt is the seventh-largest country.\nIndia is old.\n",
        );

        let preview = CleanPreview::build(&path, CleaningConfig::default(), 2, 2).unwrap();

        assert_eq!(preview.lines, vec!["india is a country", "it is the seventhlargest country"]);
        assert_eq!(preview.total_words, 12);
        assert_eq!(
            preview.top_words,
            vec![
                WordCount {
                    word: "is".to_string(),
                    count: 3
                },
                WordCount {
                    word: "india".to_string(),
                    count: 2
                },
            ]
        );
    }
}
