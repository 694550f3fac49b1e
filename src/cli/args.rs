//! Command line argument parsing for Textsift CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::analysis::cleaner::CleaningConfig;
use crate::config::AnalysisConfig;

/// Textsift - clean text and report word, n-gram and sentiment statistics
#[derive(Parser, Debug, Clone)]
#[command(name = "textsift")]
#[command(about = "Clean text files and report word, n-gram and sentiment statistics")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct TextsiftArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl TextsiftArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Report word counts, n-grams and sentiment of a text file
    Analyze(AnalyzeArgs),

    /// Clean a text file line by line and count its words
    Clean(CleanArgs),

    /// Write the built-in language resources into a directory
    Provision(ProvisionArgs),
}

/// Switches turning individual cleaning stages off.
#[derive(Args, Debug, Clone, Default)]
pub struct CleaningFlags {
    /// Keep digits and citation brackets
    #[arg(long)]
    pub keep_digits: bool,

    /// Keep URLs
    #[arg(long)]
    pub keep_urls: bool,

    /// Keep email addresses
    #[arg(long)]
    pub keep_emails: bool,

    /// Keep HTML tags
    #[arg(long)]
    pub keep_html: bool,

    /// Keep letter case
    #[arg(long)]
    pub keep_case: bool,

    /// Keep punctuation and other non-letter characters
    #[arg(long)]
    pub keep_special_chars: bool,
}

impl CleaningFlags {
    /// Turn off the stages named by the flags.
    pub fn apply(&self, config: &mut CleaningConfig) {
        config.remove_digits &= !self.keep_digits;
        config.remove_urls &= !self.keep_urls;
        config.remove_emails &= !self.keep_emails;
        config.remove_html &= !self.keep_html;
        config.lowercase &= !self.keep_case;
        config.remove_special_chars &= !self.keep_special_chars;
    }
}

/// Arguments for analyzing a file
#[derive(Parser, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Text file to analyze
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// JSON config file; command line flags override it
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Tokens per batch while counting words
    #[arg(short, long)]
    pub batch_size: Option<usize>,

    /// Number of most common words to show
    #[arg(short, long)]
    pub top: Option<usize>,

    /// Tokens per n-gram
    #[arg(short, long)]
    pub ngram: Option<usize>,

    /// Number of most common n-grams to show
    #[arg(long)]
    pub top_ngrams: Option<usize>,

    /// Keep stopwords
    #[arg(long)]
    pub keep_stopwords: bool,

    /// Skip lemmatization
    #[arg(long)]
    pub no_lemmatize: bool,

    /// Skip cleaning
    #[arg(long)]
    pub no_clean: bool,

    /// Split on whitespace instead of word boundaries
    #[arg(long)]
    pub no_tokenize: bool,

    /// Language of the stopwords, lemmas and lexicon
    #[arg(short, long)]
    pub language: Option<String>,

    /// Directory of provisioned resources (default: built-in data)
    #[arg(short, long, value_name = "DIR", env = "TEXTSIFT_RESOURCES")]
    pub resources: Option<PathBuf>,

    #[command(flatten)]
    pub cleaning: CleaningFlags,
}

impl AnalyzeArgs {
    /// Overlay the command line flags on `config`.
    pub fn apply(&self, config: &mut AnalysisConfig) {
        if let Some(batch_size) = self.batch_size {
            config.batch_size = batch_size;
        }
        if let Some(top) = self.top {
            config.top_words = top;
        }
        if let Some(ngram) = self.ngram {
            config.ngram_size = ngram;
        }
        if let Some(top_ngrams) = self.top_ngrams {
            config.top_ngrams = top_ngrams;
        }
        if let Some(language) = &self.language {
            config.process.language = language.clone();
        }
        if let Some(dir) = &self.resources {
            config.resource_dir = Some(dir.clone());
        }
        config.process.remove_stopwords &= !self.keep_stopwords;
        config.process.lemmatize &= !self.no_lemmatize;
        config.process.clean &= !self.no_clean;
        config.process.tokenize &= !self.no_tokenize;
        self.cleaning.apply(&mut config.process.cleaning);
    }
}

/// Arguments for the cleaning preview.
///
/// By default only digits, citation brackets and non-letters are removed and
/// case is kept.
#[derive(Parser, Debug, Clone)]
pub struct CleanArgs {
    /// Text file to clean
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Number of cleaned lines to print
    #[arg(long, default_value = "5")]
    pub lines: usize,

    /// Number of most common words to show
    #[arg(short, long, default_value = "10")]
    pub top: usize,

    /// Fold text to lowercase
    #[arg(long)]
    pub lowercase: bool,

    /// Also remove URLs, email addresses and HTML tags
    #[arg(long)]
    pub strip_markup: bool,

    /// Keep digits and citation brackets
    #[arg(long)]
    pub keep_digits: bool,

    /// Keep punctuation and other non-letter characters
    #[arg(long)]
    pub keep_special_chars: bool,
}

impl CleanArgs {
    /// The cleaning stages selected by the flags.
    pub fn cleaning_config(&self) -> CleaningConfig {
        CleaningConfig {
            remove_digits: !self.keep_digits,
            remove_urls: self.strip_markup,
            remove_emails: self.strip_markup,
            remove_html: self.strip_markup,
            lowercase: self.lowercase,
            remove_special_chars: !self.keep_special_chars,
        }
    }
}

/// Arguments for provisioning resources
#[derive(Parser, Debug, Clone)]
pub struct ProvisionArgs {
    /// Directory to write the resources into
    #[arg(value_name = "DIR")]
    pub dir: PathBuf,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
