//! Run configuration.
//!
//! Every field has a default, so a JSON config file only needs the keys it
//! changes:
//!
//! ```json
//! { "top_words": 20, "process": { "lemmatize": false } }
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::processor::ProcessOptions;
use crate::batch::DEFAULT_BATCH_SIZE;
use crate::error::{Result, TextsiftError};
use crate::resources::{BuiltinResources, DirectoryResources, LanguageResources};

/// Settings for a corpus report run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Normalization steps.
    pub process: ProcessOptions,
    /// Tokens per batch when streaming word counts.
    pub batch_size: usize,
    /// Number of most common words reported.
    pub top_words: usize,
    /// Tokens per n-gram.
    pub ngram_size: usize,
    /// Number of most common n-grams reported.
    pub top_ngrams: usize,
    /// Directory of provisioned resources. Built-in data is used when unset.
    pub resource_dir: Option<PathBuf>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        AnalysisConfig {
            process: ProcessOptions::default(),
            batch_size: DEFAULT_BATCH_SIZE,
            top_words: 10,
            ngram_size: 2,
            top_ngrams: 5,
            resource_dir: None,
        }
    }
}

impl AnalysisConfig {
    /// Read a JSON config file. Missing keys take their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            TextsiftError::invalid_config(format!("cannot read {}: {e}", path.display()))
        })?;
        let config: AnalysisConfig = serde_json::from_str(&content).map_err(|e| {
            TextsiftError::invalid_config(format!("cannot parse {}: {e}", path.display()))
        })?;
        config.validate()?;
        debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Reject settings no run can use.
    pub fn validate(&self) -> Result<()> {
        if self.batch_size == 0 {
            return Err(TextsiftError::invalid_config("batch_size must be at least 1"));
        }
        if self.ngram_size == 0 {
            return Err(TextsiftError::invalid_config("ngram_size must be at least 1"));
        }
        if self.process.language.trim().is_empty() {
            return Err(TextsiftError::invalid_config("language must not be empty"));
        }
        Ok(())
    }

    /// The resource provider selected by `resource_dir` and the language.
    pub fn build_resources(&self) -> Arc<dyn LanguageResources> {
        let language = self.process.language.clone();
        match &self.resource_dir {
            Some(dir) => Arc::new(DirectoryResources::new(dir.clone(), language)),
            None => Arc::new(BuiltinResources::new(language)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = AnalysisConfig::default();
        assert_eq!(config.batch_size, 1000);
        assert_eq!(config.top_words, 10);
        assert_eq!(config.ngram_size, 2);
        assert_eq!(config.top_ngrams, 5);
        assert!(config.process.cleaning.remove_urls);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json() {
        let config: AnalysisConfig = serde_json::from_str(
            r#"{"top_words": 3, "process": {"lemmatize": false, "cleaning": {"lowercase": false}}}"#,
        )
        .unwrap();

        assert_eq!(config.top_words, 3);
        assert_eq!(config.batch_size, 1000);
        assert!(!config.process.lemmatize);
        assert!(config.process.remove_stopwords);
        assert!(!config.process.cleaning.lowercase);
        assert!(config.process.cleaning.remove_html);
    }

    #[test]
    fn test_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");

        fs::write(&path, r#"{"ngram_size": 3}"#).unwrap();
        assert_eq!(AnalysisConfig::load(&path).unwrap().ngram_size, 3);

        fs::write(&path, r#"{"batch_size": 0}"#).unwrap();
        assert!(matches!(AnalysisConfig::load(&path), Err(TextsiftError::Config(_))));

        fs::write(&path, "not json").unwrap();
        assert!(matches!(AnalysisConfig::load(&path), Err(TextsiftError::Config(_))));

        assert!(AnalysisConfig::load(dir.path().join("missing.json")).is_err());
    }

    #[test]
    fn test_build_resources() {
        let config = AnalysisConfig::default();
        assert_eq!(config.build_resources().language(), "english");

        let dir = TempDir::new().unwrap();
        let config = AnalysisConfig {
            resource_dir: Some(dir.path().to_path_buf()),
            ..AnalysisConfig::default()
        };
        assert!(config.build_resources().stop_words().is_err());
    }
}
