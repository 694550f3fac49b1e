//! One-shot setup of a resource directory from the built-in data.
//!
//! Existing files are left alone, so running it twice writes nothing the
//! second time and hand-edited files survive.

use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use serde::Serialize;

use super::DEFAULT_LANGUAGE;
use super::directory::{LEMMAS_DIR, LEXICON_FILE, SENTIMENT_DIR, STOPWORDS_DIR};
use crate::analysis::token_filter::lemma::rule::IRREGULAR_PLURALS;
use crate::analysis::token_filter::stop::DEFAULT_ENGLISH_STOP_WORDS;
use crate::error::Result;
use crate::sentiment::vader::BUILTIN_LEXICON;

/// Files written and skipped by [`provision`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ProvisionReport {
    pub written: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
}

impl ProvisionReport {
    /// True when nothing had to be written.
    pub fn is_noop(&self) -> bool {
        self.written.is_empty()
    }
}

fn english_stop_words() -> String {
    let mut contents = DEFAULT_ENGLISH_STOP_WORDS.join("\n");
    contents.push('\n');
    contents
}

fn english_lemmas() -> String {
    IRREGULAR_PLURALS
        .iter()
        .map(|(form, lemma)| format!("{form}\t{lemma}\n"))
        .collect()
}

/// Write the built-in English resources under `root`, creating directories as
/// needed and skipping files that already exist.
pub fn provision<P: AsRef<Path>>(root: P) -> Result<ProvisionReport> {
    let root = root.as_ref();
    let files = [
        (
            root.join(STOPWORDS_DIR).join(DEFAULT_LANGUAGE),
            english_stop_words(),
        ),
        (
            root.join(LEMMAS_DIR).join(format!("{DEFAULT_LANGUAGE}.tsv")),
            english_lemmas(),
        ),
        (
            root.join(SENTIMENT_DIR).join(LEXICON_FILE),
            BUILTIN_LEXICON.to_string(),
        ),
    ];

    let mut report = ProvisionReport::default();
    for (path, contents) in files {
        if path.exists() {
            report.skipped.push(path);
            continue;
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, contents)?;
        info!("provisioned {}", path.display());
        report.written.push(path);
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_provision_is_idempotent() {
        let dir = TempDir::new().unwrap();

        let first = provision(dir.path()).unwrap();
        assert_eq!(first.written.len(), 3);
        assert!(first.skipped.is_empty());

        let second = provision(dir.path()).unwrap();
        assert!(second.is_noop());
        assert_eq!(second.skipped.len(), 3);
    }

    #[test]
    fn test_existing_file_is_kept() {
        let dir = TempDir::new().unwrap();
        let custom = dir.path().join(STOPWORDS_DIR).join(DEFAULT_LANGUAGE);
        fs::create_dir_all(custom.parent().unwrap()).unwrap();
        fs::write(&custom, "only\n").unwrap();

        let report = provision(dir.path()).unwrap();
        assert_eq!(report.skipped, vec![custom.clone()]);
        assert_eq!(fs::read_to_string(custom).unwrap(), "only\n");
    }

    #[test]
    fn test_lemma_table_format() {
        let table = english_lemmas();
        assert!(table.lines().any(|line| line == "children\tchild"));
        assert!(table.lines().all(|line| line.split('\t').count() == 2));
    }
}
