//! Dictionary-backed lemmatizer.
//!
//! Reads `form<TAB>lemma` lines. Blank lines and lines starting with `#` are
//! skipped. Forms missing from the table go to the fallback lemmatizer when
//! one is set, otherwise they are returned unchanged.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::Arc;

use super::Lemmatizer;
use crate::error::{Result, TextsiftError};

/// Lemmatizer looking forms up in a table loaded from a resource file.
#[derive(Clone, Default)]
pub struct DictionaryLemmatizer {
    lemmas: HashMap<String, String>,
    fallback: Option<Arc<dyn Lemmatizer>>,
}

impl DictionaryLemmatizer {
    /// Build a lemmatizer from `(form, lemma)` pairs.
    pub fn from_pairs<I, F, L>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (F, L)>,
        F: Into<String>,
        L: Into<String>,
    {
        DictionaryLemmatizer {
            lemmas: pairs
                .into_iter()
                .map(|(f, l)| (f.into(), l.into()))
                .collect(),
            fallback: None,
        }
    }

    /// Parse a tab-separated lemma table.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut lemmas = HashMap::new();

        for (line_num, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let (form, lemma) = line.split_once('\t').ok_or_else(|| {
                TextsiftError::resource(format!(
                    "lemma table line {}: expected form<TAB>lemma",
                    line_num + 1
                ))
            })?;
            lemmas.insert(form.trim().to_string(), lemma.trim().to_string());
        }

        Ok(DictionaryLemmatizer {
            lemmas,
            fallback: None,
        })
    }

    /// Load a lemma table from disk.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            TextsiftError::resource(format!("cannot open lemma table {}: {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(file))
    }

    /// Consult `fallback` for forms missing from the table.
    pub fn with_fallback(mut self, fallback: Arc<dyn Lemmatizer>) -> Self {
        self.fallback = Some(fallback);
        self
    }

    /// Number of forms in the table.
    pub fn len(&self) -> usize {
        self.lemmas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lemmas.is_empty()
    }
}

impl std::fmt::Debug for DictionaryLemmatizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DictionaryLemmatizer")
            .field("forms", &self.lemmas.len())
            .field("fallback", &self.fallback.as_ref().map(|l| l.name()))
            .finish()
    }
}

impl Lemmatizer for DictionaryLemmatizer {
    fn lemmatize(&self, word: &str) -> String {
        match (self.lemmas.get(word), &self.fallback) {
            (Some(lemma), _) => lemma.clone(),
            (None, Some(fallback)) => fallback.lemmatize(word),
            (None, None) => word.to_string(),
        }
    }

    fn name(&self) -> &'static str {
        "dictionary"
    }
}
