//! Word and n-gram frequency counting.
//!
//! Counts live in a [`FrequencyTable`], which remembers the order keys were
//! first seen so that [`FrequencyTable::top_k`] breaks count ties the same way
//! on every run.
//!
//! # Examples
//!
//! ```
//! use textsift::frequency::FrequencyAggregator;
//!
//! let mut freq = FrequencyAggregator::new();
//! freq.update(&["river".to_string(), "sea".to_string(), "river".to_string()]);
//!
//! assert_eq!(freq.total(), 3);
//! assert_eq!(freq.top_k(1), vec![("river".to_string(), 2)]);
//! ```

use std::hash::Hash;

use ahash::AHashMap;

use crate::error::{Result, TextsiftError};

#[derive(Clone, Copy, Debug)]
struct Entry {
    count: u64,
    first_seen: u64,
}

/// Map from key to count, ordered for ranking by count then first appearance.
#[derive(Clone, Debug)]
pub struct FrequencyTable<K> {
    entries: AHashMap<K, Entry>,
    next_seq: u64,
    total: u64,
}

impl<K: Eq + Hash + Clone> FrequencyTable<K> {
    pub fn new() -> Self {
        FrequencyTable {
            entries: AHashMap::new(),
            next_seq: 0,
            total: 0,
        }
    }

    /// Count one occurrence of `key`.
    pub fn add(&mut self, key: K) {
        let seq = self.next_seq;
        let entry = self.entries.entry(key).or_insert_with(|| Entry {
            count: 0,
            first_seen: seq,
        });
        if entry.count == 0 {
            self.next_seq += 1;
        }
        entry.count += 1;
        self.total += 1;
    }

    /// Count of `key`, zero if never seen.
    pub fn get<Q>(&self, key: &Q) -> u64
    where
        K: std::borrow::Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.entries.get(key).map_or(0, |e| e.count)
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of distinct keys.
    pub fn unique(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The `k` most common keys, by count descending then first-seen order.
    pub fn top_k(&self, k: usize) -> Vec<(K, u64)> {
        let mut ranked: Vec<(&K, &Entry)> = self.entries.iter().collect();
        ranked.sort_by(|(_, a), (_, b)| {
            b.count
                .cmp(&a.count)
                .then_with(|| a.first_seen.cmp(&b.first_seen))
        });
        ranked
            .into_iter()
            .take(k)
            .map(|(key, entry)| (key.clone(), entry.count))
            .collect()
    }
}

impl<K: Eq + Hash + Clone> Default for FrequencyTable<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash + Clone> Extend<K> for FrequencyTable<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.add(key);
        }
    }
}

/// Word counts accumulated over token batches.
#[derive(Clone, Debug, Default)]
pub struct FrequencyAggregator {
    table: FrequencyTable<String>,
}

impl FrequencyAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every token of `batch`.
    pub fn update(&mut self, batch: &[String]) {
        self.table.extend(batch.iter().cloned());
    }

    /// Total tokens counted.
    pub fn total(&self) -> u64 {
        self.table.total()
    }

    /// Distinct tokens counted.
    pub fn unique(&self) -> usize {
        self.table.unique()
    }

    /// Count of `token`.
    pub fn get(&self, token: &str) -> u64 {
        self.table.get(token)
    }

    /// The `k` most common tokens.
    pub fn top_k(&self, k: usize) -> Vec<(String, u64)> {
        self.table.top_k(k)
    }
}

/// Counts of contiguous `width`-token windows.
///
/// Each [`update`](NgramAggregator::update) is treated as one sequence:
/// windows never span two calls.
#[derive(Clone, Debug)]
pub struct NgramAggregator {
    width: usize,
    table: FrequencyTable<Vec<String>>,
}

impl NgramAggregator {
    /// Fails when `width` is zero.
    pub fn new(width: usize) -> Result<Self> {
        if width == 0 {
            return Err(TextsiftError::invalid_argument("n-gram size must be at least 1"));
        }
        Ok(NgramAggregator {
            width,
            table: FrequencyTable::new(),
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Count every window of `tokens`. Sequences shorter than the width add
    /// nothing.
    pub fn update(&mut self, tokens: &[String]) {
        self.table
            .extend(tokens.windows(self.width).map(<[String]>::to_vec));
    }

    /// Total windows counted.
    pub fn total(&self) -> u64 {
        self.table.total()
    }

    /// Count of the n-gram `gram`.
    pub fn get(&self, gram: &[String]) -> u64 {
        self.table.get(gram)
    }

    /// The `k` most common n-grams.
    pub fn top_k(&self, k: usize) -> Vec<(Vec<String>, u64)> {
        self.table.top_k(k)
    }
}
