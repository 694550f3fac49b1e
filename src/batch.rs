//! Batched reading of line-oriented text.
//!
//! [`BatchReader`] normalizes one line at a time and hands out the resulting
//! tokens in batches of roughly `batch_size`, so a large file never has to be
//! held in memory as a whole.

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

use crate::analysis::processor::TextProcessor;
use crate::error::{Result, TextsiftError};

/// Tokens collected from consecutive lines.
pub type TokenBatch = Vec<String>;

/// Default number of tokens per batch.
pub const DEFAULT_BATCH_SIZE: usize = 1000;

/// Iterator of token batches over a line source.
///
/// A batch is emitted as soon as it holds at least `batch_size` tokens, so it
/// may overshoot by up to one line's worth. The last batch holds whatever is
/// left and may be short. Empty batches are never emitted.
///
/// A read error is yielded once, after which the iterator is exhausted.
pub struct BatchReader<'a, R> {
    lines: Lines<R>,
    processor: &'a TextProcessor,
    batch_size: usize,
    done: bool,
}

impl<'a, R: BufRead> BatchReader<'a, R> {
    /// Fails when `batch_size` is zero.
    pub fn new(reader: R, processor: &'a TextProcessor, batch_size: usize) -> Result<Self> {
        if batch_size == 0 {
            return Err(TextsiftError::invalid_argument("batch size must be at least 1"));
        }
        Ok(BatchReader {
            lines: reader.lines(),
            processor,
            batch_size,
            done: false,
        })
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }
}

impl<'a> BatchReader<'a, BufReader<File>> {
    /// Open `path` for batched reading.
    pub fn open<P: AsRef<Path>>(
        path: P,
        processor: &'a TextProcessor,
        batch_size: usize,
    ) -> Result<Self> {
        let file = File::open(path)?;
        Self::new(BufReader::new(file), processor, batch_size)
    }
}

impl<R: BufRead> Iterator for BatchReader<'_, R> {
    type Item = Result<TokenBatch>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let mut batch = TokenBatch::new();
        loop {
            match self.lines.next() {
                Some(Ok(line)) => match self.processor.process(&line) {
                    Ok(tokens) => {
                        batch.extend(tokens);
                        if batch.len() >= self.batch_size {
                            return Some(Ok(batch));
                        }
                    }
                    Err(e) => {
                        self.done = true;
                        return Some(Err(e));
                    }
                },
                Some(Err(e)) => {
                    self.done = true;
                    return Some(Err(e.into()));
                }
                None => {
                    self.done = true;
                    return (!batch.is_empty()).then_some(Ok(batch));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::analysis::processor::ProcessOptions;
    use crate::resources::BuiltinResources;

    fn processor() -> TextProcessor {
        TextProcessor::new(&ProcessOptions::default(), &BuiltinResources::english()).unwrap()
    }

    const TEXT: &str = "The river flows east.\n\nRivers feed the plains[3].\nMonsoon rains arrive in June.\n";

    #[test]
    fn test_batches_concatenate_to_whole() {
        let processor = processor();
        let whole = processor.process(TEXT).unwrap();

        for batch_size in [1, 2, 3, 100] {
            let batches: Vec<TokenBatch> = BatchReader::new(Cursor::new(TEXT), &processor, batch_size)
                .unwrap()
                .collect::<Result<_>>()
                .unwrap();
            assert!(batches.iter().all(|b| !b.is_empty()));
            assert_eq!(batches.concat(), whole, "batch_size {batch_size}");
        }
    }

    #[test]
    fn test_tag_split_over_lines() {
        let processor = processor();
        let text = "a <span\nclass=big> river\n";

        let batches: Vec<TokenBatch> = BatchReader::new(Cursor::new(text), &processor, 2)
            .unwrap()
            .collect::<Result<_>>()
            .unwrap();

        let whole = processor.process(text).unwrap();
        assert_eq!(whole, vec!["span", "classbig", "river"]);
        assert_eq!(batches.concat(), whole);
    }

    #[test]
    fn test_flush_threshold() {
        let processor = processor();
        let batches: Vec<TokenBatch> = BatchReader::new(Cursor::new(TEXT), &processor, 3)
            .unwrap()
            .collect::<Result<_>>()
            .unwrap();

        // river flow east | river feed plain | monsoon rain arrive june
        assert_eq!(batches.len(), 3);
        assert_eq!(batches[0], vec!["river", "flow", "east"]);
        assert_eq!(batches[2].len(), 4);
    }

    #[test]
    fn test_empty_input() {
        let processor = processor();
        let mut reader = BatchReader::new(Cursor::new(""), &processor, 10).unwrap();
        assert!(reader.next().is_none());
    }

    #[test]
    fn test_zero_batch_size_rejected() {
        let processor = processor();
        assert!(BatchReader::new(Cursor::new(TEXT), &processor, 0).is_err());
    }

    #[test]
    fn test_invalid_utf8_yields_one_error() {
        let processor = processor();
        let bytes: &[u8] = b"good line\n\xff\xfe broken\nmore text\n";
        let results: Vec<Result<TokenBatch>> =
            BatchReader::new(Cursor::new(bytes), &processor, 100)
                .unwrap()
                .collect();

        assert_eq!(results.len(), 1);
        assert!(matches!(results[0], Err(TextsiftError::Io(_))));
    }
}
