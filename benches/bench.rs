//! Criterion benchmarks for Textsift.
//!
//! Covers the per-line hot path:
//! - Cleaning
//! - Full normalization (clean, tokenize, stopwords, lemmas)
//! - Frequency and n-gram counting
//! - Sentiment scoring

use std::hint::black_box;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use textsift::analysis::cleaner::TextCleaner;
use textsift::analysis::processor::{ProcessOptions, TextProcessor};
use textsift::frequency::{FrequencyAggregator, NgramAggregator};
use textsift::resources::BuiltinResources;
use textsift::sentiment::SentimentScorer;
use textsift::sentiment::vader::VaderScorer;

/// Generate noisy test lines for benchmarking.
fn generate_test_lines(count: usize) -> Vec<String> {
    let words = [
        "India",
        "is",
        "a",
        "country",
        "in",
        "South",
        "Asia[1]",
        "rivers",
        "mountains",
        "the",
        "wonderful",
        "<b>monsoon</b>",
        "1947",
        "https://example.org/page",
        "people",
        "cities",
        "great",
        "not",
        "bad",
        "and",
        "languages,",
        "states.",
    ];

    (0..count)
        .map(|i| {
            let len = 10 + (i % 30);
            (0..len)
                .map(|j| words[(i * 7 + j * 13) % words.len()])
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

fn bench_cleaning(c: &mut Criterion) {
    let mut group = c.benchmark_group("cleaning");
    let cleaner = TextCleaner::default();
    let lines = generate_test_lines(1000);

    group.throughput(Throughput::Elements(lines.len() as u64));
    group.bench_function("clean_lines", |b| {
        b.iter(|| {
            for line in &lines {
                black_box(cleaner.clean(black_box(line)));
            }
        })
    });

    group.finish();
}

fn bench_processing(c: &mut Criterion) {
    let mut group = c.benchmark_group("processing");
    let processor =
        TextProcessor::new(&ProcessOptions::default(), &BuiltinResources::english()).unwrap();
    let lines = generate_test_lines(1000);

    group.throughput(Throughput::Elements(lines.len() as u64));
    group.bench_function("process_lines", |b| {
        b.iter(|| {
            for line in &lines {
                let _ = black_box(processor.process(black_box(line)));
            }
        })
    });

    let tokens: Vec<String> = lines
        .iter()
        .flat_map(|line| processor.process(line).unwrap())
        .collect();

    group.throughput(Throughput::Elements(tokens.len() as u64));
    group.bench_function("count_words", |b| {
        b.iter(|| {
            let mut freq = FrequencyAggregator::new();
            freq.update(black_box(&tokens));
            black_box(freq.top_k(10))
        })
    });
    group.bench_function("count_bigrams", |b| {
        b.iter(|| {
            let mut ngrams = NgramAggregator::new(2).unwrap();
            ngrams.update(black_box(&tokens));
            black_box(ngrams.top_k(5))
        })
    });

    group.finish();
}

fn bench_sentiment(c: &mut Criterion) {
    let mut group = c.benchmark_group("sentiment");
    let scorer = VaderScorer::builtin();
    let text = generate_test_lines(200).join("\n");

    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function("score_text", |b| {
        b.iter(|| black_box(scorer.score(black_box(&text))))
    });

    group.finish();
}

criterion_group!(benches, bench_cleaning, bench_processing, bench_sentiment);
criterion_main!(benches);
