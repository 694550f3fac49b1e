//! Output formatting for CLI commands.

use serde::Serialize;

use crate::cli::args::{OutputFormat, TextsiftArgs};
use crate::error::Result;
use crate::report::{CleanPreview, CorpusReport, WordCount};
use crate::resources::ProvisionReport;

/// Results that know how to print themselves for a terminal.
pub trait HumanOutput {
    fn print_human(&self);
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize + HumanOutput>(
    message: &str,
    result: &T,
    args: &TextsiftArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: HumanOutput>(message: &str, result: &T, args: &TextsiftArgs) -> Result<()> {
    if args.verbosity() > 1 {
        println!("{message}");
        println!();
    }
    result.print_human();
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &TextsiftArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{json}");
    Ok(())
}

fn print_heading(title: &str) {
    println!("{title}");
    println!("{}", "─".repeat(title.chars().count()));
}

fn print_word_counts(words: &[WordCount]) {
    for WordCount { word, count } in words {
        println!("{word}: {count}");
    }
}

impl HumanOutput for CorpusReport {
    fn print_human(&self) {
        println!("Total words processed: {}", self.total_words);
        println!("Unique words: {}", self.unique_words);

        println!();
        print_heading(&format!("Top {} frequent words:", self.top_words.len()));
        print_word_counts(&self.top_words);

        println!();
        print_heading(&format!(
            "Top {} {}-grams:",
            self.top_ngrams.len(),
            self.ngram_size
        ));
        for ngram in &self.top_ngrams {
            println!("{}: {}", ngram.ngram.join(" "), ngram.count);
        }

        println!();
        print_heading("Sentiment analysis scores:");
        println!("{}", self.sentiment);
    }
}

impl HumanOutput for CleanPreview {
    fn print_human(&self) {
        print_heading("First few cleaned lines:");
        for line in &self.lines {
            println!("{line}");
        }

        println!();
        println!("Total number of words in the file: {}", self.total_words);

        println!();
        print_heading("Most common words:");
        print_word_counts(&self.top_words);
    }
}

impl HumanOutput for ProvisionReport {
    fn print_human(&self) {
        for path in &self.written {
            println!("wrote   {}", path.display());
        }
        for path in &self.skipped {
            println!("exists  {}", path.display());
        }
        if self.is_noop() {
            println!("Resources already provisioned.");
        }
    }
}
