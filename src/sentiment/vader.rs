//! Lexicon and rule based valence scorer in the style of VADER.
//!
//! Each word gets the valence listed in the lexicon, adjusted by the words
//! before it:
//!
//! - booster words ("very", "slightly") within three words scale it
//! - negations ("not", "never", "isn't") within three words flip and damp it
//! - ALL-CAPS words are emphasised when the rest of the text is not shouting
//! - sentiment before a contrastive "but" is halved, after it boosted by half
//!
//! The summed valence is then amplified by exclamation and question marks and
//! squashed into `[-1, 1]`.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader, Cursor};
use std::path::Path;
use std::sync::{Arc, LazyLock};

use super::{SentimentScore, SentimentScorer};
use crate::error::{Result, TextsiftError};

/// The lexicon bundled with the crate, `token<TAB>valence` per line.
pub const BUILTIN_LEXICON: &str = include_str!("../../resources/vader_lexicon.txt");

const B_INCR: f64 = 0.293;
const B_DECR: f64 = -0.293;
const C_INCR: f64 = 0.733;
const N_SCALAR: f64 = -0.74;
const NORMALIZE_ALPHA: f64 = 15.0;

const NEGATIONS: &[&str] = &[
    "aint", "arent", "cannot", "cant", "couldnt", "darent", "didnt", "doesnt", "ain't", "aren't",
    "can't", "couldn't", "daren't", "didn't", "doesn't", "dont", "hadnt", "hasnt", "havent",
    "isnt", "mightnt", "mustnt", "neither", "don't", "hadn't", "hasn't", "haven't", "isn't",
    "mightn't", "mustn't", "neednt", "needn't", "never", "none", "nope", "nor", "not", "nothing",
    "nowhere", "oughtnt", "shant", "shouldnt", "uhuh", "wasnt", "werent", "oughtn't", "shan't",
    "shouldn't", "uh-uh", "wasn't", "weren't", "without", "wont", "wouldnt", "won't", "wouldn't",
    "rarely", "seldom", "despite",
];

const BOOSTERS_UP: &[&str] = &[
    "absolutely", "amazingly", "awfully", "completely", "considerably", "decidedly", "deeply",
    "enormously", "entirely", "especially", "exceptionally", "extremely", "fabulously", "fully",
    "greatly", "highly", "hugely", "incredibly", "intensely", "majorly", "more", "most",
    "particularly", "purely", "quite", "really", "remarkably", "so", "substantially",
    "thoroughly", "totally", "tremendously", "unbelievably", "unusually", "utterly", "very",
];

const BOOSTERS_DOWN: &[&str] = &[
    "almost", "barely", "hardly", "kinda", "kindof", "kind-of", "less", "little", "marginally",
    "occasionally", "partly", "scarcely", "slightly", "somewhat", "sorta", "sortof", "sort-of",
];

static BOOSTERS: LazyLock<HashMap<&'static str, f64>> = LazyLock::new(|| {
    BOOSTERS_UP
        .iter()
        .map(|&w| (w, B_INCR))
        .chain(BOOSTERS_DOWN.iter().map(|&w| (w, B_DECR)))
        .collect()
});

static BUILTIN: LazyLock<Arc<HashMap<String, f64>>> = LazyLock::new(|| {
    Arc::new(
        parse_lexicon(Cursor::new(BUILTIN_LEXICON)).expect("bundled lexicon is well formed"),
    )
});

fn parse_lexicon<R: BufRead>(reader: R) -> Result<HashMap<String, f64>> {
    let mut lexicon = HashMap::new();

    for (line_num, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }
        let mut fields = line.split('\t');
        let (Some(token), Some(valence)) = (fields.next(), fields.next()) else {
            return Err(TextsiftError::resource(format!(
                "lexicon line {}: expected token<TAB>valence",
                line_num + 1
            )));
        };
        let valence: f64 = valence.trim().parse().map_err(|e| {
            TextsiftError::resource(format!("lexicon line {}: {e}", line_num + 1))
        })?;
        lexicon.insert(token.trim().to_string(), valence);
    }

    Ok(lexicon)
}

fn is_upper(word: &str) -> bool {
    word.chars().any(char::is_uppercase) && !word.chars().any(char::is_lowercase)
}

fn is_negated(word: &str) -> bool {
    NEGATIONS.contains(&word) || word.contains("n't")
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Split on whitespace and strip surrounding punctuation, unless stripping
/// would leave two characters or fewer (so ":)" and "!!" survive). Tokens of
/// a single character ("I", "a", a lone "!") are dropped.
fn words_and_emoticons(text: &str) -> Vec<&str> {
    text.split_whitespace()
        .map(|token| {
            let stripped = token.trim_matches(|c: char| c.is_ascii_punctuation());
            if stripped.chars().count() <= 2 {
                token
            } else {
                stripped
            }
        })
        .filter(|word| word.chars().count() > 1)
        .collect()
}

/// True when some, but not all, words are in capitals.
fn allcap_differential(words: &[&str]) -> bool {
    let upper = words.iter().filter(|w| is_upper(w)).count();
    upper > 0 && upper < words.len()
}

fn punctuation_emphasis(text: &str) -> f64 {
    let exclamations = text.matches('!').count().min(4) as f64 * 0.292;
    let questions = match text.matches('?').count() {
        0 | 1 => 0.0,
        n @ 2..=3 => n as f64 * 0.18,
        _ => 0.96,
    };
    exclamations + questions
}

/// Valence scorer backed by a word → valence lexicon.
#[derive(Clone, Debug)]
pub struct VaderScorer {
    lexicon: Arc<HashMap<String, f64>>,
}

impl VaderScorer {
    /// A scorer over the bundled lexicon.
    pub fn builtin() -> Self {
        VaderScorer {
            lexicon: Arc::clone(&BUILTIN),
        }
    }

    /// A scorer over a caller-supplied lexicon.
    pub fn with_lexicon(lexicon: HashMap<String, f64>) -> Self {
        VaderScorer {
            lexicon: Arc::new(lexicon),
        }
    }

    /// Parse a lexicon of `token<TAB>valence[<TAB>...]` lines.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        Ok(Self::with_lexicon(parse_lexicon(reader)?))
    }

    /// Load a lexicon file from disk.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            TextsiftError::resource(format!("cannot open lexicon {}: {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(file))
    }

    /// Number of lexicon entries.
    pub fn lexicon_len(&self) -> usize {
        self.lexicon.len()
    }

    fn in_lexicon(&self, word: &str) -> bool {
        self.lexicon.contains_key(word)
    }

    fn booster_scalar(word: &str, lower: &str, valence: f64, cap_diff: bool) -> f64 {
        let Some(&base) = BOOSTERS.get(lower) else {
            return 0.0;
        };
        let mut scalar = if valence < 0.0 { -base } else { base };
        if is_upper(word) && cap_diff {
            scalar += if valence > 0.0 { C_INCR } else { -C_INCR };
        }
        scalar
    }

    fn negation_check(valence: f64, lower: &[String], start_i: usize, i: usize) -> f64 {
        let so_this = |w: &str| w == "so" || w == "this";
        match start_i {
            0 if is_negated(&lower[i - 1]) => valence * N_SCALAR,
            1 if lower[i - 2] == "never" && so_this(lower[i - 1].as_str()) => valence * 1.25,
            1 if lower[i - 2] == "without" && lower[i - 1] == "doubt" => valence,
            1 if is_negated(&lower[i - 2]) => valence * N_SCALAR,
            2 if lower[i - 3] == "never"
                && (so_this(lower[i - 2].as_str()) || so_this(lower[i - 1].as_str())) =>
            {
                valence * 1.25
            }
            2 if lower[i - 3] == "without"
                && (lower[i - 2] == "doubt" || lower[i - 1] == "doubt") =>
            {
                valence
            }
            2 if is_negated(&lower[i - 3]) => valence * N_SCALAR,
            _ => valence,
        }
    }

    fn least_check(&self, valence: f64, lower: &[String], i: usize) -> f64 {
        if i > 0 && lower[i - 1] == "least" && !self.in_lexicon(&lower[i - 1]) {
            if i > 1 && (lower[i - 2] == "at" || lower[i - 2] == "very") {
                return valence;
            }
            return valence * N_SCALAR;
        }
        valence
    }

    fn sentiment_valence(
        &self,
        i: usize,
        words: &[&str],
        lower: &[String],
        cap_diff: bool,
    ) -> f64 {
        let Some(&base) = self.lexicon.get(&lower[i]) else {
            return 0.0;
        };
        let mut valence = base;

        // "no" directly before another sentiment word only negates it.
        if lower[i] == "no" && i + 1 < lower.len() && self.in_lexicon(&lower[i + 1]) {
            valence = 0.0;
        }
        if (i > 0 && lower[i - 1] == "no")
            || (i > 1 && lower[i - 2] == "no")
            || (i > 2 && lower[i - 3] == "no" && (lower[i - 1] == "or" || lower[i - 1] == "nor"))
        {
            valence = base * N_SCALAR;
        }

        if is_upper(words[i]) && cap_diff {
            valence += if valence > 0.0 { C_INCR } else { -C_INCR };
        }

        for start_i in 0..3 {
            if i > start_i && !self.in_lexicon(&lower[i - (start_i + 1)]) {
                let j = i - (start_i + 1);
                let mut scalar = Self::booster_scalar(words[j], &lower[j], valence, cap_diff);
                if start_i == 1 {
                    scalar *= 0.95;
                } else if start_i == 2 {
                    scalar *= 0.9;
                }
                valence += scalar;
                valence = Self::negation_check(valence, lower, start_i, i);
            }
        }

        self.least_check(valence, lower, i)
    }

    fn but_check(lower: &[String], sentiments: &mut [f64]) {
        if let Some(but) = lower.iter().position(|w| w == "but") {
            for (si, sentiment) in sentiments.iter_mut().enumerate() {
                if si < but {
                    *sentiment *= 0.5;
                } else if si > but {
                    *sentiment *= 1.5;
                }
            }
        }
    }

    fn score_valence(sentiments: &[f64], text: &str) -> SentimentScore {
        if sentiments.is_empty() {
            return SentimentScore::default();
        }

        let emphasis = punctuation_emphasis(text);
        let mut sum: f64 = sentiments.iter().sum();
        if sum > 0.0 {
            sum += emphasis;
        } else if sum < 0.0 {
            sum -= emphasis;
        }
        let compound = (sum / (sum * sum + NORMALIZE_ALPHA).sqrt()).clamp(-1.0, 1.0);

        let mut positive = 0.0;
        let mut negative = 0.0;
        let mut neutral = 0.0;
        for &s in sentiments {
            if s > 0.0 {
                positive += s + 1.0;
            } else if s < 0.0 {
                negative += s - 1.0;
            } else {
                neutral += 1.0;
            }
        }
        if positive > negative.abs() {
            positive += emphasis;
        } else if positive < negative.abs() {
            negative -= emphasis;
        }

        let total = positive + negative.abs() + neutral;
        SentimentScore {
            negative: round_to((negative / total).abs(), 3),
            neutral: round_to((neutral / total).abs(), 3),
            positive: round_to((positive / total).abs(), 3),
            compound: round_to(compound, 4),
        }
    }
}

impl Default for VaderScorer {
    fn default() -> Self {
        Self::builtin()
    }
}

impl SentimentScorer for VaderScorer {
    fn score(&self, text: &str) -> SentimentScore {
        let words = words_and_emoticons(text);
        let lower: Vec<String> = words.iter().map(|w| w.to_lowercase()).collect();
        let cap_diff = allcap_differential(&words);

        let mut sentiments = Vec::with_capacity(words.len());
        for i in 0..words.len() {
            let is_kind_of = lower[i] == "kind" && lower.get(i + 1).is_some_and(|w| w == "of");
            if BOOSTERS.contains_key(lower[i].as_str()) || is_kind_of {
                sentiments.push(0.0);
                continue;
            }
            sentiments.push(self.sentiment_valence(i, &words, &lower, cap_diff));
        }

        Self::but_check(&lower, &mut sentiments);
        Self::score_valence(&sentiments, text)
    }

    fn name(&self) -> &'static str {
        "vader"
    }
}
