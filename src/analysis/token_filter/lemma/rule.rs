//! Rule-based noun lemmatizer.
//!
//! Reduces plural nouns to their singular with an irregular-form table and a
//! handful of suffix detachment rules:
//!
//! | suffix                            | rule        | example            |
//! |-----------------------------------|-------------|--------------------|
//! | `ies` (stem of two or more letters) | → `y`     | stories → story    |
//! | `sses`, `xes`, `zzes`, `ches`, `shes` | drop `es` | boxes → box     |
//! | `s` (not `ss`, `us`, `is`, `ics`) | drop `s`    | rivers → river     |
//!
//! Only all-lowercase ASCII words are touched; anything else (capitalised
//! names, contractions) passes through unchanged. Without a word list the
//! rules cannot tell a plural noun from a verb or adverb ending in `s`, so a
//! few frequent ones are listed as invariant.

use std::collections::HashMap;
use std::sync::LazyLock;

use super::Lemmatizer;

pub const IRREGULAR_PLURALS: &[(&str, &str)] = &[
    ("children", "child"),
    ("men", "man"),
    ("women", "woman"),
    ("people", "people"),
    ("mice", "mouse"),
    ("lice", "louse"),
    ("geese", "goose"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("oxen", "ox"),
    ("data", "datum"),
    ("criteria", "criterion"),
    ("phenomena", "phenomenon"),
    ("analyses", "analysis"),
    ("crises", "crisis"),
    ("theses", "thesis"),
    ("indices", "index"),
    ("wolves", "wolf"),
    ("knives", "knife"),
    ("lives", "life"),
    ("wives", "wife"),
    ("leaves", "leaf"),
    ("halves", "half"),
    ("shelves", "shelf"),
    ("thieves", "thief"),
    ("calves", "calf"),
    ("loaves", "loaf"),
    ("news", "news"),
    ("series", "series"),
    ("species", "species"),
    ("means", "means"),
    ("always", "always"),
    ("perhaps", "perhaps"),
    ("towards", "towards"),
    ("afterwards", "afterwards"),
    ("besides", "besides"),
    ("whereas", "whereas"),
    ("sometimes", "sometimes"),
];

static IRREGULAR: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| IRREGULAR_PLURALS.iter().copied().collect());

/// Lemmatizer applying plural-noun rules without a dictionary.
#[derive(Debug, Clone, Default)]
pub struct RuleLemmatizer;

impl RuleLemmatizer {
    pub fn new() -> Self {
        RuleLemmatizer
    }

    fn detach_suffix(word: &str) -> Option<String> {
        if ["ss", "us", "is", "ics"].iter().any(|s| word.ends_with(s)) {
            return None;
        }
        if let Some(stem) = word.strip_suffix("ies").filter(|stem| stem.len() >= 2) {
            return Some(format!("{stem}y"));
        }
        if ["sses", "xes", "zzes", "ches", "shes"]
            .iter()
            .any(|s| word.ends_with(s))
        {
            return Some(word[..word.len() - 2].to_string());
        }
        word.strip_suffix('s').map(str::to_string)
    }
}

impl Lemmatizer for RuleLemmatizer {
    fn lemmatize(&self, word: &str) -> String {
        if let Some(lemma) = IRREGULAR.get(word) {
            return (*lemma).to_string();
        }
        if word.len() <= 3 || !word.bytes().all(|b| b.is_ascii_lowercase()) {
            return word.to_string();
        }
        Self::detach_suffix(word).unwrap_or_else(|| word.to_string())
    }

    fn name(&self) -> &'static str {
        "rule"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_plurals() {
        let lemmatizer = RuleLemmatizer::new();

        assert_eq!(lemmatizer.lemmatize("cats"), "cat");
        assert_eq!(lemmatizer.lemmatize("rivers"), "river");
        assert_eq!(lemmatizer.lemmatize("houses"), "house");
        assert_eq!(lemmatizer.lemmatize("stories"), "story");
        assert_eq!(lemmatizer.lemmatize("boxes"), "box");
        assert_eq!(lemmatizer.lemmatize("churches"), "church");
        assert_eq!(lemmatizer.lemmatize("dishes"), "dish");
        assert_eq!(lemmatizer.lemmatize("classes"), "class");
    }

    #[test]
    fn test_irregular_forms() {
        let lemmatizer = RuleLemmatizer::new();

        assert_eq!(lemmatizer.lemmatize("children"), "child");
        assert_eq!(lemmatizer.lemmatize("women"), "woman");
        assert_eq!(lemmatizer.lemmatize("leaves"), "leaf");
        assert_eq!(lemmatizer.lemmatize("news"), "news");
    }

    #[test]
    fn test_invariant_words() {
        let lemmatizer = RuleLemmatizer::new();

        assert_eq!(lemmatizer.lemmatize("glass"), "glass");
        assert_eq!(lemmatizer.lemmatize("virus"), "virus");
        assert_eq!(lemmatizer.lemmatize("analysis"), "analysis");
        assert_eq!(lemmatizer.lemmatize("economics"), "economics");
        assert_eq!(lemmatizer.lemmatize("bus"), "bus");
        assert_eq!(lemmatizer.lemmatize("india"), "india");
    }

    #[test]
    fn test_short_ies_stem_drops_s() {
        let lemmatizer = RuleLemmatizer::new();

        assert_eq!(lemmatizer.lemmatize("ties"), "tie");
        assert_eq!(lemmatizer.lemmatize("dies"), "die");
        assert_eq!(lemmatizer.lemmatize("lies"), "lie");
        assert_eq!(lemmatizer.lemmatize("pies"), "pie");
        assert_eq!(lemmatizer.lemmatize("cities"), "city");
    }

    #[test]
    fn test_non_lowercase_passthrough() {
        let lemmatizer = RuleLemmatizer::new();

        assert_eq!(lemmatizer.lemmatize("Rivers"), "Rivers");
        assert_eq!(lemmatizer.lemmatize("india's"), "india's");
        assert_eq!(lemmatizer.lemmatize("!"), "!");
        assert_eq!(lemmatizer.lemmatize(""), "");
    }
}
