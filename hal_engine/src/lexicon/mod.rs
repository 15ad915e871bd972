//! Lexicon - the fixed word lists that turn an input into reply keywords.
//!
//! - **antonyms**: swapped in so a reply answers from the other side ("I" -> "YOU")
//! - **banned**: never keywords
//! - **auxiliary**: closed-class words that cannot anchor a reply
//! - **greetings**: fallback keywords for empty or contentless input

mod words;

pub use words::*;

use std::collections::{HashMap, HashSet};

/// Word lists keyed on normalized (uppercase) words.
#[derive(Debug, Clone)]
pub struct Lexicon {
    antonyms: HashMap<String, String>,
    banned: HashSet<String>,
    auxiliary: HashSet<String>,
    greetings: Vec<String>,
}

impl Default for Lexicon {
    fn default() -> Self {
        let mut lexicon = Self::empty();
        for (a, b) in ANTONYM_PAIRS {
            lexicon = lexicon.with_antonym(*a, *b);
        }
        lexicon
            .with_banned(BANNED.iter().copied())
            .with_auxiliary(AUXILIARY.iter().copied())
            .with_greetings(GREETINGS.iter().copied())
    }
}

impl Lexicon {
    /// A lexicon with no words at all.
    pub fn empty() -> Self {
        Self {
            antonyms: HashMap::new(),
            banned: HashSet::new(),
            auxiliary: HashSet::new(),
            greetings: Vec::new(),
        }
    }

    /// Register `a <-> b`, replacing earlier pairs for either word.
    pub fn with_antonym(mut self, a: impl Into<String>, b: impl Into<String>) -> Self {
        let (a, b) = (a.into(), b.into());
        self.antonyms.insert(a.clone(), b.clone());
        self.antonyms.insert(b, a);
        self
    }

    pub fn with_banned<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.banned.extend(words.into_iter().map(Into::into));
        self
    }

    pub fn with_auxiliary<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.auxiliary.extend(words.into_iter().map(Into::into));
        self
    }

    /// Replace the greeting list.
    pub fn with_greetings<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.greetings = words.into_iter().map(Into::into).collect();
        self
    }

    pub fn antonym(&self, word: &str) -> Option<&str> {
        self.antonyms.get(word).map(String::as_str)
    }

    pub fn is_banned(&self, word: &str) -> bool {
        self.banned.contains(word)
    }

    pub fn is_auxiliary(&self, word: &str) -> bool {
        self.auxiliary.contains(word)
    }

    pub fn greetings(&self) -> &[String] {
        &self.greetings
    }

    /// Drop numeric-leading and banned words, swap in antonyms.
    ///
    /// An empty input yields the greetings.
    pub fn extract(&self, normalized: &[String]) -> Vec<String> {
        if normalized.is_empty() {
            return self.greetings.clone();
        }
        normalized
            .iter()
            .filter(|norm| !norm.starts_with(|c: char| c.is_ascii_digit()))
            .filter(|norm| !self.is_banned(norm))
            .map(|norm| self.antonym(norm).unwrap_or(norm).to_string())
            .collect()
    }

    /// The keywords a reply should be about.
    ///
    /// [`Lexicon::extract`] with auxiliary words removed, falling back to the
    /// greetings when nothing is left.
    pub fn keywords(&self, normalized: &[String]) -> Vec<String> {
        let keywords: Vec<String> = self
            .extract(normalized)
            .into_iter()
            .filter(|word| !self.is_auxiliary(word))
            .collect();
        if keywords.is_empty() {
            self.greetings.clone()
        } else {
            keywords
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn norms(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_extract_keeps_plain_words() {
        let lexicon = Lexicon::default();
        assert_eq!(lexicon.extract(&norms(&["ONE", "TWO"])), norms(&["ONE", "TWO"]));
    }

    #[test]
    fn test_extract_swaps_antonyms() {
        let lexicon = Lexicon::default();
        assert_eq!(lexicon.extract(&norms(&["LOVE", "TWO"])), norms(&["HATE", "TWO"]));
    }

    #[test]
    fn test_extract_drops_numbers_and_banned() {
        let lexicon = Lexicon::default();
        assert_eq!(lexicon.extract(&norms(&["1FOREVER", "TWO"])), norms(&["TWO"]));
        assert_eq!(lexicon.extract(&norms(&["THE", "CAT"])), norms(&["CAT"]));
    }

    #[test]
    fn test_greetings_for_empty_input() {
        let lexicon = Lexicon::default();
        assert!(lexicon.extract(&[]).contains(&"HI".to_string()));
        assert!(lexicon.keywords(&[]).contains(&"HI".to_string()));
    }

    #[test]
    fn test_later_antonym_pairs_win() {
        let lexicon = Lexicon::default();
        assert_eq!(lexicon.antonym("YOU"), Some("ME"));
        assert_eq!(lexicon.antonym("I"), Some("YOU"));
        assert_eq!(lexicon.antonym("WATSON"), Some("HOLMES"));
    }

    #[test]
    fn test_keywords_filter_auxiliary() {
        let lexicon = Lexicon::default();
        assert_eq!(lexicon.keywords(&norms(&["I", "LOVE", "YOU"])), norms(&["HATE"]));
        assert_eq!(lexicon.keywords(&norms(&["STRAWBERRY"])), norms(&["STRAWBERRY"]));
    }

    #[test]
    fn test_keywords_fall_back_to_greetings() {
        let lexicon = Lexicon::default();
        assert_eq!(lexicon.keywords(&norms(&["THE", "ONE"])), lexicon.greetings().to_vec());
    }

    #[test]
    fn test_custom_lexicon() {
        let lexicon = Lexicon::empty()
            .with_antonym("UP", "DOWN")
            .with_greetings(["AHOY"]);
        assert_eq!(lexicon.keywords(&norms(&["UP"])), norms(&["DOWN"]));
        assert_eq!(lexicon.keywords(&[]), norms(&["AHOY"]));
    }
}
