//! Tokenizer - splits raw text into words, the punctuation between them, and
//! their normalized (uppercase) forms.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    /// Maximal runs of ASCII word characters, or of anything else.
    static ref RUNS: Regex = Regex::new(r"[A-Za-z0-9_]+|[^A-Za-z0-9_]+").unwrap();
}

/// The token buckets derived from one input string.
///
/// `punctuation[i]` precedes `words[i]`, and the last punctuation entry trails
/// the last word, so `punctuation.len() == words.len() + 1` always holds.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TokenStream {
    pub punctuation: Vec<String>,
    pub words: Vec<String>,
    pub normalized: Vec<String>,
}

impl TokenStream {
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }
}

fn is_word(run: &str) -> bool {
    run.starts_with(|c: char| c.is_ascii_alphanumeric() || c == '_')
}

fn is_joiner(run: &str) -> bool {
    run == "-" || run == "'"
}

/// Rejoin words split around a lone `-` or `'`: `["fancy", "-", "pants"]` becomes `"fancy-pants"`.
///
/// `runs` alternates punctuation and words. A joiner with no word after it is
/// left alone.
pub fn compound_words(runs: &[String]) -> Vec<String> {
    let mut compounds = Vec::with_capacity(runs.len());
    let mut i = 0;
    while i < runs.len() {
        match (runs.get(i + 1), runs.get(i + 2)) {
            (Some(joiner), Some(next)) if is_word(&runs[i]) && is_joiner(joiner) && is_word(next) => {
                compounds.push(format!("{}{}{}", runs[i], joiner, next));
                i += 3;
            }
            _ => {
                compounds.push(runs[i].clone());
                i += 1;
            }
        }
    }
    compounds
}

/// Split text into its token buckets.
pub fn tokenize(input: &str) -> TokenStream {
    let mut runs: Vec<String> = RUNS.find_iter(input).map(|m| m.as_str().to_string()).collect();

    // Always start and end on a punctuation slot.
    if runs.first().map_or(true, |r| is_word(r)) {
        runs.insert(0, String::new());
    }
    if runs.last().map_or(false, |r| is_word(r)) {
        runs.push(String::new());
    }

    let mut stream = TokenStream::default();
    for (index, run) in compound_words(&runs).into_iter().enumerate() {
        if index % 2 == 0 {
            stream.punctuation.push(run);
        } else {
            stream.normalized.push(run.to_uppercase());
            stream.words.push(run);
        }
    }
    stream
}
