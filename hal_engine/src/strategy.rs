//! Strategies - pure transformations from a token stream to the ordered
//! observations one model learns.

use hal_store::{Context, Observation, BLANK, FENCE};
use serde::{Deserialize, Serialize};

use crate::tokenizer::TokenStream;

/// Which transformation a model applies to its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    /// Next normalized word given the two before it.
    Forward,
    /// Previous normalized word given the two after it.
    Backward,
    /// Surface casing of a normalized word given the previous surface word.
    Case,
    /// Punctuation between two surface words.
    Punctuation,
    /// Neighbours of a word, for anchoring replies on keywords.
    Seed,
}

impl Strategy {
    pub fn observe(&self, tokens: &TokenStream) -> Vec<Observation> {
        match self {
            Strategy::Forward => forward(tokens),
            Strategy::Backward => backward(tokens),
            Strategy::Case => case(tokens),
            Strategy::Punctuation => punctuation(tokens),
            Strategy::Seed => seed(tokens),
        }
    }
}

fn chain_observations<'a>(norms: impl Iterator<Item = &'a String>) -> Vec<Observation> {
    let mut context = Context::fenced();
    let mut results = Vec::new();
    for norm in norms {
        results.push(Observation::new(context.clone(), norm.clone()));
        context = context.advance(norm.clone());
    }
    results.push(Observation::new(context, FENCE));
    results
}

/// `(<fence>,<fence>) -> W1`, `(<fence>,W1) -> W2`, ... `(Wn-1,Wn) -> <fence>`.
pub fn forward(tokens: &TokenStream) -> Vec<Observation> {
    chain_observations(tokens.normalized.iter())
}

/// [`forward`] over the reversed normalized words.
pub fn backward(tokens: &TokenStream) -> Vec<Observation> {
    chain_observations(tokens.normalized.iter().rev())
}

/// `(previous surface word or <fence>, NORM) -> surface word`.
pub fn case(tokens: &TokenStream) -> Vec<Observation> {
    let mut previous = FENCE.to_string();
    tokens
        .words
        .iter()
        .zip(&tokens.normalized)
        .map(|(word, norm)| {
            let observation = Observation::new(Context::new(previous.clone(), norm.clone()), word.clone());
            previous = word.clone();
            observation
        })
        .collect()
}

/// `(previous surface word or <fence>, surface word or <fence>) -> punctuation before it`.
pub fn punctuation(tokens: &TokenStream) -> Vec<Observation> {
    let words = tokens.words.iter().map(String::as_str).chain(std::iter::once(FENCE));
    let mut context = Context::fenced();
    tokens
        .punctuation
        .iter()
        .zip(words)
        .map(|(punc, word)| {
            context = context.advance(word);
            Observation::new(context.clone(), punc.clone())
        })
        .collect()
}

/// For every word (and the closing fence): `(prev, <blank>) -> word` and `(<blank>, word) -> prev`.
pub fn seed(tokens: &TokenStream) -> Vec<Observation> {
    let mut previous = FENCE.to_string();
    let mut results = Vec::with_capacity(2 * (tokens.normalized.len() + 1));
    let norms = tokens.normalized.iter().map(String::as_str).chain(std::iter::once(FENCE));
    for norm in norms {
        results.push(Observation::new(Context::new(previous.clone(), BLANK), norm));
        results.push(Observation::new(Context::new(BLANK, norm), previous.clone()));
        previous = norm.to_string();
    }
    results
}
