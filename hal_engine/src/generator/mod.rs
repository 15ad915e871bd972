//! Generator - five models that learn every utterance together and
//! cooperate on replies.
//!
//! A reply is built in stages:
//! 1. **Keywords**: the interesting words of the input, via the [`Lexicon`]
//! 2. **Seeds**: for each biased candidate, a bigram around a random keyword
//! 3. **Phrases**: walks backward and forward from the seed to the fences
//! 4. **Scoring**: how surprising the keywords are where they appear
//! 5. **Rewrite**: casing and punctuation for the best phrase that admits both

mod candidate;

pub use candidate::*;

use futures::future::try_join_all;
use hal_store::{Context, Storage, BLANK, FENCE};
use rand::seq::SliceRandom;
use std::sync::Arc;

use crate::config::HalConfig;
use crate::error::Result;
use crate::lexicon::Lexicon;
use crate::model::Model;
use crate::strategy::Strategy;
use crate::tokenizer::tokenize;

pub const FORWARD: &str = "forward";
pub const BACKWARD: &str = "backward";
pub const ORIGINAL_CASE: &str = "originalCase";
pub const PUNC: &str = "punc";
pub const SEED: &str = "seed";

/// The reply engine.
#[derive(Debug, Clone)]
pub struct Hal {
    forward: Model,
    backward: Model,
    original_case: Model,
    punc: Model,
    seed: Model,
    lexicon: Lexicon,
    config: HalConfig,
}

impl Hal {
    /// An engine over `storage` with the default configuration and lexicon.
    pub fn new(storage: Arc<dyn Storage>) -> Result<Self> {
        Self::with_config(storage, HalConfig::default())
    }

    /// An engine over `storage`. The storage section of `config` is ignored.
    pub fn with_config(storage: Arc<dyn Storage>, config: HalConfig) -> Result<Self> {
        config.validate()?;
        let model = |name: &str, strategy: Strategy| -> Result<Model> {
            Ok(Model::new(name, storage.clone(), strategy)?
                .with_walk_limits(config.walk_samples, config.max_walk_length))
        };
        Ok(Self {
            forward: model(FORWARD, Strategy::Forward)?,
            backward: model(BACKWARD, Strategy::Backward)?,
            original_case: model(ORIGINAL_CASE, Strategy::Case)?,
            punc: model(PUNC, Strategy::Punctuation)?,
            seed: model(SEED, Strategy::Seed)?,
            lexicon: Lexicon::default(),
            config,
        })
    }

    /// Open the backend named by `config.storage` and build an engine on it.
    pub async fn connect(config: HalConfig) -> Result<Self> {
        let storage = config.storage.connect().await?;
        Self::with_config(storage, config)
    }

    /// Replace the word lists used for keyword extraction.
    pub fn with_lexicon(mut self, lexicon: Lexicon) -> Self {
        self.lexicon = lexicon;
        self
    }

    /// Word lists used for keyword extraction.
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// The configuration this engine was built with.
    pub fn config(&self) -> &HalConfig {
        &self.config
    }

    /// All models, in fixed order: forward, backward, originalCase, punc, seed.
    pub fn models(&self) -> [&Model; 5] {
        [
            &self.forward,
            &self.backward,
            &self.original_case,
            &self.punc,
            &self.seed,
        ]
    }

    /// Learn `text` in every model at once. Text without words is ignored.
    #[tracing::instrument(skip(self))]
    pub async fn learn(&self, text: &str) -> Result<()> {
        let tokens = tokenize(text);
        if tokens.is_empty() {
            tracing::debug!("nothing to learn");
            return Ok(());
        }
        try_join_all(self.models().into_iter().map(|m| m.learn_tokens(&tokens))).await?;
        Ok(())
    }

    /// Forget everything every model has learned.
    pub async fn clear(&self) -> Result<()> {
        try_join_all(self.models().into_iter().map(Model::clear)).await?;
        tracing::info!("cleared all models");
        Ok(())
    }

    /// Reply to `text`, or the configured fallback if nothing can be generated.
    pub async fn reply(&self, text: &str) -> Result<String> {
        self.reply_or(text, &self.config.fallback).await
    }

    /// Reply to `text`, or `fallback` if nothing can be generated.
    ///
    /// Only storage failures are errors.
    #[tracing::instrument(skip(self, fallback))]
    pub async fn reply_or(&self, text: &str, fallback: &str) -> Result<String> {
        for mut candidate in self.candidates(text).await? {
            candidate.rewritten = self.rewrite(&candidate.phrase).await?;
            if let Some(reply) = candidate.rewritten {
                tracing::debug!(score = candidate.score, "replying");
                return Ok(reply);
            }
        }
        tracing::warn!("no candidate could be rewritten, using fallback");
        Ok(fallback.to_string())
    }

    /// Generate and score candidate phrases for `text`, best first.
    ///
    /// Empty phrases and phrases that merely repeat the input are dropped.
    /// Ties keep generation order, which puts keyword-biased candidates ahead
    /// of the unbiased one.
    pub async fn candidates(&self, text: &str) -> Result<Vec<Candidate>> {
        let input = tokenize(text).normalized;
        let keywords = self.lexicon.keywords(&input);

        let biased = self.config.candidates - 1;
        let phrases = try_join_all((0..self.config.candidates).map(|i| {
            let keywords = &keywords;
            async move {
                if i < biased {
                    self.biased_phrase(keywords).await
                } else {
                    self.phrase_from_seed(&[], None).await
                }
            }
        }))
        .await?;

        let phrases: Vec<Vec<String>> = phrases
            .into_iter()
            .flatten()
            .filter(|phrase| !phrase.is_empty() && *phrase != input)
            .collect();
        tracing::debug!(generated = phrases.len(), "generated candidates");

        let scores = try_join_all(phrases.iter().map(|p| self.score(&keywords, p))).await?;
        let mut candidates: Vec<Candidate> = phrases
            .into_iter()
            .zip(scores)
            .map(|(phrase, score)| Candidate::new(phrase, score))
            .collect();
        candidates.sort_by(|a, b| b.score.total_cmp(&a.score));
        Ok(candidates)
    }

    async fn biased_phrase(&self, keywords: &[String]) -> Result<Option<Vec<String>>> {
        match self.seed_from_keywords(keywords).await? {
            Some(seed) => self.phrase_from_seed(keywords, Some(&seed)).await,
            None => Ok(None),
        }
    }

    /// A bigram containing one randomly chosen keyword next to a word the
    /// seed model has seen beside it.
    ///
    /// `None` when `keywords` is empty or the chosen keyword was never learned.
    pub async fn seed_from_keywords(&self, keywords: &[String]) -> Result<Option<Context>> {
        let Some(anchor) = keywords.choose(&mut rand::thread_rng()).cloned() else {
            return Ok(None);
        };

        let left = Context::new(BLANK, anchor.as_str());
        let right = Context::new(anchor.as_str(), BLANK);
        let (before, after) = futures::try_join!(self.seed.pick(&left), self.seed.pick(&right))?;
        let seeds: Vec<Context> = before
            .map(|word| Context::new(word, anchor.as_str()))
            .into_iter()
            .chain(after.map(|word| Context::new(anchor.as_str(), word)))
            .collect();
        Ok(seeds.choose(&mut rand::thread_rng()).cloned())
    }

    /// Grow a phrase outward from `seed` until both ends reach a fence.
    ///
    /// A side whose walk fails contributes nothing, so the seed itself (minus
    /// fences) always survives. Without a seed this is a plain forward walk
    /// from the start of an utterance, which may fail.
    pub async fn phrase_from_seed(
        &self,
        keywords: &[String],
        seed: Option<&Context>,
    ) -> Result<Option<Vec<String>>> {
        let Some(seed) = seed else {
            return Ok(self.forward.walk(&Context::fenced(), keywords).await?);
        };

        let reversed = seed.reversed();
        let (backward, forward) = futures::try_join!(
            self.backward.walk(&reversed, keywords),
            self.forward.walk(seed, keywords),
        )?;

        let mut phrase: Vec<String> = backward.unwrap_or_default().into_iter().rev().collect();
        phrase.extend(seed.tokens().iter().filter(|t| *t != FENCE).cloned());
        phrase.extend(forward.unwrap_or_default());
        Ok(Some(phrase))
    }

    /// How surprising the keywords in `phrase` are to the forward and
    /// backward models, in bits, with long phrases dampened.
    ///
    /// A direction with no keyword at all scores -1, below any overlap.
    pub async fn score(&self, keywords: &[String], phrase: &[String]) -> Result<f64> {
        if phrase.is_empty() {
            return Ok(0.0);
        }
        let (forward, backward) = futures::try_join!(
            self.score_direction(&self.forward, trigrams(phrase), keywords),
            self.score_direction(&self.backward, trigrams(phrase.iter().rev()), keywords),
        )?;
        Ok(dampen(forward + backward, phrase.len()))
    }

    async fn score_direction(
        &self,
        model: &Model,
        trigrams: Vec<(Context, String)>,
        keywords: &[String],
    ) -> Result<f64> {
        let interesting: Vec<&(Context, String)> = trigrams
            .iter()
            .filter(|(_, token)| keywords.contains(token))
            .collect();
        if interesting.is_empty() {
            return Ok(-1.0);
        }
        let surprises = try_join_all(
            interesting
                .into_iter()
                .map(|(context, token)| model.surprise(context, token)),
        )
        .await?;
        Ok(surprises.into_iter().flatten().sum())
    }

    /// Cased and punctuated text for `phrase`, retried a few times since casing
    /// is path dependent. `None` if every attempt hit a gap.
    pub async fn rewrite(&self, phrase: &[String]) -> Result<Option<String>> {
        if phrase.is_empty() {
            return Ok(None);
        }
        for attempt in 1..=self.config.rewrite_attempts {
            if let Some(words) = self.cased_words(phrase).await? {
                return Ok(Some(self.punctuate(&words).await?));
            }
            tracing::debug!(attempt, "rewrite attempt missed");
        }
        Ok(None)
    }

    /// Pick a surface form for each normalized word, given the previous
    /// surface form.
    ///
    /// `None` when some word has no casing in that context, or the last word
    /// has never ended an utterance.
    pub async fn cased_words(&self, phrase: &[String]) -> Result<Option<Vec<String>>> {
        let mut words: Vec<String> = Vec::with_capacity(phrase.len());
        for norm in phrase {
            let previous = words.last().map_or(FENCE, String::as_str);
            match self.original_case.pick(&Context::new(previous, norm.as_str())).await? {
                Some(word) => words.push(word),
                None => return Ok(None),
            }
        }
        if let Some(last) = words.last() {
            if self.punc.count(&Context::new(last.as_str(), FENCE)).await? == 0 {
                return Ok(None);
            }
        }
        Ok(Some(words))
    }

    /// Interleave `words` with punctuation picked for each gap, including
    /// the one after the last word. Gaps never seen contribute nothing.
    pub async fn punctuate(&self, words: &[String]) -> Result<String> {
        if words.is_empty() {
            return Ok(String::new());
        }
        let mut contexts = Vec::with_capacity(words.len() + 1);
        let mut context = Context::fenced();
        for word in words.iter().map(String::as_str).chain(std::iter::once(FENCE)) {
            context = context.advance(word);
            contexts.push(context.clone());
        }

        let gaps = try_join_all(contexts.iter().map(|c| self.punc.pick(c))).await?;
        let mut text = String::new();
        for (index, gap) in gaps.into_iter().enumerate() {
            text.push_str(gap.as_deref().unwrap_or_default());
            if let Some(word) = words.get(index) {
                text.push_str(word);
            }
        }
        Ok(text)
    }
}
