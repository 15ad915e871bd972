//! Model - a chain plus the strategy that feeds it, with random-walk generation.

use futures::future::try_join_all;
use hal_store::{Chain, Context, StoreError, Storage, FENCE};
use std::sync::Arc;

use crate::strategy::Strategy;
use crate::tokenizer::{tokenize, TokenStream};

/// Samples drawn per walk step.
pub const DEFAULT_WALK_SAMPLES: usize = 10;

/// One predictive model of the reply engine.
#[derive(Debug, Clone)]
pub struct Model {
    chain: Chain,
    strategy: Strategy,
    walk_samples: usize,
    max_walk_length: Option<usize>,
}

impl Model {
    /// Create a model named `name` over `storage`.
    pub fn new(
        name: impl Into<String>,
        storage: Arc<dyn Storage>,
        strategy: Strategy,
    ) -> Result<Self, StoreError> {
        Ok(Self::from_chain(Chain::new(name, storage)?, strategy))
    }

    /// Wrap an existing chain. Walks are unbounded until limited.
    pub fn from_chain(chain: Chain, strategy: Strategy) -> Self {
        Self {
            chain,
            strategy,
            walk_samples: DEFAULT_WALK_SAMPLES,
            max_walk_length: None,
        }
    }

    /// Override how many samples each walk step draws and, optionally, how
    /// many tokens a walk may produce before it counts as a miss.
    pub fn with_walk_limits(mut self, samples: usize, max_length: Option<usize>) -> Self {
        self.walk_samples = samples.max(1);
        self.max_walk_length = max_length;
        self
    }

    /// The model name, which is also its storage namespace.
    pub fn name(&self) -> &str {
        self.chain.name()
    }

    /// How this model turns text into observations.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// The underlying storage view.
    pub fn chain(&self) -> &Chain {
        &self.chain
    }

    /// Tokenize `text` and learn it.
    pub async fn learn(&self, text: &str) -> Result<(), StoreError> {
        self.learn_tokens(&tokenize(text)).await
    }

    /// Learn every observation the strategy derives from `tokens`.
    ///
    /// Observations are independent increments, so they are recorded concurrently.
    pub async fn learn_tokens(&self, tokens: &TokenStream) -> Result<(), StoreError> {
        let observations = self.strategy.observe(tokens);
        try_join_all(
            observations
                .iter()
                .map(|o| self.chain.learn(&o.context, &o.observed)),
        )
        .await?;
        Ok(())
    }

    /// Forget everything this model has learned.
    pub async fn clear(&self) -> Result<(), StoreError> {
        self.chain.clear().await
    }

    /// One token drawn in proportion to its count under `context`.
    pub async fn pick(&self, context: &Context) -> Result<Option<String>, StoreError> {
        self.chain.pick(context).await
    }

    /// Observations recorded under `context`.
    pub async fn count(&self, context: &Context) -> Result<u64, StoreError> {
        self.chain.count(context).await
    }

    /// Self-information of `seen` under `context`, in bits.
    pub async fn surprise(&self, context: &Context, seen: &str) -> Result<Option<f64>, StoreError> {
        self.chain.surprise(context, seen).await
    }

    /// Entropy of the distribution under `context`, in bits.
    pub async fn uncertainty(&self, context: &Context) -> Result<Option<f64>, StoreError> {
        self.chain.uncertainty(context).await
    }

    /// Random walk from `start` until the model produces `<fence>`.
    ///
    /// Each step draws several candidates and lets [`Model::best_next`] prefer a
    /// keyword. Returns the tokens before the fence, or `None` if some step
    /// had no continuation or the walk outgrew its length limit.
    pub async fn walk(
        &self,
        start: &Context,
        keywords: &[String],
    ) -> Result<Option<Vec<String>>, StoreError> {
        let mut results = Vec::new();
        let mut context = start.clone();
        loop {
            let samples = self.chain.pick_multi(&context, self.walk_samples).await?;
            let Some(next) = Self::best_next(&samples, keywords) else {
                tracing::trace!(model = self.name(), %context, "walk found no continuation");
                return Ok(None);
            };
            if next == FENCE {
                return Ok(Some(results));
            }
            if let Some(limit) = self.max_walk_length.filter(|l| results.len() >= *l) {
                tracing::debug!(model = self.name(), "walk exceeded {} tokens", limit);
                return Ok(None);
            }
            results.push(next.clone());
            context = context.advance(next.clone());
        }
    }

    /// Choose among sampled continuations.
    ///
    /// Without keywords the first sample wins. Otherwise the last sample that
    /// is a keyword wins, falling back to the first sample.
    pub fn best_next<'a>(samples: &'a [String], keywords: &[String]) -> Option<&'a String> {
        if keywords.is_empty() {
            return samples.first();
        }
        samples
            .iter()
            .rev()
            .find(|s| keywords.contains(s))
            .or_else(|| samples.first())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hal_store::MemoryStorage;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn model(name: &str) -> Model {
        Model::new(name, Arc::new(MemoryStorage::new()), Strategy::Forward).unwrap()
    }

    #[test]
    fn test_requires_name() {
        let result = Model::new("", Arc::new(MemoryStorage::new()), Strategy::Forward);
        assert!(matches!(result, Err(StoreError::MissingName)));
    }

    #[tokio::test]
    async fn test_walk_forward() {
        let model = model("foo");
        model.learn("one two three").await.unwrap();
        assert_eq!(
            model.walk(&Context::fenced(), &[]).await.unwrap(),
            Some(strings(&["ONE", "TWO", "THREE"]))
        );
    }

    #[tokio::test]
    async fn test_walk_fails_without_continuation() {
        let model = model("foo");
        model.learn("one two three").await.unwrap();
        assert_eq!(model.walk(&Context::from(["APPLE", "BANANA"]), &[]).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_walk_length_limit() {
        let model = model("foo").with_walk_limits(10, Some(2));
        model.learn("one two three").await.unwrap();
        assert_eq!(model.walk(&Context::fenced(), &[]).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_walk_unbounded_by_default() {
        let model = model("foo");
        let words: Vec<String> = (0..300).map(|i| format!("w{}", i)).collect();
        model.learn(&words.join(" ")).await.unwrap();
        let walked = model.walk(&Context::fenced(), &[]).await.unwrap().unwrap();
        assert_eq!(walked.len(), 300);
        assert_eq!(walked[299], "W299");
    }

    #[tokio::test]
    async fn test_pick() {
        let model = model("bar");
        model.learn("one two three").await.unwrap();
        assert_eq!(
            model.pick(&Context::from(["ONE", "TWO"])).await.unwrap().as_deref(),
            Some("THREE")
        );
        assert_eq!(model.count(&Context::from(["ONE", "TWO"])).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_statistic_measures() {
        let model = model("foo");
        model.learn("one two three").await.unwrap();
        let context = Context::from(["ONE", "TWO"]);
        assert_eq!(model.uncertainty(&context).await.unwrap(), Some(0.0));
        assert_eq!(model.surprise(&context, "THREE").await.unwrap(), Some(0.0));
    }

    #[tokio::test]
    async fn test_clear() {
        let model = model("foo");
        model.learn("one two three").await.unwrap();
        model.clear().await.unwrap();
        assert_eq!(model.walk(&Context::fenced(), &[]).await.unwrap(), None);
    }

    #[test]
    fn test_best_next_prefers_keywords() {
        let samples = strings(&["one", "two", "three"]);
        assert_eq!(Model::best_next(&samples, &strings(&["two"])).map(String::as_str), Some("two"));
    }

    #[test]
    fn test_best_next_last_keyword_wins() {
        let samples = strings(&["one", "two", "three"]);
        let keywords = strings(&["two", "one"]);
        assert_eq!(Model::best_next(&samples, &keywords).map(String::as_str), Some("two"));
    }

    #[test]
    fn test_best_next_without_match() {
        let samples = strings(&["one", "two", "three"]);
        assert_eq!(
            Model::best_next(&samples, &strings(&["notinit"])).map(String::as_str),
            Some("one")
        );
        assert_eq!(Model::best_next(&samples, &[]).map(String::as_str), Some("one"));
        assert_eq!(Model::best_next(&[], &strings(&["one"])), None);
    }
}
