//! Storage backends - where observation counts live.
//!
//! Every backend keeps, per model name and per [`Context`], a multiset of
//! observed tokens. Backends implement three primitives (increment, fetch the
//! distribution, drop a model) and inherit the sampling and information
//! measures from [`crate::stats`], so an in-process store and a Redis store
//! answer every query the same way.

mod memory;
mod redis_store;

pub use self::memory::MemoryStorage;
pub use self::redis_store::{RedisStorage, DEFAULT_PREFIX};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::context::Context;
use crate::error::StoreError;
use crate::stats::{self, Weights};

/// The observation store contract.
///
/// Implementations must tolerate concurrent `learn` calls on the same key
/// without losing increments.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Count one more observation of `token` under `(model, context)`.
    async fn learn(&self, model: &str, context: &Context, token: &str) -> Result<(), StoreError>;

    /// The full distribution under `(model, context)`, or `None` if it was never learned.
    async fn weights(&self, model: &str, context: &Context) -> Result<Option<Weights>, StoreError>;

    /// Remove every entry of `model`. Other models are untouched.
    async fn clear(&self, model: &str) -> Result<(), StoreError>;

    /// Pick a token proportionally to its count.
    async fn pick(&self, model: &str, context: &Context) -> Result<Option<String>, StoreError> {
        let weights = self.weights(model, context).await?;
        Ok(weights.and_then(|w| {
            stats::pick_weighted(&w, &mut rand::thread_rng()).map(str::to_owned)
        }))
    }

    /// `limit` independent picks. Empty when the context is unknown.
    async fn pick_multi(
        &self,
        model: &str,
        context: &Context,
        limit: usize,
    ) -> Result<Vec<String>, StoreError> {
        let weights = self.weights(model, context).await?;
        Ok(weights
            .map(|w| sample(&w, limit))
            .unwrap_or_default())
    }

    /// Sum of all counts under the context; 0 if unseen.
    async fn count(&self, model: &str, context: &Context) -> Result<u64, StoreError> {
        let weights = self.weights(model, context).await?;
        Ok(weights.map(|w| stats::total(&w)).unwrap_or(0))
    }

    /// Self-information of `seen` under the context, in bits.
    async fn surprise(
        &self,
        model: &str,
        context: &Context,
        seen: &str,
    ) -> Result<Option<f64>, StoreError> {
        let weights = self.weights(model, context).await?;
        Ok(weights.and_then(|w| stats::surprise(&w, seen)))
    }

    /// Entropy of the distribution under the context, in bits.
    async fn uncertainty(&self, model: &str, context: &Context) -> Result<Option<f64>, StoreError> {
        let weights = self.weights(model, context).await?;
        Ok(weights.and_then(|w| stats::uncertainty(&w)))
    }
}

/// Draw `limit` tokens with replacement.
pub(crate) fn sample(weights: &Weights, limit: usize) -> Vec<String> {
    let mut rng = rand::thread_rng();
    (0..limit)
        .filter_map(|_| stats::pick_weighted(weights, &mut rng).map(str::to_owned))
        .collect()
}

/// Construction-time choice of backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "backend", rename_all = "lowercase")]
pub enum StorageConfig {
    /// Process-lifetime map; lost on restart.
    #[default]
    Memory,
    /// Redis hashes, one per (prefix, model, context).
    Redis {
        url: String,
        #[serde(default)]
        prefix: Option<String>,
    },
}

impl StorageConfig {
    /// Build the configured backend.
    pub async fn connect(&self) -> Result<Arc<dyn Storage>, StoreError> {
        match self {
            StorageConfig::Memory => Ok(Arc::new(MemoryStorage::new())),
            StorageConfig::Redis { url, prefix } => {
                let storage = RedisStorage::connect(url, prefix.as_deref()).await?;
                Ok(Arc::new(storage))
            }
        }
    }
}
