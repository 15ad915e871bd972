//! In-process backend.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

use super::{sample, Storage};
use crate::context::Context;
use crate::error::StoreError;
use crate::stats::{self, Weights};

/// Context -> distribution for a single model.
type ModelTable = HashMap<Context, Weights>;

/// A process-lifetime store, sharded by model name.
///
/// The outer lock is only written when a model is first learned or cleared;
/// increments lock the one model table they touch.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    models: RwLock<HashMap<String, Arc<RwLock<ModelTable>>>>,
}

impl MemoryStorage {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn table(&self, model: &str) -> Option<Arc<RwLock<ModelTable>>> {
        self.models.read().get(model).cloned()
    }

    fn table_or_insert(&self, model: &str) -> Arc<RwLock<ModelTable>> {
        if let Some(table) = self.table(model) {
            return table;
        }
        self.models
            .write()
            .entry(model.to_string())
            .or_default()
            .clone()
    }

    /// Number of distinct contexts learned for a model.
    pub fn context_count(&self, model: &str) -> usize {
        self.table(model).map(|t| t.read().len()).unwrap_or(0)
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn learn(&self, model: &str, context: &Context, token: &str) -> Result<(), StoreError> {
        let table = self.table_or_insert(model);
        let mut table = table.write();
        *table
            .entry(context.clone())
            .or_default()
            .entry(token.to_string())
            .or_insert(0) += 1;
        Ok(())
    }

    async fn weights(&self, model: &str, context: &Context) -> Result<Option<Weights>, StoreError> {
        Ok(self
            .table(model)
            .and_then(|table| table.read().get(context).cloned()))
    }

    async fn clear(&self, model: &str) -> Result<(), StoreError> {
        self.models.write().remove(model);
        tracing::trace!(model, "cleared in-process model");
        Ok(())
    }

    async fn pick_multi(
        &self,
        model: &str,
        context: &Context,
        limit: usize,
    ) -> Result<Vec<String>, StoreError> {
        let Some(table) = self.table(model) else {
            return Ok(Vec::new());
        };
        let table = table.read();
        Ok(table
            .get(context)
            .map(|w| sample(w, limit))
            .unwrap_or_default())
    }

    async fn count(&self, model: &str, context: &Context) -> Result<u64, StoreError> {
        Ok(self
            .table(model)
            .and_then(|table| table.read().get(context).map(stats::total))
            .unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::contract;

    #[tokio::test]
    async fn test_memory_contract() {
        let storage = MemoryStorage::new();
        contract::exercise(&storage, "modelName").await;
    }

    #[tokio::test]
    async fn test_models_are_independent_namespaces() {
        let storage = MemoryStorage::new();
        let context = Context::fenced();

        storage.learn("forward", &context, "ONE").await.unwrap();
        storage.learn("backward", &context, "THREE").await.unwrap();

        assert_eq!(storage.pick("forward", &context).await.unwrap().as_deref(), Some("ONE"));
        assert_eq!(storage.pick("backward", &context).await.unwrap().as_deref(), Some("THREE"));

        storage.clear("forward").await.unwrap();
        assert_eq!(storage.count("forward", &context).await.unwrap(), 0);
        assert_eq!(storage.count("backward", &context).await.unwrap(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_increments_are_not_lost() {
        let storage = Arc::new(MemoryStorage::new());
        let context = Context::from(["a", "b"]);

        let mut handles = Vec::new();
        for _ in 0..8 {
            let storage = storage.clone();
            let context = context.clone();
            handles.push(tokio::spawn(async move {
                for _ in 0..250 {
                    storage.learn("model", &context, "bar").await.unwrap();
                }
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(storage.count("model", &context).await.unwrap(), 2000);
        assert_eq!(storage.context_count("model"), 1);
    }
}
