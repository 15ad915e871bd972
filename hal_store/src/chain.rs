//! Chain - a storage view bound to one model name.

use std::sync::Arc;

use crate::context::Context;
use crate::error::StoreError;
use crate::storage::Storage;

/// Forwards every call to the store with the model name filled in.
///
/// Holds no state of its own besides the name; cloning is cheap and every
/// clone sees the same counts.
#[derive(Clone)]
pub struct Chain {
    name: String,
    storage: Arc<dyn Storage>,
}

impl Chain {
    /// Bind `storage` to `name`. Fails before touching the store if the name is blank.
    pub fn new(name: impl Into<String>, storage: Arc<dyn Storage>) -> Result<Self, StoreError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(StoreError::MissingName);
        }
        Ok(Self { name, storage })
    }

    /// The bound model name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The shared store behind this chain.
    pub fn storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    /// Count one more `token` under `context`.
    pub async fn learn(&self, context: &Context, token: &str) -> Result<(), StoreError> {
        self.storage.learn(&self.name, context, token).await
    }

    /// One token drawn in proportion to its count, or `None` for an unseen context.
    pub async fn pick(&self, context: &Context) -> Result<Option<String>, StoreError> {
        self.storage.pick(&self.name, context).await
    }

    /// `limit` independent picks; empty for an unseen context.
    pub async fn pick_multi(&self, context: &Context, limit: usize) -> Result<Vec<String>, StoreError> {
        self.storage.pick_multi(&self.name, context, limit).await
    }

    /// Total observations under `context`.
    pub async fn count(&self, context: &Context) -> Result<u64, StoreError> {
        self.storage.count(&self.name, context).await
    }

    /// Self-information of `seen` under `context`, in bits.
    pub async fn surprise(&self, context: &Context, seen: &str) -> Result<Option<f64>, StoreError> {
        self.storage.surprise(&self.name, context, seen).await
    }

    /// Entropy under `context`, in bits.
    pub async fn uncertainty(&self, context: &Context) -> Result<Option<f64>, StoreError> {
        self.storage.uncertainty(&self.name, context).await
    }

    /// Drop everything learned under this name.
    pub async fn clear(&self) -> Result<(), StoreError> {
        self.storage.clear(&self.name).await
    }
}

impl std::fmt::Debug for Chain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Chain").field("name", &self.name).finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn test_requires_name() {
        let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
        assert!(matches!(Chain::new("", storage.clone()), Err(StoreError::MissingName)));
        assert!(matches!(Chain::new("  ", storage.clone()), Err(StoreError::MissingName)));
        assert_eq!(Chain::new("forward", storage).unwrap().name(), "forward");
    }

    #[tokio::test]
    async fn test_chains_share_storage_by_name() {
        let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
        let a = Chain::new("foo", storage.clone()).unwrap();
        let same = Chain::new("foo", storage.clone()).unwrap();
        let other = Chain::new("bar", storage).unwrap();
        let context = Context::from(["a", "b"]);

        a.learn(&context, "bar").await.unwrap();

        assert_eq!(same.pick(&context).await.unwrap().as_deref(), Some("bar"));
        assert_eq!(same.count(&context).await.unwrap(), 1);
        assert_eq!(other.pick(&context).await.unwrap(), None);
        assert_eq!(a.surprise(&context, "bar").await.unwrap(), Some(0.0));
        assert_eq!(a.uncertainty(&context).await.unwrap(), Some(0.0));

        a.clear().await.unwrap();
        assert_eq!(same.count(&context).await.unwrap(), 0);
        assert!(same.pick_multi(&context, 3).await.unwrap().is_empty());
    }
}
