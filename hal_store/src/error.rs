//! Store error type.

use thiserror::Error;

/// Errors raised by the observation store and the chains bound to it.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A chain or model was constructed without a name.
    #[error("a chain needs a non-empty model name")]
    MissingName,

    #[error("redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("context serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A networked hash field that does not hold a count.
    #[error("corrupt count for '{token}' under {key}: {value:?}")]
    CorruptCount {
        key: String,
        token: String,
        value: String,
    },

    /// Failure reported by a custom backend.
    #[error("storage backend error: {0}")]
    Backend(String),
}
