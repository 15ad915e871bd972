//! Errors surfaced by the reply engine.
//!
//! Generation misses are not errors: walks and rewrites that come up empty
//! end in `None` and the reply falls back. Only storage failures and bad
//! configuration reach the caller.

use hal_store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HalError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for engine operations.
pub type Result<T> = std::result::Result<T, HalError>;
