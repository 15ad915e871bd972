//! Networked backend on Redis hashes.
//!
//! Every `(prefix, model, context)` maps to one hash whose fields are the
//! observed tokens and whose values are their counts:
//!
//! ```text
//! node-megahal-redis:forward:["<fence>","ONE"]  ->  { "TWO": 3, "THREE": 1 }
//! ```
//!
//! Increments go through `HINCRBY`, which Redis applies atomically, so
//! concurrent learners never lose counts.

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::AsyncCommands;
use std::collections::HashMap;

use super::Storage;
use crate::context::Context;
use crate::error::StoreError;
use crate::stats::Weights;

/// Key prefix used when none is configured.
pub const DEFAULT_PREFIX: &str = "node-megahal-redis";

/// Keys deleted per `DEL` while clearing a model.
const DELETE_BATCH: usize = 512;

/// Observation store backed by a Redis server.
#[derive(Clone)]
pub struct RedisStorage {
    connection: ConnectionManager,
    prefix: String,
}

impl RedisStorage {
    /// Wrap an existing connection.
    pub fn new(connection: ConnectionManager, prefix: impl Into<String>) -> Self {
        Self {
            connection,
            prefix: prefix.into(),
        }
    }

    /// Open a managed connection to `url`, e.g. `redis://localhost:6379`.
    pub async fn connect(url: &str, prefix: Option<&str>) -> Result<Self, StoreError> {
        let client = redis::Client::open(url)?;
        let connection = ConnectionManager::new(client).await?;
        tracing::debug!(url, "connected to redis");
        Ok(Self::new(connection, prefix.unwrap_or(DEFAULT_PREFIX)))
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// `prefix:model:serialized-context`.
    pub fn key_name(&self, model: &str, context: &Context) -> Result<String, StoreError> {
        Ok(key_name(&self.prefix, model, context)?)
    }
}

fn key_name(prefix: &str, model: &str, context: &Context) -> Result<String, serde_json::Error> {
    Ok(format!("{}:{}:{}", prefix, model, context.to_key()?))
}

/// Turn raw hash fields into counts, rejecting anything that is not one.
fn parse_weights(key: &str, raw: HashMap<String, String>) -> Result<Weights, StoreError> {
    raw.into_iter()
        .map(|(token, value)| match value.parse::<u64>() {
            Ok(count) => Ok((token, count)),
            Err(_) => Err(StoreError::CorruptCount {
                key: key.to_string(),
                token,
                value,
            }),
        })
        .collect()
}

impl std::fmt::Debug for RedisStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisStorage")
            .field("prefix", &self.prefix)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl Storage for RedisStorage {
    async fn learn(&self, model: &str, context: &Context, token: &str) -> Result<(), StoreError> {
        let key = self.key_name(model, context)?;
        let mut connection = self.connection.clone();
        let _: i64 = connection.hincr(&key, token, 1).await?;
        Ok(())
    }

    async fn weights(&self, model: &str, context: &Context) -> Result<Option<Weights>, StoreError> {
        let key = self.key_name(model, context)?;
        let mut connection = self.connection.clone();
        let raw: HashMap<String, String> = connection.hgetall(&key).await?;
        tracing::trace!(key = %key, fields = raw.len(), "fetched distribution");
        if raw.is_empty() {
            return Ok(None);
        }
        parse_weights(&key, raw).map(Some)
    }

    async fn clear(&self, model: &str) -> Result<(), StoreError> {
        let pattern = format!("{}:{}:*", self.prefix, model);
        let mut connection = self.connection.clone();

        let keys: Vec<String> = connection.keys(&pattern).await?;

        for batch in keys.chunks(DELETE_BATCH) {
            let _: i64 = connection.del(batch).await?;
        }
        tracing::debug!(model, removed = keys.len(), "cleared redis model");
        Ok(())
    }
}
