//! Engine configuration, loadable from TOML.
//!
//! ```toml
//! fallback = "..."
//! candidates = 10
//!
//! [storage]
//! backend = "redis"
//! url = "redis://127.0.0.1:6379"
//! prefix = "my-bot"
//! ```

use hal_store::StorageConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{HalError, Result};
use crate::model::DEFAULT_WALK_SAMPLES;

/// Reply given when no candidate can be rewritten.
pub const DEFAULT_FALLBACK: &str = "...";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HalConfig {
    /// Returned by [`crate::Hal::reply`] when nothing could be generated.
    pub fallback: String,
    /// Candidates generated per reply; the last one ignores keywords.
    pub candidates: usize,
    /// Samples drawn per walk step.
    pub walk_samples: usize,
    /// Longest walk before it counts as a miss. Unbounded when unset.
    pub max_walk_length: Option<usize>,
    /// Cased rewrite attempts per candidate.
    pub rewrite_attempts: usize,
    pub storage: StorageConfig,
}

impl Default for HalConfig {
    fn default() -> Self {
        Self {
            fallback: DEFAULT_FALLBACK.to_string(),
            candidates: 10,
            walk_samples: DEFAULT_WALK_SAMPLES,
            max_walk_length: None,
            rewrite_attempts: 10,
            storage: StorageConfig::default(),
        }
    }
}

impl HalConfig {
    /// Parse and validate a TOML document. Missing keys take their defaults.
    pub fn from_toml(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let source = tokio::fs::read_to_string(path.as_ref()).await?;
        tracing::debug!(path = %path.as_ref().display(), "loaded configuration");
        Self::from_toml(&source)
    }

    /// Apply command-line storage overrides.
    ///
    /// `redis` replaces the storage section with a Redis backend. `prefix`
    /// only makes sense for Redis and is rejected for in-process storage.
    pub fn override_storage(&mut self, redis: Option<String>, prefix: Option<String>) -> Result<()> {
        if let Some(url) = redis {
            self.storage = StorageConfig::Redis { url, prefix: None };
        }
        match (&mut self.storage, prefix) {
            (_, None) => Ok(()),
            (StorageConfig::Redis { prefix: current, .. }, Some(p)) => {
                *current = Some(p);
                Ok(())
            }
            (StorageConfig::Memory, Some(_)) => Err(HalError::Config(
                "a key prefix needs redis storage".to_string(),
            )),
        }
    }

    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("candidates", self.candidates),
            ("walk_samples", self.walk_samples),
            ("rewrite_attempts", self.rewrite_attempts),
        ] {
            if value == 0 {
                return Err(HalError::Config(format!("`{}` must be at least 1", name)));
            }
        }
        Ok(())
    }
}
