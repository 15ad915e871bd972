//! # HAL Store
//!
//! The counting layer of HAL. Every model of the reply engine is a set of
//! context-keyed token distributions; this crate owns them and nothing else.
//!
//! ## Core Components
//!
//! - **context**: the bigram [`Context`] key, the `<fence>`/`<blank>` sentinels and [`Observation`]
//! - **stats**: weighted sampling, surprise and uncertainty over a distribution
//! - **storage**: the [`Storage`] contract with in-process and Redis backends
//! - **chain**: [`Chain`], a storage view bound to one model name

pub mod chain;
pub mod context;
pub mod error;
pub mod stats;
pub mod storage;

pub use chain::*;
pub use context::*;
pub use error::*;
pub use storage::*;
