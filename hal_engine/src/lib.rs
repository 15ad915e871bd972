//! # HAL Engine
//!
//! A statistical dialogue generator in the MegaHAL tradition. It learns word
//! statistics from example text and answers new input with novel, plausible
//! replies built around the input's keywords.
//!
//! ## Core Components
//!
//! - **tokenizer**: Splits text into words, punctuation and normalized forms
//! - **lexicon**: Antonyms, banned and auxiliary words, greetings; keyword extraction
//! - **strategy**: The five ways an utterance becomes training observations
//! - **model**: A named chain plus its strategy, with random-walk generation
//! - **generator**: The reply engine coordinating all five models
//! - **config**: TOML configuration
//!
//! ## Example
//!
//! ```no_run
//! use hal_engine::Hal;
//! use hal_store::MemoryStorage;
//! use std::sync::Arc;
//!
//! # async fn demo() -> hal_engine::Result<()> {
//! let hal = Hal::new(Arc::new(MemoryStorage::new()))?;
//! hal.learn("apple strawberry. banana").await?;
//! println!("{}", hal.reply("strawberry").await?);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod generator;
pub mod lexicon;
pub mod model;
pub mod strategy;
pub mod tokenizer;

pub use config::*;
pub use error::*;
pub use generator::*;
pub use lexicon::Lexicon;
pub use model::*;
pub use strategy::Strategy;
pub use tokenizer::{tokenize, TokenStream};
