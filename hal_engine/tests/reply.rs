use async_trait::async_trait;
use hal_engine::{tokenize, Hal, HalError};
use hal_store::stats::Weights;
use hal_store::{Context, MemoryStorage, Storage, StoreError};
use std::sync::Arc;

fn hal() -> Hal {
    Hal::new(Arc::new(MemoryStorage::new())).unwrap()
}

/// Storage that fails every call.
struct BrokenStorage;

#[async_trait]
impl Storage for BrokenStorage {
    async fn learn(&self, _: &str, _: &Context, _: &str) -> Result<(), StoreError> {
        Err(StoreError::Backend("unreachable".into()))
    }

    async fn weights(&self, _: &str, _: &Context) -> Result<Option<Weights>, StoreError> {
        Err(StoreError::Backend("unreachable".into()))
    }

    async fn clear(&self, _: &str) -> Result<(), StoreError> {
        Err(StoreError::Backend("unreachable".into()))
    }
}

#[tokio::test]
async fn test_replies_with_only_learned_utterance() {
    let hal = hal();
    hal.learn("fancy free-and !fabulous").await.unwrap();
    assert_eq!(hal.reply("").await.unwrap(), "fancy free-and !fabulous");
}

#[tokio::test]
async fn test_replies_with_long_utterance() {
    let hal = hal();
    let line = (0..300).map(|i| format!("w{}", i)).collect::<Vec<_>>().join(" ");
    hal.learn(&line).await.unwrap();
    assert_eq!(hal.reply("").await.unwrap(), line);
}

#[tokio::test]
async fn test_replies_about_keyword() {
    let hal = hal();
    hal.learn("one two three").await.unwrap();
    hal.learn("apple strawberry. banana").await.unwrap();
    for _ in 0..5 {
        assert_eq!(hal.reply("strawberry").await.unwrap(), "apple strawberry. banana");
    }
}

#[tokio::test]
async fn test_fallback_on_empty_store() {
    let hal = hal();
    hal.clear().await.unwrap();
    assert_eq!(hal.reply("").await.unwrap(), "...");
    assert_eq!(hal.reply_or("anything at all", "blah").await.unwrap(), "blah");
}

#[tokio::test]
async fn test_never_echoes_input() {
    let hal = hal();
    hal.learn("the cat sat").await.unwrap();
    hal.learn("a dog ran").await.unwrap();
    let input = tokenize("the cat sat").normalized;
    for _ in 0..20 {
        let reply = hal.reply("the cat sat").await.unwrap();
        assert_ne!(tokenize(&reply).normalized, input);
        assert!(reply == "a dog ran" || reply == "...", "unexpected reply {:?}", reply);
    }
}

#[tokio::test]
async fn test_echo_filtered_to_fallback() {
    let hal = hal();
    hal.learn("only this").await.unwrap();
    assert_eq!(hal.reply("only this").await.unwrap(), "...");
}

#[tokio::test]
async fn test_clear_forgets_everything() {
    let hal = hal();
    hal.learn("fancy free-and !fabulous").await.unwrap();
    hal.clear().await.unwrap();
    assert_eq!(hal.reply("").await.unwrap(), "...");
}

#[tokio::test]
async fn test_models_share_one_store() {
    let storage = Arc::new(MemoryStorage::new());
    let writer = Hal::new(storage.clone()).unwrap();
    let reader = Hal::new(storage).unwrap();
    writer.learn("fancy free-and !fabulous").await.unwrap();
    assert_eq!(reader.reply("").await.unwrap(), "fancy free-and !fabulous");
}

#[tokio::test]
async fn test_store_errors_propagate() {
    let hal = Hal::new(Arc::new(BrokenStorage)).unwrap();
    assert!(matches!(
        hal.learn("things").await,
        Err(HalError::Store(StoreError::Backend(_)))
    ));
    assert!(matches!(hal.reply("things").await, Err(HalError::Store(_))));
    assert!(matches!(hal.clear().await, Err(HalError::Store(_))));
}

#[tokio::test]
async fn test_wordless_learning_skips_store() {
    let hal = Hal::new(Arc::new(BrokenStorage)).unwrap();
    hal.learn("").await.unwrap();
    hal.learn("...").await.unwrap();
}
