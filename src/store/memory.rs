use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{DocumentStore, StoreError};

/// In-process store double. Keeps documents in insertion order per
/// collection so tests can assert exactly what was persisted, and can be
/// switched to refuse writes the way an unreachable backend would.
#[derive(Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Vec<(String, Value)>>>,
    fail_writes: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent `add` calls fail.
    pub fn refuse_writes(&self, refuse: bool) {
        self.fail_writes.store(refuse, Ordering::SeqCst);
    }

    /// Snapshot of a collection in insertion order.
    pub async fn documents(&self, collection: &str) -> Vec<(String, Value)> {
        self.collections
            .read()
            .await
            .get(collection)
            .cloned()
            .unwrap_or_default()
    }

    /// Insert a document under a fixed identifier (test seeding).
    pub async fn put(&self, collection: &str, id: &str, doc: Value) {
        self.collections
            .write()
            .await
            .entry(collection.to_string())
            .or_default()
            .push((id.to_string(), doc));
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn add(&self, collection: &str, doc: Value) -> Result<String, StoreError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::WriteRefused);
        }
        let id = Uuid::new_v4().to_string();
        self.put(collection, &id, doc).await;
        Ok(id)
    }

    async fn get(&self, collection: &str, id: &str) -> Result<Option<Value>, StoreError> {
        Ok(self
            .collections
            .read()
            .await
            .get(collection)
            .and_then(|docs| docs.iter().find(|(doc_id, _)| doc_id == id))
            .map(|(_, doc)| doc.clone()))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
