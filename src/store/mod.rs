use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

pub mod memory;
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgDocumentStore;

/// Collection holding survey documents.
pub const SURVEYS: &str = "surveys";

/// Collection holding evaluation submissions.
pub const EVALUATIONS: &str = "evaluations";

/// Errors from document-store backends.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Invalid collection name: {0}")]
    InvalidCollection(String),

    #[error("Write refused by store")]
    WriteRefused,

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Add/get access to named collections of JSON documents with
/// server-generated identifiers. Backends own durability and consistency;
/// callers get no batching, retries, or multi-document transactions.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Persist `doc` under a fresh identifier and return that identifier.
    async fn add(&self, collection: &str, doc: Value) -> Result<String, StoreError>;

    /// Direct lookup by identifier. Unknown ids resolve to `Ok(None)`.
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Value>, StoreError>;

    /// Connectivity check used by the health endpoint.
    async fn ping(&self) -> Result<(), StoreError>;
}

/// Collection names end up interpolated into SQL, so restrict them to
/// lowercase identifiers.
pub(crate) fn is_valid_collection(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_lowercase() || c == '_')
}
