use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::config::AppConfig;

use super::{is_valid_collection, DocumentStore, StoreError, EVALUATIONS, SURVEYS};

/// Postgres-backed document store: one JSONB table per collection, with
/// UUID document identifiers generated on insert.
pub struct PgDocumentStore {
    pool: PgPool,
}

impl PgDocumentStore {
    /// Connect to the configured database and make sure the collection
    /// tables exist.
    pub async fn connect(config: &AppConfig) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.database.max_connections)
            .acquire_timeout(Duration::from_secs(config.database.connection_timeout))
            .connect(config.database_url.as_str())
            .await?;

        let store = Self { pool };
        store.ensure_collection(SURVEYS).await?;
        store.ensure_collection(EVALUATIONS).await?;

        info!("document store ready");
        Ok(store)
    }

    async fn ensure_collection(&self, collection: &str) -> Result<(), StoreError> {
        let sql = format!(
            "CREATE TABLE IF NOT EXISTS \"{}\" (id UUID PRIMARY KEY, doc JSONB NOT NULL)",
            checked(collection)?
        );
        sqlx::query(&sql).execute(&self.pool).await?;
        Ok(())
    }
}

fn checked(collection: &str) -> Result<&str, StoreError> {
    if is_valid_collection(collection) {
        Ok(collection)
    } else {
        Err(StoreError::InvalidCollection(collection.to_string()))
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn add(&self, collection: &str, doc: Value) -> Result<String, StoreError> {
        let id = Uuid::new_v4();
        let sql = format!(
            "INSERT INTO \"{}\" (id, doc) VALUES ($1, $2)",
            checked(collection)?
        );
        sqlx::query(&sql).bind(id).bind(&doc).execute(&self.pool).await?;
        Ok(id.to_string())
    }

    async fn get(&self, collection: &str, id: &str) -> Result<Option<Value>, StoreError> {
        // Identifiers are UUIDs; anything else cannot name a document.
        let id = match Uuid::parse_str(id) {
            Ok(id) => id,
            Err(_) => return Ok(None),
        };

        let sql = format!("SELECT doc FROM \"{}\" WHERE id = $1", checked(collection)?);
        let row: Option<(Value,)> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(|(doc,)| doc))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
