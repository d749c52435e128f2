//! SQLite-backed record store.
//!
//! Each appended record becomes one row in `records`: a UUIDv7 id, the
//! collection name, the record serialized as a flat JSON document, and the
//! insertion time. Rows are never updated or deleted.

use chrono::Utc;
use uuid::Uuid;

use dineai_core::repository::RecordStore;
use dineai_types::error::RecordStoreError;
use dineai_types::record::PersistedRecord;

use super::pool::DatabasePool;

pub struct SqliteRecordStore {
    pool: DatabasePool,
}

impl SqliteRecordStore {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

impl RecordStore for SqliteRecordStore {
    async fn append(
        &self,
        collection: &str,
        record: &PersistedRecord,
    ) -> Result<(), RecordStoreError> {
        let document = record
            .to_document()
            .map_err(|e| RecordStoreError::Serialization(e.to_string()))?;
        let id = Uuid::now_v7();

        sqlx::query(
            "INSERT INTO records (id, collection, document, created_at) VALUES (?, ?, ?, ?)",
        )
        .bind(id.to_string())
        .bind(collection)
        .bind(document.to_string())
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool.writer)
        .await
        .map_err(|e| RecordStoreError::Query(e.to_string()))?;

        tracing::debug!(%id, collection, "Record appended");
        Ok(())
    }
}
