//! Record store trait definition.

use std::future::Future;

use dineai_types::error::RecordStoreError;
use dineai_types::record::PersistedRecord;

/// Append-only document store, one named collection per feature.
///
/// Implementations live in dineai-infra (e.g., `SqliteRecordStore`).
/// There is no read path: records are written once and never updated.
pub trait RecordStore: Send + Sync {
    /// Insert `record` into `collection`. No key is returned and identical
    /// records are stored as separate documents.
    fn append(
        &self,
        collection: &str,
        record: &PersistedRecord,
    ) -> impl Future<Output = Result<(), RecordStoreError>> + Send;
}
