//! SQLite storage.
//!
//! [`DatabasePool`] owns the connections; [`SqliteRecordStore`] implements
//! the append-only `RecordStore` port on top of it.

pub mod pool;
pub mod record;

pub use pool::{DatabasePool, database_url_for};
pub use record::SqliteRecordStore;
