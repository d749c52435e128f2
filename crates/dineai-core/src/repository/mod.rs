//! Repository trait definitions (ports).
//!
//! The infrastructure layer (dineai-infra) implements these. The core crate
//! never depends on any specific storage technology.

pub mod record;

pub use record::RecordStore;
