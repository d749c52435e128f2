//! Shared domain types for dineai.
//!
//! This crate contains the types passed between the feature pipelines, the
//! generative-AI adapters and the record store: form values, persisted
//! records, generation requests/results, configuration, and error types.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod config;
pub mod error;
pub mod form;
pub mod generation;
pub mod record;
