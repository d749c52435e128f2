//! Observability for dineai: subscriber setup and the GenAI span
//! attribute names used by the generation clients.

pub mod genai_attrs;
pub mod tracing_setup;

pub use tracing_setup::{init_tracing, shutdown_tracing};
