//! Infrastructure layer for dineai.
//!
//! Implements the ports defined in `dineai-core`: the Gemini HTTP provider
//! for text and image generation and the SQLite record store. Also loads
//! configuration, resolves the API key, and locates the data directory.

pub mod config;
pub mod filesystem;
pub mod llm;
pub mod secret;
pub mod sqlite;
