//! Google Gemini provider implementation.
//!
//! [`GeminiProvider`] implements both generator traits from `dineai-core`
//! against the `generateContent` REST endpoint.

pub mod client;
pub mod types;

pub use client::GeminiProvider;
