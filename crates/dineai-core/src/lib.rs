//! Business logic and port definitions for dineai.
//!
//! This crate defines the traits the infrastructure layer implements
//! (text/image generators, the record store) and the logic built on top of
//! them: prompt templates, the fallback-translating AI clients, and the
//! generic feature pipeline. It depends only on `dineai-types` -- never on
//! `dineai-infra` or any HTTP/database crate.

pub mod feature;
pub mod llm;
pub mod prompt;
pub mod repository;
