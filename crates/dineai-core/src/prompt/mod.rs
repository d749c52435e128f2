//! Prompt construction: template parsing, the built-in template library,
//! and the `PromptBuilder` registry.

pub mod builder;
pub mod library;
pub mod template;

pub use builder::PromptBuilder;
pub use template::PromptTemplate;
