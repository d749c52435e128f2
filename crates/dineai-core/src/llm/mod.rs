//! Generative-AI abstractions.
//!
//! - `TextGenerator` / `ImageGenerator`: RPITIT traits for concrete providers
//! - `CompletionClient`: total text completion with fallback translation
//! - `ImageClient`: image generation that degrades to "no image"

pub mod completion;
pub mod image;
pub mod provider;

pub use completion::CompletionClient;
pub use image::ImageClient;
pub use provider::{ImageGenerator, TextGenerator};
