//! Generator trait definitions.
//!
//! These are the seams between the pipelines and a hosted model. Both use
//! native async fn in traits (RPITIT, Rust 2024 edition). Implementations
//! live in dineai-infra (e.g., `GeminiProvider`); tests supply mocks.

use std::future::Future;

use dineai_types::error::GenerationError;
use dineai_types::generation::{ImageRequest, ImageResponse, TextRequest, TextResponse};

/// A backend that turns a prompt into text.
pub trait TextGenerator: Send + Sync {
    /// Provider name for logs and spans (e.g., "gemini").
    fn name(&self) -> &str;

    /// Send one completion request. The returned text may be empty.
    fn generate_text(
        &self,
        request: &TextRequest,
    ) -> impl Future<Output = Result<TextResponse, GenerationError>> + Send;
}

/// A backend that turns a prompt into image bytes.
pub trait ImageGenerator: Send + Sync {
    /// Provider name for logs and spans.
    fn name(&self) -> &str;

    /// Send one image request. Fails with [`GenerationError::NoImage`] when
    /// the response carries no image payload.
    fn generate_image(
        &self,
        request: &ImageRequest,
    ) -> impl Future<Output = Result<ImageResponse, GenerationError>> + Send;
}
