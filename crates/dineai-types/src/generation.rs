//! Generative-AI request/response types.
//!
//! Provider-agnostic shapes for text and image generation calls, plus the
//! downgraded results ([`CompletionText`], [`ImageOutcome`]) that the
//! clients hand back to pipelines after translating failures.

use serde::{Deserialize, Serialize};

use crate::error::GenerationError;

/// Sampling parameters sent with every text generation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    pub temperature: f64,
    pub top_p: f64,
    pub top_k: u32,
    pub max_output_tokens: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: 1.0,
            top_p: 0.95,
            top_k: 64,
            max_output_tokens: 8192,
        }
    }
}

/// Request for a text completion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextRequest {
    pub model: String,
    pub prompt: String,
    pub config: GenerationConfig,
}

/// Token usage reported by the provider, when available.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

/// Raw text completion as returned by a provider. `text` may be empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextResponse {
    pub text: String,
    pub model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<Usage>,
}

/// Request for an image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageRequest {
    pub model: String,
    pub prompt: String,
}

/// Raw image payload as returned by a provider (already base64-decoded).
#[derive(Debug, Clone)]
pub struct ImageResponse {
    pub mime_type: String,
    pub data: Vec<u8>,
    /// Any text the provider returned alongside the image.
    pub caption: Option<String>,
}

/// An image whose bytes were successfully decoded.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedImage {
    pub mime_type: String,
    pub bytes: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl GeneratedImage {
    /// File extension matching the MIME type.
    pub fn extension(&self) -> &'static str {
        match self.mime_type.as_str() {
            "image/jpeg" | "image/jpg" => "jpg",
            "image/webp" => "webp",
            "image/gif" => "gif",
            _ => "png",
        }
    }
}

/// Text handed back by the completion client.
///
/// Always non-empty. When `failure` is set, `text` is the fallback message
/// (possibly with the error detail prepended) rather than model output.
#[derive(Debug, Clone)]
pub struct CompletionText {
    pub text: String,
    pub failure: Option<GenerationError>,
}

impl CompletionText {
    pub fn generated(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            failure: None,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.failure.is_some()
    }
}

/// Result of an image generation attempt.
#[derive(Debug, Clone)]
pub enum ImageOutcome {
    Generated(GeneratedImage),
    Unavailable { reason: String },
}

impl ImageOutcome {
    pub fn image(&self) -> Option<&GeneratedImage> {
        match self {
            ImageOutcome::Generated(image) => Some(image),
            ImageOutcome::Unavailable { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_config_defaults() {
        let config = GenerationConfig::default();
        assert!((config.temperature - 1.0).abs() < f64::EPSILON);
        assert!((config.top_p - 0.95).abs() < f64::EPSILON);
        assert_eq!(config.top_k, 64);
        assert_eq!(config.max_output_tokens, 8192);
    }

    #[test]
    fn test_image_extension() {
        let mut image = GeneratedImage {
            mime_type: "image/jpeg".to_string(),
            bytes: Vec::new(),
            width: 1,
            height: 1,
        };
        assert_eq!(image.extension(), "jpg");
        image.mime_type = "image/png".to_string();
        assert_eq!(image.extension(), "png");
    }

    #[test]
    fn test_image_outcome_accessors() {
        let outcome = ImageOutcome::Unavailable {
            reason: "no image".to_string(),
        };
        assert!(outcome.image().is_none());
    }

    #[test]
    fn test_completion_text_generated_is_not_fallback() {
        let text = CompletionText::generated("Menu ideas");
        assert!(!text.is_fallback());
        assert_eq!(text.text, "Menu ideas");
    }
}
