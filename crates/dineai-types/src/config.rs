//! Application configuration types.
//!
//! `AppConfig` represents `config.toml` in the data directory. Every field
//! has a default, so an empty or partial file is valid.

use serde::{Deserialize, Serialize};

use crate::generation::GenerationConfig;

/// Text shown when the text-generation service produces no usable answer.
pub const DEFAULT_FALLBACK_MESSAGE: &str = "AI response unavailable. Please try again later.";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub completion: CompletionConfig,
    #[serde(default)]
    pub store: StoreConfig,
}

/// Which models to call and how.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    #[serde(default = "default_text_model")]
    pub text_model: String,
    #[serde(default = "default_image_model")]
    pub image_model: String,
    /// Override the Gemini API base URL (useful for proxies and tests).
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    #[serde(default = "default_top_p")]
    pub top_p: f64,
    #[serde(default = "default_top_k")]
    pub top_k: u32,
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl ModelConfig {
    /// Sampling parameters for text requests.
    pub fn generation(&self) -> GenerationConfig {
        GenerationConfig {
            temperature: self.temperature,
            top_p: self.top_p,
            top_k: self.top_k,
            max_output_tokens: self.max_output_tokens,
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            text_model: default_text_model(),
            image_model: default_image_model(),
            base_url: None,
            temperature: default_temperature(),
            top_p: default_top_p(),
            top_k: default_top_k(),
            max_output_tokens: default_max_output_tokens(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// How completion failures are rendered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionConfig {
    #[serde(default = "default_fallback_message")]
    pub fallback_message: String,
    /// Prefix the fallback text with the captured error.
    #[serde(default)]
    pub include_error_detail: bool,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            fallback_message: default_fallback_message(),
            include_error_detail: false,
        }
    }
}

/// Where records are appended.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    /// SQLite URL; defaults to `dineai.db` inside the data directory.
    #[serde(default)]
    pub database_url: Option<String>,
}

fn default_text_model() -> String {
    "gemini-1.5-pro".to_string()
}

fn default_image_model() -> String {
    "gemini-2.0-flash-preview-image-generation".to_string()
}

fn default_temperature() -> f64 {
    1.0
}

fn default_top_p() -> f64 {
    0.95
}

fn default_top_k() -> u32 {
    64
}

fn default_max_output_tokens() -> u32 {
    8192
}

fn default_timeout_secs() -> u64 {
    300
}

fn default_fallback_message() -> String {
    DEFAULT_FALLBACK_MESSAGE.to_string()
}
