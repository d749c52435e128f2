//! GeminiProvider -- [`TextGenerator`] and [`ImageGenerator`] over the
//! Generative Language REST API.
//!
//! Both operations post to `/v1beta/models/{model}:generateContent`; image
//! requests additionally ask for the IMAGE response modality and read the
//! first `inlineData` part.
//!
//! The API key is wrapped in [`secrecy::SecretString`] and is only exposed
//! when setting the request header.

use std::time::Duration;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use secrecy::{ExposeSecret, SecretString};

use dineai_core::llm::{ImageGenerator, TextGenerator};
use dineai_types::config::ModelConfig;
use dineai_types::error::{ConfigError, GenerationError};
use dineai_types::generation::{ImageRequest, ImageResponse, TextRequest, TextResponse, Usage};

use super::types::{
    GeminiErrorEnvelope, GeminiGenerationConfig, GenerateContentRequest, GenerateContentResponse,
};

/// Public Gemini endpoint.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Gemini provider.
///
/// Cloning is cheap: the underlying `reqwest::Client` is reference counted,
/// so one provider can back both the completion and the image client.
#[derive(Clone)]
pub struct GeminiProvider {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
}

// No Debug: the struct holds the API key.

impl GeminiProvider {
    /// Create a provider with the given request timeout.
    pub fn new(api_key: SecretString, timeout: Duration) -> Result<Self, ConfigError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ConfigError::InvalidConfig(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Create a provider from the `[model]` config section.
    pub fn from_config(api_key: SecretString, config: &ModelConfig) -> Result<Self, ConfigError> {
        let provider = Self::new(api_key, Duration::from_secs(config.timeout_secs))?;
        Ok(match &config.base_url {
            Some(base_url) => provider.with_base_url(base_url.clone()),
            None => provider,
        })
    }

    /// Override the base URL (proxies, tests).
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, model: &str) -> String {
        format!("{}/v1beta/models/{model}:generateContent", self.base_url)
    }

    async fn generate_content(
        &self,
        model: &str,
        body: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GenerationError> {
        let response = self
            .client
            .post(self.url(model))
            .header("x-goog-api-key", self.api_key.expose_secret())
            .header("content-type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| GenerationError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(classify_status(status.as_u16(), &error_body));
        }

        response
            .json::<GenerateContentResponse>()
            .await
            .map_err(|e| GenerationError::Deserialization(format!("failed to parse response: {e}")))
    }
}

impl TextGenerator for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn generate_text(&self, request: &TextRequest) -> Result<TextResponse, GenerationError> {
        let config = GeminiGenerationConfig {
            temperature: Some(request.config.temperature),
            top_p: Some(request.config.top_p),
            top_k: Some(request.config.top_k),
            max_output_tokens: Some(request.config.max_output_tokens),
            response_modalities: None,
        };
        let body = GenerateContentRequest::user_prompt(&request.prompt, Some(config));

        let response = self.generate_content(&request.model, &body).await?;
        text_from_response(response, &request.model)
    }
}

impl ImageGenerator for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn generate_image(&self, request: &ImageRequest) -> Result<ImageResponse, GenerationError> {
        let config = GeminiGenerationConfig {
            response_modalities: Some(vec!["TEXT".to_string(), "IMAGE".to_string()]),
            ..Default::default()
        };
        let body = GenerateContentRequest::user_prompt(&request.prompt, Some(config));

        let response = self.generate_content(&request.model, &body).await?;
        image_from_response(response)
    }
}

/// Map a non-success HTTP status to a [`GenerationError`].
pub(crate) fn classify_status(status: u16, body: &str) -> GenerationError {
    let message = serde_json::from_str::<GeminiErrorEnvelope>(body)
        .map(|env| env.error.message)
        .unwrap_or_else(|_| body.to_string());

    match status {
        400 => GenerationError::InvalidRequest(message),
        401 | 403 => GenerationError::AuthenticationFailed,
        429 => GenerationError::RateLimited,
        500..=599 => GenerationError::Unavailable(format!("HTTP {status}: {message}")),
        _ => GenerationError::Provider(format!("HTTP {status}: {message}")),
    }
}

pub(crate) fn text_from_response(
    response: GenerateContentResponse,
    requested_model: &str,
) -> Result<TextResponse, GenerationError> {
    if let Some(reason) = response.block_reason() {
        return Err(GenerationError::Blocked(reason.to_string()));
    }

    let text = response.joined_text();
    if text.trim().is_empty() {
        return Err(match response.first_finish_reason() {
            Some(reason @ ("SAFETY" | "PROHIBITED_CONTENT" | "BLOCKLIST" | "SPII")) => {
                GenerationError::Blocked(reason.to_string())
            }
            _ => GenerationError::EmptyResponse,
        });
    }

    Ok(TextResponse {
        text,
        model: response
            .model_version
            .clone()
            .unwrap_or_else(|| requested_model.to_string()),
        finish_reason: response.first_finish_reason().map(str::to_string),
        usage: response.usage_metadata.as_ref().map(|u| Usage {
            input_tokens: u.prompt_token_count,
            output_tokens: u.candidates_token_count,
        }),
    })
}

pub(crate) fn image_from_response(
    response: GenerateContentResponse,
) -> Result<ImageResponse, GenerationError> {
    if let Some(reason) = response.block_reason() {
        return Err(GenerationError::Blocked(reason.to_string()));
    }

    let inline = response
        .first_parts()
        .iter()
        .find_map(|p| p.inline_data.as_ref())
        .ok_or(GenerationError::NoImage)?;

    let data = STANDARD
        .decode(inline.data.as_bytes())
        .map_err(|e| GenerationError::Deserialization(format!("invalid image data: {e}")))?;

    let caption = response.joined_text();

    Ok(ImageResponse {
        mime_type: inline.mime_type.clone(),
        data,
        caption: (!caption.trim().is_empty()).then_some(caption),
    })
}
