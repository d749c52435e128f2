//! CompletionClient -- text completion that never fails.
//!
//! Wraps a [`TextGenerator`] and translates every failure (transport error,
//! classified provider error, blank response) into the fallback message.
//! The translation is recorded on the returned [`CompletionText`] so callers
//! and tests can tell genuine output from a fallback.

use tracing::{Instrument, debug, info_span, warn};

use dineai_types::config::{CompletionConfig, DEFAULT_FALLBACK_MESSAGE, ModelConfig};
use dineai_types::error::GenerationError;
use dineai_types::generation::{CompletionText, GenerationConfig, TextRequest};

use super::provider::TextGenerator;

/// Total text completion over a [`TextGenerator`].
pub struct CompletionClient<T> {
    generator: T,
    model: String,
    generation: GenerationConfig,
    fallback_message: String,
    include_error_detail: bool,
}

impl<T: TextGenerator> CompletionClient<T> {
    /// Create a client with default sampling and the default fallback message.
    pub fn new(generator: T, model: impl Into<String>) -> Self {
        Self {
            generator,
            model: model.into(),
            generation: GenerationConfig::default(),
            fallback_message: DEFAULT_FALLBACK_MESSAGE.to_string(),
            include_error_detail: false,
        }
    }

    /// Create a client from the `[model]` and `[completion]` config sections.
    pub fn from_config(generator: T, model: &ModelConfig, completion: &CompletionConfig) -> Self {
        Self::new(generator, model.text_model.clone())
            .with_generation_config(model.generation())
            .with_fallback_message(completion.fallback_message.clone())
            .with_error_detail(completion.include_error_detail)
    }

    pub fn with_generation_config(mut self, generation: GenerationConfig) -> Self {
        self.generation = generation;
        self
    }

    /// Override the fallback message. A blank message keeps the default.
    pub fn with_fallback_message(mut self, message: impl Into<String>) -> Self {
        let message = message.into();
        if !message.trim().is_empty() {
            self.fallback_message = message;
        }
        self
    }

    /// Prefix fallback text with the captured error (`"AI Error: ..."`).
    pub fn with_error_detail(mut self, include: bool) -> Self {
        self.include_error_detail = include;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn generator(&self) -> &T {
        &self.generator
    }

    pub fn fallback_message(&self) -> &str {
        &self.fallback_message
    }

    /// Complete `prompt`. Always returns non-empty text.
    pub async fn complete(&self, prompt: &str) -> CompletionText {
        let request = TextRequest {
            model: self.model.clone(),
            prompt: prompt.to_string(),
            config: self.generation.clone(),
        };

        let span = info_span!(
            "gen_ai.generate_content",
            gen_ai.operation.name = "generate_content",
            gen_ai.provider.name = self.generator.name(),
            gen_ai.request.model = %request.model,
            gen_ai.request.max_tokens = request.config.max_output_tokens,
            gen_ai.request.temperature = request.config.temperature,
            gen_ai.usage.input_tokens = tracing::field::Empty,
            gen_ai.usage.output_tokens = tracing::field::Empty,
        );

        match self
            .generator
            .generate_text(&request)
            .instrument(span.clone())
            .await
        {
            Ok(response) => {
                let text = response.text.trim();
                if text.is_empty() {
                    self.fallback(GenerationError::EmptyResponse)
                } else {
                    if let Some(usage) = &response.usage {
                        span.record("gen_ai.usage.input_tokens", usage.input_tokens);
                        span.record("gen_ai.usage.output_tokens", usage.output_tokens);
                        debug!(
                            input_tokens = usage.input_tokens,
                            output_tokens = usage.output_tokens,
                            finish_reason = ?response.finish_reason,
                            "Completion received"
                        );
                    }
                    CompletionText::generated(text)
                }
            }
            Err(err) => self.fallback(err),
        }
    }

    fn fallback(&self, error: GenerationError) -> CompletionText {
        warn!(
            provider = self.generator.name(),
            model = %self.model,
            error = %error,
            "Text generation failed, using fallback message"
        );

        let text = if self.include_error_detail {
            format!("AI Error: {error}\n{}", self.fallback_message)
        } else {
            self.fallback_message.clone()
        };

        CompletionText {
            text,
            failure: Some(error),
        }
    }
}
