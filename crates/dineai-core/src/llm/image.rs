//! ImageClient -- image generation that degrades to "no image".
//!
//! Successful responses are decoded to make sure the payload really is an
//! image before it reaches the caller. Every failure becomes
//! [`ImageOutcome::Unavailable`] with a reason suitable for display.

use tracing::{Instrument, debug, info_span, warn};

use dineai_types::generation::{GeneratedImage, ImageOutcome, ImageRequest, ImageResponse};

use super::provider::ImageGenerator;

pub struct ImageClient<I> {
    generator: I,
    model: String,
}

impl<I: ImageGenerator> ImageClient<I> {
    pub fn new(generator: I, model: impl Into<String>) -> Self {
        Self {
            generator,
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn generator(&self) -> &I {
        &self.generator
    }

    /// Generate an image for `prompt`. Never fails; absence is reported as
    /// [`ImageOutcome::Unavailable`].
    pub async fn generate_image(&self, prompt: &str) -> ImageOutcome {
        let request = ImageRequest {
            model: self.model.clone(),
            prompt: prompt.to_string(),
        };

        let span = info_span!(
            "gen_ai.generate_image",
            gen_ai.operation.name = "generate_image",
            gen_ai.provider.name = self.generator.name(),
            gen_ai.request.model = %request.model,
        );

        let response = match self.generator.generate_image(&request).instrument(span).await {
            Ok(response) => response,
            Err(err) => return self.unavailable(format!("Image generation failed: {err}")),
        };

        if let Some(caption) = &response.caption {
            debug!(caption = %caption, "Image returned with caption");
        }

        match decode_image(response) {
            Ok(image) => {
                debug!(
                    mime_type = %image.mime_type,
                    width = image.width,
                    height = image.height,
                    bytes = image.bytes.len(),
                    "Image generated"
                );
                ImageOutcome::Generated(image)
            }
            Err(reason) => self.unavailable(reason),
        }
    }

    fn unavailable(&self, reason: String) -> ImageOutcome {
        warn!(
            provider = self.generator.name(),
            model = %self.model,
            reason = %reason,
            "No image available"
        );
        ImageOutcome::Unavailable { reason }
    }
}

/// Decode a raw payload into a [`GeneratedImage`].
///
/// The MIME type is taken from the bytes themselves when recognizable,
/// otherwise from the provider's declaration.
pub fn decode_image(response: ImageResponse) -> Result<GeneratedImage, String> {
    if response.data.is_empty() {
        return Err("Image generation returned no image data".to_string());
    }

    let decoded = ::image::load_from_memory(&response.data)
        .map_err(|e| format!("Generated image could not be decoded: {e}"))?;

    let mime_type = ::image::guess_format(&response.data)
        .map(|format| format.to_mime_type().to_string())
        .unwrap_or(response.mime_type);

    Ok(GeneratedImage {
        mime_type,
        width: decoded.width(),
        height: decoded.height(),
        bytes: response.data,
    })
}
