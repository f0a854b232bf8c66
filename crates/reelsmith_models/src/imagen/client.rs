//! Imagen `predict` client.

use async_trait::async_trait;
use base64::Engine;
use std::env;
use tracing::{debug, error, instrument};

use reelsmith_core::SceneImage;
use reelsmith_error::{ImagenError, ImagenErrorKind, ReelsmithResult};
use reelsmith_interface::ImageSynthesis;

use super::ImagenResult;
use super::wire::{PredictRequest, PredictResponse};
use crate::API_BASE_URL;

/// Model used for scene-image generation.
const DEFAULT_IMAGE_MODEL: &str = "imagen-4.0-generate-001";

/// Stylistic prefix applied to every scene-visual prompt.
const STYLE_PREFIX: &str = "cinematic stock photo, high quality, ";

/// Client for the Imagen image-generation API.
///
/// Each call requests exactly one 9:16 PNG; the base64 payload is validated
/// and returned as a [`SceneImage`]. One attempt per call.
#[derive(Debug, Clone)]
pub struct ImagenClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
}

impl ImagenClient {
    /// Create a client reading the API key from `GEMINI_API_KEY`.
    #[instrument(name = "imagen_client_new")]
    pub fn new() -> ReelsmithResult<Self> {
        Self::new_with_model(DEFAULT_IMAGE_MODEL)
    }

    /// Create a client reading the API key from `GEMINI_API_KEY`, using
    /// the given model instead of the default.
    pub fn new_with_model(model: impl Into<String>) -> ReelsmithResult<Self> {
        let api_key = env::var("GEMINI_API_KEY").map_err(|_| {
            ImagenError::new(ImagenErrorKind::ApiRequest(
                "GEMINI_API_KEY environment variable not set".to_string(),
            ))
        })?;
        Ok(Self::with_model(api_key, model))
    }

    /// Create a client with an explicit API key and the default model.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self::with_model(api_key, DEFAULT_IMAGE_MODEL)
    }

    /// Create a client with an explicit API key and model.
    pub fn with_model(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    /// Prompt sent to the provider for a scene visual.
    fn styled_prompt(prompt: &str) -> String {
        format!("{STYLE_PREFIX}{prompt}")
    }

    #[instrument(skip(self, prompt), fields(model = %self.model))]
    async fn generate_internal(&self, prompt: &str) -> ImagenResult<SceneImage> {
        let url = format!("{API_BASE_URL}/models/{}:predict", self.model);
        let body = PredictRequest::single_portrait_png(Self::styled_prompt(prompt));

        debug!("Sending predict request");
        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to send predict request");
                ImagenError::new(ImagenErrorKind::ApiRequest(e.to_string()))
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            error!(status = %status, "Imagen API returned error");
            return Err(ImagenError::new(ImagenErrorKind::HttpStatus {
                status_code: status.as_u16(),
                message,
            }));
        }

        let payload: PredictResponse = response.json().await.map_err(|e| {
            error!(error = %e, "Failed to parse predict response");
            ImagenError::new(ImagenErrorKind::ResponseParse(e.to_string()))
        })?;

        let prediction = payload
            .predictions
            .into_iter()
            .next()
            .ok_or_else(|| ImagenError::new(ImagenErrorKind::NoImages))?;

        base64::engine::general_purpose::STANDARD
            .decode(&prediction.bytes_base64_encoded)
            .map_err(|e| ImagenError::new(ImagenErrorKind::ResponseParse(e.to_string())))?;

        let mime = prediction
            .mime_type
            .unwrap_or_else(|| "image/png".to_string());
        Ok(SceneImage::new(mime, prediction.bytes_base64_encoded))
    }
}

#[async_trait]
impl ImageSynthesis for ImagenClient {
    async fn generate_image(&self, prompt: &str) -> ReelsmithResult<SceneImage> {
        let image = self.generate_internal(prompt).await?;
        debug!("Generated scene image");
        Ok(image)
    }

    fn provider_name(&self) -> &'static str {
        "imagen"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
