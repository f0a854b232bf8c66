//! Trait definitions for generative providers and their capabilities.

use async_trait::async_trait;
use reelsmith_core::{FactsRequest, Scene, SceneImage, ScriptRequest};
use reelsmith_error::ReelsmithResult;

/// Capability trait for providers that write scene scripts.
///
/// Implementors issue exactly one provider call per invocation; no caching
/// and no retries. Callers are responsible for validating the request
/// (non-empty trimmed topic) before invoking.
#[async_trait]
pub trait ScriptWriting: Send + Sync {
    /// Generate a scene script for the request's topic.
    ///
    /// Returned scenes carry visual and voiceover text only; no images.
    async fn generate_script(&self, req: &ScriptRequest) -> ReelsmithResult<Vec<Scene>>;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;

    /// Model identifier used for script generation.
    fn model_name(&self) -> &str;
}

/// Capability trait for providers that synthesize still images.
#[async_trait]
pub trait ImageSynthesis: Send + Sync {
    /// Generate a single image for the given scene-visual prompt.
    async fn generate_image(&self, prompt: &str) -> ReelsmithResult<SceneImage>;

    /// Provider name (e.g., "imagen").
    fn provider_name(&self) -> &'static str;

    /// Model identifier used for image generation.
    fn model_name(&self) -> &str;
}

/// Capability trait for providers that find facts about a topic.
#[async_trait]
pub trait FactFinding: Send + Sync {
    /// Find facts per the request, in provider-randomized order.
    async fn find_facts(&self, req: &FactsRequest) -> ReelsmithResult<Vec<String>>;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;
}
