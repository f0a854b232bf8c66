//! Gemini `generateContent` client.

use async_trait::async_trait;
use serde_json::Value as JsonValue;
use std::env;
use tracing::{debug, error, instrument};

use reelsmith_core::{FactsRequest, Scene, ScriptRequest};
use reelsmith_error::{GeminiError, GeminiErrorKind, ReelsmithResult};
use reelsmith_interface::{FactFinding, ScriptWriting};

use super::GeminiResult;
use super::wire::{GenerateContentRequest, GenerateContentResponse, facts_schema, script_schema};
use crate::API_BASE_URL;

/// Model used for script and fact generation.
const DEFAULT_TEXT_MODEL: &str = "gemini-2.5-flash";

/// Client for the Gemini text-generation API.
///
/// Sends structured-output requests: the desired JSON shape is enforced by
/// the provider through `responseSchema`, and the returned JSON text is
/// deserialized into typed payloads. One attempt per call.
///
/// # Example
///
/// ```no_run
/// use reelsmith_models::GeminiClient;
/// use reelsmith_core::ScriptRequest;
/// use reelsmith_interface::ScriptWriting;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = GeminiClient::new()?;
/// let scenes = client
///     .generate_script(&ScriptRequest::new("The Great Emu War"))
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
}

impl GeminiClient {
    /// Create a client reading the API key from `GEMINI_API_KEY`.
    #[instrument(name = "gemini_client_new")]
    pub fn new() -> ReelsmithResult<Self> {
        Self::new_with_model(DEFAULT_TEXT_MODEL)
    }

    /// Create a client reading the API key from `GEMINI_API_KEY`, using
    /// the given model instead of the default.
    pub fn new_with_model(model: impl Into<String>) -> ReelsmithResult<Self> {
        let api_key = env::var("GEMINI_API_KEY")
            .map_err(|_| GeminiError::new(GeminiErrorKind::MissingApiKey))?;
        Ok(Self::with_model(api_key, model))
    }

    /// Create a client with an explicit API key and the default model.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self::with_model(api_key, DEFAULT_TEXT_MODEL)
    }

    /// Create a client with an explicit API key and model.
    pub fn with_model(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    /// Prompt for the script workflow.
    fn script_prompt(topic: &str) -> String {
        format!(
            "You are a creative scriptwriter specializing in short, engaging content for \
             social media. Generate a script for a 15-30 second Instagram Reel about '{topic}'. \
             The script should be fun, fascinating, and easy to follow. Structure it as a JSON \
             object with a \"scenes\" array. Each scene object in the array should have two \
             keys: \"visual\" (a concise string describing the visual footage, suitable as a \
             prompt for an image generation AI) and \"voiceover\" (a string for the spoken \
             lines)."
        )
    }

    /// Prompt for the fact-finding workflow.
    fn facts_prompt(topic: &str, num_facts: u8, language: &str) -> String {
        format!(
            "Find {num_facts} surprising and little-known facts about '{topic}'. The facts \
             must be in {language}. Present the facts in a randomized order."
        )
    }

    /// Send one structured-output request and return the candidate JSON text.
    #[instrument(skip(self, prompt, schema), fields(model = %self.model))]
    async fn generate_structured(&self, prompt: String, schema: JsonValue) -> GeminiResult<String> {
        let url = format!("{API_BASE_URL}/models/{}:generateContent", self.model);
        let body = GenerateContentRequest::structured(prompt, schema);

        debug!("Sending generateContent request");
        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to send generateContent request");
                GeminiError::new(GeminiErrorKind::ApiRequest(e.to_string()))
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            error!(status = %status, "Gemini API returned error");
            return Err(GeminiError::new(GeminiErrorKind::HttpStatus {
                status_code: status.as_u16(),
                message,
            }));
        }

        let payload: GenerateContentResponse = response.json().await.map_err(|e| {
            error!(error = %e, "Failed to parse generateContent response");
            GeminiError::new(GeminiErrorKind::ResponseParse(e.to_string()))
        })?;

        payload
            .first_text()
            .map(str::to_owned)
            .ok_or_else(|| GeminiError::new(GeminiErrorKind::EmptyResponse))
    }

    /// Parse the structured script payload, requiring the `scenes` array.
    fn parse_script_payload(text: &str) -> GeminiResult<Vec<Scene>> {
        let parsed: JsonValue = serde_json::from_str(text)
            .map_err(|e| GeminiError::new(GeminiErrorKind::ResponseParse(e.to_string())))?;

        let scenes = match parsed.get("scenes") {
            Some(value) if value.is_array() => value.clone(),
            _ => return Err(GeminiError::new(GeminiErrorKind::MissingField("scenes".into()))),
        };

        serde_json::from_value(scenes)
            .map_err(|e| GeminiError::new(GeminiErrorKind::ResponseParse(e.to_string())))
    }

    /// Parse the structured facts payload, requiring the `facts` array.
    fn parse_facts_payload(text: &str) -> GeminiResult<Vec<String>> {
        let parsed: JsonValue = serde_json::from_str(text)
            .map_err(|e| GeminiError::new(GeminiErrorKind::ResponseParse(e.to_string())))?;

        let facts = match parsed.get("facts") {
            Some(value) if value.is_array() => value.clone(),
            _ => return Err(GeminiError::new(GeminiErrorKind::MissingField("facts".into()))),
        };

        serde_json::from_value(facts)
            .map_err(|e| GeminiError::new(GeminiErrorKind::ResponseParse(e.to_string())))
    }
}

#[async_trait]
impl ScriptWriting for GeminiClient {
    async fn generate_script(&self, req: &ScriptRequest) -> ReelsmithResult<Vec<Scene>> {
        let prompt = Self::script_prompt(req.trimmed_topic());
        let text = self.generate_structured(prompt, script_schema()).await?;
        let scenes = Self::parse_script_payload(&text)?;
        debug!(scenes = scenes.len(), "Generated script");
        Ok(scenes)
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl FactFinding for GeminiClient {
    async fn find_facts(&self, req: &FactsRequest) -> ReelsmithResult<Vec<String>> {
        let prompt = Self::facts_prompt(req.trimmed_topic(), *req.num_facts(), req.language());
        let schema = facts_schema(req.trimmed_topic(), req.language());
        let text = self.generate_structured(prompt, schema).await?;
        let facts = Self::parse_facts_payload(&text)?;
        debug!(facts = facts.len(), "Found facts");
        Ok(facts)
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_payload_parses_scene_array() {
        let text = r#"{"scenes":[
            {"visual":"emus marching","voiceover":"In 1932, Australia went to war."},
            {"visual":"soldiers with guns","voiceover":"Against birds."}
        ]}"#;
        let scenes = GeminiClient::parse_script_payload(text).unwrap();
        assert_eq!(scenes.len(), 2);
        assert_eq!(scenes[0].visual, "emus marching");
        assert!(scenes[0].image_url.is_none());
    }

    #[test]
    fn script_payload_missing_scenes_field() {
        let err = GeminiClient::parse_script_payload(r#"{"acts":[]}"#).unwrap_err();
        assert_eq!(err.kind, GeminiErrorKind::MissingField("scenes".into()));
        assert!(format!("{err}").contains("'scenes' field not found"));
    }

    #[test]
    fn script_payload_rejects_non_array_scenes() {
        let err = GeminiClient::parse_script_payload(r#"{"scenes":"nope"}"#).unwrap_err();
        assert_eq!(err.kind, GeminiErrorKind::MissingField("scenes".into()));
    }

    #[test]
    fn facts_payload_preserves_order() {
        let text = r#"{"facts":["third","first","second"]}"#;
        let facts = GeminiClient::parse_facts_payload(text).unwrap();
        assert_eq!(facts, vec!["third", "first", "second"]);
    }

    #[test]
    fn facts_payload_missing_field() {
        let err = GeminiClient::parse_facts_payload("{}").unwrap_err();
        assert_eq!(err.kind, GeminiErrorKind::MissingField("facts".into()));
    }

    #[test]
    fn prompts_embed_request_parameters() {
        let prompt = GeminiClient::script_prompt("The Great Emu War");
        assert!(prompt.contains("'The Great Emu War'"));
        assert!(prompt.contains("\"scenes\" array"));

        let prompt = GeminiClient::facts_prompt("The Ocean", 5, "English");
        assert!(prompt.contains("5 surprising"));
        assert!(prompt.contains("'The Ocean'"));
        assert!(prompt.contains("in English"));
        assert!(prompt.contains("randomized order"));
    }
}
