//! Wire types for the `generateContent` endpoint.

use serde::{Deserialize, Serialize};
use serde_json::{Value as JsonValue, json};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
pub(super) struct Content {
    pub parts: Vec<TextPart>,
}

#[derive(Debug, Serialize)]
pub(super) struct TextPart {
    pub text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct GenerationConfig {
    pub response_mime_type: String,
    pub response_schema: JsonValue,
}

impl GenerateContentRequest {
    /// Build a single-turn request asking for JSON constrained by `schema`.
    pub fn structured(prompt: impl Into<String>, schema: JsonValue) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![TextPart {
                    text: prompt.into(),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: schema,
            },
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct Candidate {
    #[serde(default)]
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub(super) struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
pub(super) struct CandidatePart {
    #[serde(default)]
    pub text: Option<String>,
}

impl GenerateContentResponse {
    /// Text of the first candidate part, if the response carried any.
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .and_then(|content| content.parts.iter().find_map(|p| p.text.as_deref()))
    }
}

/// Response schema requiring `{ scenes: [{ visual, voiceover }] }`.
pub(super) fn script_schema() -> JsonValue {
    json!({
        "type": "OBJECT",
        "properties": {
            "scenes": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "visual": {
                            "type": "STRING",
                            "description": "A concise description of the visual content for the scene, suitable for an image generation AI."
                        },
                        "voiceover": {
                            "type": "STRING",
                            "description": "The voiceover text for the scene."
                        }
                    },
                    "required": ["visual", "voiceover"]
                }
            }
        },
        "required": ["scenes"]
    })
}

/// Response schema requiring `{ facts: [string] }`.
pub(super) fn facts_schema(topic: &str, language: &str) -> JsonValue {
    json!({
        "type": "OBJECT",
        "properties": {
            "facts": {
                "type": "ARRAY",
                "items": {
                    "type": "STRING",
                    "description": format!("A single surprising fact about {topic} in {language}.")
                }
            }
        },
        "required": ["facts"]
    })
}
