//! Google Gemini text-generation client.
//!
//! Implements [`ScriptWriting`](reelsmith_interface::ScriptWriting) and
//! [`FactFinding`](reelsmith_interface::FactFinding) over the
//! `generateContent` endpoint, with the response shape enforced by the
//! provider through `generationConfig.responseSchema`.

mod client;
mod wire;

pub use client::GeminiClient;

/// Result type for Gemini operations.
pub type GeminiResult<T> = Result<T, reelsmith_error::GeminiError>;
