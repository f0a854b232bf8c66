//! Generative provider clients for Reelsmith.
//!
//! This crate is the sole boundary between the application and the Google
//! Generative Language API. It provides two clients:
//! - [`GeminiClient`] — structured text generation (scripts, facts) via
//!   `generateContent` with a provider-enforced response schema
//! - [`ImagenClient`] — still-image generation via `predict`
//!
//! Each operation makes exactly one attempt: no caching, no retries.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod gemini;
mod imagen;

pub use gemini::{GeminiClient, GeminiResult};
pub use imagen::{ImagenClient, ImagenResult};

/// Base URL for the Generative Language REST API.
pub(crate) const API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
