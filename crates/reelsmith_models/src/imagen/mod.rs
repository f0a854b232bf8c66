//! Google Imagen image-generation client.
//!
//! Implements [`ImageSynthesis`](reelsmith_interface::ImageSynthesis) over
//! the `predict` endpoint, requesting a single 9:16 PNG per call.

mod client;
mod wire;

pub use client::ImagenClient;

/// Result type for Imagen operations.
pub type ImagenResult<T> = Result<T, reelsmith_error::ImagenError>;
