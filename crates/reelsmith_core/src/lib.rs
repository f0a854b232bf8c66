//! Core data types for the Reelsmith content assistant.
//!
//! This crate provides the foundation data types used across all Reelsmith
//! interfaces: scenes, scene images, and workflow request parameters.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod language;
mod request;
mod scene;

pub use language::{DEFAULT_LANGUAGE, LANGUAGES};
pub use request::{
    FactsRequest, FactsRequestBuilder, MAX_FACTS, MIN_FACTS, ScriptRequest, ScriptRequestBuilder,
};
pub use scene::{Scene, SceneImage};
