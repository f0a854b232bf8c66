//! Reelsmith: a terminal content-creation assistant.
//!
//! Two workflows over the Google Generative Language API:
//! - **Script**: a short reel script with a voiceover line and an
//!   AI-generated image per scene
//! - **Facts**: a list of surprising facts about a topic, in a chosen
//!   language
//!
//! This crate is the facade: it re-exports the workspace surface and hosts
//! the `reelsmith` binary.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod settings;

pub use reelsmith_core::{
    DEFAULT_LANGUAGE, FactsRequest, LANGUAGES, MAX_FACTS, MIN_FACTS, Scene, SceneImage,
    ScriptRequest,
};
pub use reelsmith_error::{
    ConfigError, GeminiError, GeminiErrorKind, HttpError, ImagenError, ImagenErrorKind, JsonError,
    ReelsmithError, ReelsmithErrorKind, ReelsmithResult, WorkflowError, WorkflowErrorKind,
};
pub use reelsmith_interface::{FactFinding, ImageSynthesis, ScriptWriting};
pub use reelsmith_models::{GeminiClient, ImagenClient};
pub use reelsmith_workflow::{FactsState, FactsWorkflow, ScriptState, ScriptWorkflow};
pub use settings::{ModelSettings, Settings};
