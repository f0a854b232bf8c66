//! Workflow state types.

use reelsmith_core::Scene;

/// State of the script workflow.
///
/// Success path: `Idle → Loading → Drafted → Ready`. Failure path:
/// `Loading → Failed` or `Drafted → Failed`. `Ready` and `Failed` are
/// terminal until a new submission resets to `Loading`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ScriptState {
    /// No submission yet, or state was reset
    #[default]
    Idle,
    /// Script text is being generated
    Loading,
    /// Scene text is available; images are still being generated
    Drafted(Vec<Scene>),
    /// All scenes carry images; terminal success
    Ready(Vec<Scene>),
    /// Terminal failure with a user-facing message
    Failed(String),
}

impl ScriptState {
    /// Whether a submission is in flight.
    ///
    /// True for `Loading` and `Drafted`; the presentation layer disables
    /// the submit control while this holds.
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading | Self::Drafted(_))
    }

    /// Scenes to render, if any.
    pub fn scenes(&self) -> Option<&[Scene]> {
        match self {
            Self::Drafted(scenes) | Self::Ready(scenes) => Some(scenes),
            _ => None,
        }
    }

    /// Error message, if the workflow failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// State of the facts workflow: `Idle → Loading → Ready | Failed`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FactsState {
    /// No submission yet, or state was reset
    #[default]
    Idle,
    /// Facts are being generated
    Loading,
    /// Terminal success with the ordered fact list
    Ready(Vec<String>),
    /// Terminal failure with a user-facing message
    Failed(String),
}

impl FactsState {
    /// Whether a submission is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Facts to render, if any.
    pub fn facts(&self) -> Option<&[String]> {
        match self {
            Self::Ready(facts) => Some(facts),
            _ => None,
        }
    }

    /// Error message, if the workflow failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}
