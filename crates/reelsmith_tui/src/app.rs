//! Application state and core TUI types.

use std::path::PathBuf;

use reelsmith_core::{LANGUAGES, MAX_FACTS, MIN_FACTS};
use reelsmith_workflow::{FactsState, ScriptState};
use tracing::warn;

use crate::{Preferences, Theme};

/// Which workflow the UI currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Feature {
    /// Script generation with scene images
    #[default]
    Script,
    /// Fact finding
    Facts,
}

impl Feature {
    /// The other feature.
    pub fn toggled(self) -> Self {
        match self {
            Self::Script => Self::Facts,
            Self::Facts => Self::Script,
        }
    }

    /// Label shown in the feature toggle.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Script => "Script for Historical Facts",
            Self::Facts => "Hidden Fact Finder",
        }
    }
}

/// Focused field of the facts form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FactsField {
    /// Topic text input
    #[default]
    Topic,
    /// Fact count input
    Count,
    /// Language selector
    Language,
}

impl FactsField {
    /// Next field down the form.
    pub fn next(self) -> Self {
        match self {
            Self::Topic => Self::Count,
            Self::Count => Self::Language,
            Self::Language => Self::Topic,
        }
    }

    /// Previous field up the form.
    pub fn previous(self) -> Self {
        match self {
            Self::Topic => Self::Language,
            Self::Count => Self::Topic,
            Self::Language => Self::Count,
        }
    }
}

/// Main application state.
///
/// Holds the explicit UI state (active feature, theme, form buffers) and
/// the latest observed workflow states. All generation happens on the
/// workflow controllers; this struct only carries what gets rendered.
pub struct App {
    /// Active feature
    pub feature: Feature,
    /// Current color theme
    pub theme: Theme,
    /// Where the theme preference is persisted, when available
    preference_path: Option<PathBuf>,
    /// Topic buffer for the script form
    pub script_topic: String,
    /// Topic buffer for the facts form
    pub facts_topic: String,
    /// Fact count buffer (kept as text while editing)
    pub facts_count: String,
    /// Index into [`LANGUAGES`] for the facts form
    pub language_index: usize,
    /// Focused facts-form field
    pub facts_focus: FactsField,
    /// Latest observed script workflow state
    pub script_state: ScriptState,
    /// Latest observed facts workflow state
    pub facts_state: FactsState,
    /// Status message to display
    pub status_message: String,
    /// Whether to quit the application
    pub should_quit: bool,
}

impl App {
    /// Create the app, loading the persisted theme preference.
    pub fn new() -> Self {
        let preference_path = Preferences::default_path();
        let theme = preference_path
            .as_deref()
            .map(Preferences::load)
            .unwrap_or_default()
            .theme;
        Self::with_theme(theme, preference_path)
    }

    /// Create the app with an explicit theme and persistence location.
    pub fn with_theme(theme: Theme, preference_path: Option<PathBuf>) -> Self {
        Self {
            feature: Feature::default(),
            theme,
            preference_path,
            script_topic: String::new(),
            facts_topic: String::new(),
            facts_count: "5".to_string(),
            language_index: 0,
            facts_focus: FactsField::default(),
            script_state: ScriptState::Idle,
            facts_state: FactsState::Idle,
            status_message: String::new(),
            should_quit: false,
        }
    }

    /// Switch between the script and facts features.
    pub fn toggle_feature(&mut self) {
        self.feature = self.feature.toggled();
        self.status_message.clear();
    }

    /// Flip the theme and persist the preference in the same step.
    ///
    /// This is the only place the theme changes.
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        if let Some(path) = &self.preference_path {
            let prefs = Preferences { theme: self.theme };
            if let Err(e) = prefs.store(path) {
                warn!(error = %e, "Failed to persist theme preference");
                self.status_message = "Could not save theme preference".to_string();
            }
        }
    }

    /// Request application exit.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Whether the active feature has a submission in flight.
    pub fn is_loading(&self) -> bool {
        match self.feature {
            Feature::Script => self.script_state.is_loading(),
            Feature::Facts => self.facts_state.is_loading(),
        }
    }

    /// Currently selected language.
    pub fn language(&self) -> &'static str {
        LANGUAGES[self.language_index]
    }

    /// Select the next language in the catalog.
    pub fn next_language(&mut self) {
        self.language_index = (self.language_index + 1) % LANGUAGES.len();
    }

    /// Select the previous language in the catalog.
    pub fn previous_language(&mut self) {
        self.language_index = (self.language_index + LANGUAGES.len() - 1) % LANGUAGES.len();
    }

    /// Append a character to the focused input of the active feature.
    pub fn push_char(&mut self, c: char) {
        match self.feature {
            Feature::Script => self.script_topic.push(c),
            Feature::Facts => match self.facts_focus {
                FactsField::Topic => self.facts_topic.push(c),
                FactsField::Count => {
                    if c.is_ascii_digit() && self.facts_count.len() < 2 {
                        self.facts_count.push(c);
                    }
                }
                FactsField::Language => {}
            },
        }
    }

    /// Delete the last character of the focused input of the active feature.
    pub fn pop_char(&mut self) {
        match self.feature {
            Feature::Script => {
                self.script_topic.pop();
            }
            Feature::Facts => match self.facts_focus {
                FactsField::Topic => {
                    self.facts_topic.pop();
                }
                FactsField::Count => {
                    self.facts_count.pop();
                }
                FactsField::Language => {}
            },
        }
    }

    /// Parse the fact-count buffer.
    ///
    /// An unparseable buffer maps to 0, which the workflow rejects with its
    /// own out-of-range message.
    pub fn parsed_facts_count(&self) -> u8 {
        self.facts_count.trim().parse().unwrap_or(0)
    }

    /// Range hint shown beside the count field.
    pub fn count_hint() -> String {
        format!("{MIN_FACTS}-{MAX_FACTS}")
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
