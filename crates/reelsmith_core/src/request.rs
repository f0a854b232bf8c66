//! Workflow request parameter types.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Smallest accepted fact count.
pub const MIN_FACTS: u8 = 1;
/// Largest accepted fact count.
pub const MAX_FACTS: u8 = 20;

/// Parameters for a script generation request.
///
/// # Examples
///
/// ```
/// use reelsmith_core::ScriptRequest;
///
/// let request = ScriptRequest::new("The Great Emu War");
/// assert_eq!(request.topic(), "The Great Emu War");
/// ```
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct ScriptRequest {
    /// Topic to write the script about
    topic: String,
}

impl ScriptRequest {
    /// Create a script request for the given topic.
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
        }
    }

    /// The topic with surrounding whitespace removed.
    pub fn trimmed_topic(&self) -> &str {
        self.topic.trim()
    }
}

/// Parameters for a fact-finding request.
///
/// # Examples
///
/// ```
/// use reelsmith_core::{FactsRequest, FactsRequestBuilder};
///
/// let request = FactsRequest::new("The Ocean", 5, "English");
/// assert_eq!(*request.num_facts(), 5);
///
/// // Builder form with defaults (5 facts, English)
/// let request = FactsRequestBuilder::default()
///     .topic("The Ocean")
///     .build()
///     .unwrap();
/// assert_eq!(request.language(), "English");
/// ```
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct FactsRequest {
    /// Topic to find facts about
    topic: String,
    /// Number of facts requested (1-20)
    #[builder(default = "5")]
    num_facts: u8,
    /// Language the facts should be written in
    #[builder(default = "String::from(crate::DEFAULT_LANGUAGE)")]
    language: String,
}

impl FactsRequest {
    /// Create a facts request.
    pub fn new(topic: impl Into<String>, num_facts: u8, language: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            num_facts,
            language: language.into(),
        }
    }

    /// The topic with surrounding whitespace removed.
    pub fn trimmed_topic(&self) -> &str {
        self.topic.trim()
    }

    /// Whether the requested count falls within the supported range.
    pub fn count_in_range(&self) -> bool {
        (MIN_FACTS..=MAX_FACTS).contains(&self.num_facts)
    }
}
