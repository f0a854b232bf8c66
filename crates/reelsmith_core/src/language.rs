//! Language catalog for the fact-finding workflow.

/// Language used when the user has not chosen one.
pub const DEFAULT_LANGUAGE: &str = "English";

/// Languages offered by the fact-finding form.
pub const LANGUAGES: &[&str] = &[
    "English",
    "Spanish",
    "French",
    "German",
    "Italian",
    "Portuguese",
    "Arabic",
    "Hausa",
    "Swahili",
    "Japanese",
];
