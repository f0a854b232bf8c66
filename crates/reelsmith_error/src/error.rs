//! Top-level error wrapper types.

use crate::{ConfigError, GeminiError, HttpError, ImagenError, JsonError, WorkflowError};
#[cfg(feature = "tui")]
use crate::TuiError;

/// This is the foundation error enum. Each Reelsmith crate contributes
/// the variants for its own failure domain.
///
/// # Examples
///
/// ```
/// use reelsmith_error::{ReelsmithError, HttpError};
///
/// let http_err = HttpError::new("Connection failed");
/// let err: ReelsmithError = http_err.into();
/// assert!(format!("{}", err).contains("HTTP Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum ReelsmithErrorKind {
    /// HTTP error
    #[from(HttpError)]
    Http(HttpError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Gemini text-generation error
    #[from(GeminiError)]
    Gemini(GeminiError),
    /// Imagen image-generation error
    #[from(ImagenError)]
    Imagen(ImagenError),
    /// Workflow validation error
    #[from(WorkflowError)]
    Workflow(WorkflowError),
    /// TUI error
    #[cfg(feature = "tui")]
    #[from(TuiError)]
    Tui(TuiError),
}

/// Reelsmith error with kind discrimination.
///
/// # Examples
///
/// ```
/// use reelsmith_error::{ReelsmithResult, ConfigError};
///
/// fn might_fail() -> ReelsmithResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Reelsmith Error: {}", _0)]
pub struct ReelsmithError(Box<ReelsmithErrorKind>);

impl ReelsmithError {
    /// Create a new error from a kind.
    pub fn new(kind: ReelsmithErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ReelsmithErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to ReelsmithErrorKind
impl<T> From<T> for ReelsmithError
where
    T: Into<ReelsmithErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Reelsmith operations.
///
/// # Examples
///
/// ```
/// use reelsmith_error::{ReelsmithResult, HttpError};
///
/// fn fetch_data() -> ReelsmithResult<String> {
///     Err(HttpError::new("404 Not Found"))?
/// }
/// ```
pub type ReelsmithResult<T> = std::result::Result<T, ReelsmithError>;
