//! Imagen image-generation error types.

/// Imagen-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ImagenErrorKind {
    /// API request failed before a response arrived
    #[display("Imagen API request failed: {}", _0)]
    ApiRequest(String),
    /// HTTP error with status code and message
    #[display("HTTP {} error: {}", status_code, message)]
    HttpStatus {
        /// HTTP status code
        status_code: u16,
        /// Error message
        message: String,
    },
    /// The provider returned zero generated images
    #[display("Image generation failed to produce an image")]
    NoImages,
    /// Response body could not be parsed
    #[display("Failed to parse Imagen response: {}", _0)]
    ResponseParse(String),
}

/// Imagen error with source location tracking.
///
/// # Examples
///
/// ```
/// use reelsmith_error::{ImagenError, ImagenErrorKind};
///
/// let err = ImagenError::new(ImagenErrorKind::NoImages);
/// assert!(format!("{}", err).contains("produce an image"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Imagen Error: {} at line {} in {}", kind, line, file)]
pub struct ImagenError {
    /// The kind of error that occurred
    pub kind: ImagenErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ImagenError {
    /// Create a new ImagenError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ImagenErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
