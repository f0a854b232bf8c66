//! Error types for the Reelsmith content assistant.
//!
//! This crate provides the foundation error types used throughout the
//! Reelsmith workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean
//! error handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use reelsmith_error::{ReelsmithResult, HttpError};
//!
//! fn fetch_data() -> ReelsmithResult<String> {
//!     Err(HttpError::new("Connection refused"))?
//! }
//!
//! match fetch_data() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod http;
mod json;
mod config;
mod gemini;
mod imagen;
mod workflow;
#[cfg(feature = "tui")]
mod tui;
mod error;

pub use http::HttpError;
pub use json::JsonError;
pub use config::ConfigError;
pub use gemini::{GeminiError, GeminiErrorKind};
pub use imagen::{ImagenError, ImagenErrorKind};
pub use workflow::{WorkflowError, WorkflowErrorKind};
#[cfg(feature = "tui")]
pub use tui::{TuiError, TuiErrorKind, TuiResult};
pub use error::{ReelsmithError, ReelsmithErrorKind, ReelsmithResult};
