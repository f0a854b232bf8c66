//! Trait definitions for the Reelsmith content assistant.
//!
//! This crate defines the seams between the workflow controllers and the
//! generative providers. Controllers are generic over these traits, which
//! keeps them testable against mock drivers and keeps all network access
//! behind a single boundary.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::{FactFinding, ImageSynthesis, ScriptWriting};
