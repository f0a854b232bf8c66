//! Workflow controllers for the Reelsmith content assistant.
//!
//! A workflow is the end-to-end sequence from user submission to terminal
//! success or error state for one feature. This crate provides:
//! - [`ScriptWorkflow`] — two-phase script generation: scene text first,
//!   then one image per scene generated concurrently and joined all-or-nothing
//! - [`FactsWorkflow`] — single-phase fact finding
//!
//! Controllers publish every state transition through a
//! [`tokio::sync::watch`] channel, so the presentation layer observes the
//! drafted (text-only) scenes before any image request is issued. All
//! provider failures are converted to a terminal `Failed` state at the
//! controller boundary; nothing propagates further.
//!
//! When submissions race, the last-submitted one wins: each submission
//! takes a monotonically increasing id and may only publish while it is
//! still the latest, so a straggler's late completion cannot overwrite
//! fresher state.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod facts;
mod script;
mod state;

pub use facts::FactsWorkflow;
pub use script::ScriptWorkflow;
pub use state::{FactsState, ScriptState};
