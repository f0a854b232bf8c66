//! Terminal User Interface for the Reelsmith content assistant.
//!
//! Provides an interactive TUI over the two workflows: a script generator
//! with per-scene image status and a fact finder. Rendering is a pure
//! function of workflow state plus local form state; all generation runs
//! on the workflow controllers, which this crate only observes through
//! their watch channels. Built with ratatui for terminal rendering.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod app;
mod events;
mod runner;
mod theme;
mod ui;

pub use app::{App, FactsField, Feature};
pub use events::{Event, EventHandler};
pub use reelsmith_error::{TuiError, TuiErrorKind, TuiResult};
pub use runner::run_tui;
pub use theme::{Preferences, Theme};
