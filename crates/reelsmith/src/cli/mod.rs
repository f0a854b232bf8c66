//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the
//! reelsmith binary.

mod commands;
mod run;
mod tui_handler;

pub use commands::{Cli, Commands};
pub use run::{run_facts, run_script};
pub use tui_handler::launch_tui;
