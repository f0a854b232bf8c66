//! CLI command definitions.

use clap::{Parser, Subcommand};
use reelsmith::{DEFAULT_LANGUAGE, MAX_FACTS, MIN_FACTS};

/// Reelsmith - AI reel scripts with scene images and surprising-fact lists
#[derive(Parser, Debug)]
#[command(name = "reelsmith")]
#[command(about = "AI reel scripts with scene images and surprising-fact lists", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a reel script with one image per scene
    Script {
        /// Topic to write the script about
        #[arg(long)]
        topic: String,

        /// Print the full scene list as JSON (includes image data URIs)
        #[arg(long)]
        json: bool,
    },

    /// Find surprising facts about a topic
    Facts {
        /// Topic to find facts about
        #[arg(long)]
        topic: String,

        /// Number of facts to find
        #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u8).range(MIN_FACTS as i64..=MAX_FACTS as i64))]
        count: u8,

        /// Language the facts should be written in
        #[arg(long, default_value = DEFAULT_LANGUAGE)]
        language: String,

        /// Print the fact list as JSON
        #[arg(long)]
        json: bool,
    },

    /// Launch the interactive terminal user interface
    Tui,
}
