//! Reelsmith CLI binary.
//!
//! This binary provides command-line access to Reelsmith's functionality:
//! - Generate a reel script with scene images for a topic
//! - Find surprising facts about a topic
//! - Launch the interactive TUI

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, launch_tui, run_facts, run_script};

    // Load .env before anything reads GEMINI_API_KEY
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    let settings = reelsmith::Settings::load()?;

    // Execute the requested command
    match cli.command {
        Commands::Script { topic, json } => {
            run_script(&settings, &topic, json).await?;
        }

        Commands::Facts {
            topic,
            count,
            language,
            json,
        } => {
            run_facts(&settings, &topic, count, &language, json).await?;
        }

        Commands::Tui => {
            launch_tui(&settings).await?;
        }
    }

    Ok(())
}
