//! TUI launch handler.

use std::sync::Arc;

use reelsmith::{FactsWorkflow, GeminiClient, ImagenClient, ScriptWorkflow, Settings};

/// Build the workflow controllers and run the TUI until exit.
pub async fn launch_tui(settings: &Settings) -> Result<(), Box<dyn std::error::Error>> {
    let writer = GeminiClient::new_with_model(&settings.models.text)?;
    let illustrator = ImagenClient::new_with_model(&settings.models.image)?;
    let finder = GeminiClient::new_with_model(&settings.models.text)?;

    let script_workflow = Arc::new(ScriptWorkflow::new(writer, illustrator));
    let facts_workflow = Arc::new(FactsWorkflow::new(finder));

    reelsmith_tui::run_tui(script_workflow, facts_workflow).await?;
    Ok(())
}
