//! One-shot command handlers for the script and facts workflows.

use reelsmith::{
    FactsRequest, FactsState, FactsWorkflow, GeminiClient, ImagenClient, Scene, ScriptState,
    ScriptWorkflow, Settings,
};
use tracing::info;

/// Generate a script and print it.
pub async fn run_script(
    settings: &Settings,
    topic: &str,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let writer = GeminiClient::new_with_model(&settings.models.text)?;
    let illustrator = ImagenClient::new_with_model(&settings.models.image)?;
    let workflow = ScriptWorkflow::new(writer, illustrator);

    info!(topic, "Generating script");
    match workflow.submit(topic).await {
        ScriptState::Ready(scenes) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&scenes)?);
            } else {
                print_scenes(&scenes);
            }
            Ok(())
        }
        ScriptState::Failed(message) => Err(message.into()),
        // submit always resolves to Ready or Failed
        state => Err(format!("Unexpected workflow state: {state:?}").into()),
    }
}

/// Find facts and print them.
pub async fn run_facts(
    settings: &Settings,
    topic: &str,
    count: u8,
    language: &str,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let finder = GeminiClient::new_with_model(&settings.models.text)?;
    let workflow = FactsWorkflow::new(finder);
    let request = FactsRequest::new(topic, count, language);

    info!(topic, count, language, "Finding facts");
    match workflow.submit(&request).await {
        FactsState::Ready(facts) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&facts)?);
            } else {
                for (i, fact) in facts.iter().enumerate() {
                    println!("{}. {}", i + 1, fact);
                }
            }
            Ok(())
        }
        FactsState::Failed(message) => Err(message.into()),
        state => Err(format!("Unexpected workflow state: {state:?}").into()),
    }
}

/// Human-readable scene listing; image payloads are summarized, not dumped.
fn print_scenes(scenes: &[Scene]) {
    for (i, scene) in scenes.iter().enumerate() {
        println!("Scene {}", i + 1);
        println!("  Visual:    {}", scene.visual);
        println!("  Voiceover: \"{}\"", scene.voiceover);
        match &scene.image_url {
            Some(url) => {
                let payload = url.rsplit(',').next().unwrap_or_default();
                let kib = (payload.len() * 3 / 4) / 1024;
                println!("  Image:     {kib} KiB png (data URI; use --json for the bytes)");
            }
            None => println!("  Image:     none"),
        }
        println!();
    }
}
