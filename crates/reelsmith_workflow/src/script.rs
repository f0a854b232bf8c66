//! Two-phase script workflow controller.

use std::sync::atomic::{AtomicU64, Ordering};

use futures::future::try_join_all;
use tokio::sync::watch;
use tracing::{debug, instrument, warn};

use reelsmith_core::ScriptRequest;
use reelsmith_error::{WorkflowError, WorkflowErrorKind};
use reelsmith_interface::{ImageSynthesis, ScriptWriting};

use crate::ScriptState;

/// Controller for the script-and-image generation workflow.
///
/// Orchestrates the two-phase generation: scene text first, then one image
/// per scene issued concurrently and joined all-or-nothing. The drafted
/// (text-only) scenes are published before any image request starts, so
/// subscribers can render them immediately.
///
/// # Example
///
/// ```no_run
/// use reelsmith_workflow::{ScriptState, ScriptWorkflow};
/// use reelsmith_models::{GeminiClient, ImagenClient};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let workflow = ScriptWorkflow::new(GeminiClient::new()?, ImagenClient::new()?);
///
/// match workflow.submit("The Great Emu War").await {
///     ScriptState::Ready(scenes) => println!("{} scenes", scenes.len()),
///     ScriptState::Failed(message) => eprintln!("{message}"),
///     _ => unreachable!("submit resolves to a terminal state"),
/// }
/// # Ok(())
/// # }
/// ```
pub struct ScriptWorkflow<W, I> {
    writer: W,
    illustrator: I,
    state: watch::Sender<ScriptState>,
    submissions: AtomicU64,
}

impl<W: ScriptWriting, I: ImageSynthesis> ScriptWorkflow<W, I> {
    /// Create a workflow over the given script and image drivers.
    pub fn new(writer: W, illustrator: I) -> Self {
        let (state, _) = watch::channel(ScriptState::Idle);
        Self {
            writer,
            illustrator,
            state,
            submissions: AtomicU64::new(0),
        }
    }

    /// Subscribe to state transitions.
    pub fn subscribe(&self) -> watch::Receiver<ScriptState> {
        self.state.subscribe()
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> ScriptState {
        self.state.borrow().clone()
    }

    /// Submit a topic and drive the workflow to a terminal state.
    ///
    /// Returns this submission's own outcome. The state channel only ever
    /// reflects the latest submission: if a newer submission starts while
    /// this one is in flight, this one keeps running but loses the right
    /// to publish.
    #[instrument(skip(self))]
    pub async fn submit(&self, topic: &str) -> ScriptState {
        let id = self.submissions.fetch_add(1, Ordering::SeqCst) + 1;
        let request = ScriptRequest::new(topic);

        if let Err(e) = Self::validate(&request) {
            let failed = ScriptState::Failed(e.kind.to_string());
            self.publish(id, failed.clone());
            return failed;
        }

        self.publish(id, ScriptState::Loading);
        let outcome = self.run(id, &request).await;
        self.publish(id, outcome.clone());
        outcome
    }

    /// Validate a request before any network call is made.
    fn validate(request: &ScriptRequest) -> Result<(), WorkflowError> {
        if request.trimmed_topic().is_empty() {
            return Err(WorkflowError::new(WorkflowErrorKind::EmptyTopic));
        }
        Ok(())
    }

    /// Execute both generation phases, reporting the terminal state.
    async fn run(&self, id: u64, request: &ScriptRequest) -> ScriptState {
        let scenes = match self.writer.generate_script(request).await {
            Ok(scenes) => scenes,
            Err(e) => return ScriptState::Failed(e.to_string()),
        };
        debug!(scenes = scenes.len(), "Script drafted, starting image fan-out");
        self.publish(id, ScriptState::Drafted(scenes.clone()));

        // Fan-out one image request per scene; the join is all-or-nothing,
        // and the first failure drops the remaining futures.
        let images = try_join_all(
            scenes
                .iter()
                .map(|scene| self.illustrator.generate_image(&scene.visual)),
        )
        .await;

        match images {
            Ok(images) => {
                let illustrated = scenes
                    .into_iter()
                    .zip(images)
                    .map(|(scene, image)| scene.with_image_url(image.to_data_uri()))
                    .collect();
                ScriptState::Ready(illustrated)
            }
            Err(e) => ScriptState::Failed(e.to_string()),
        }
    }

    /// Publish a state transition unless a newer submission has started.
    fn publish(&self, id: u64, state: ScriptState) {
        if self.submissions.load(Ordering::SeqCst) == id {
            self.state.send_replace(state);
        } else {
            warn!(submission = id, "Discarding state from superseded submission");
        }
    }
}
