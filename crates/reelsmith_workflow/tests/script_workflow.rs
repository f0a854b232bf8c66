//! Tests for the two-phase script workflow.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::Semaphore;

use reelsmith_core::{Scene, SceneImage, ScriptRequest};
use reelsmith_error::{GeminiError, GeminiErrorKind, ImagenError, ImagenErrorKind, ReelsmithResult};
use reelsmith_interface::{ImageSynthesis, ScriptWriting};
use reelsmith_workflow::{ScriptState, ScriptWorkflow};

//
// ─── MOCK DRIVERS ───────────────────────────────────────────────────────────────
//

/// Script driver returning a fixed outcome.
struct StubWriter {
    scenes: Result<Vec<Scene>, String>,
    calls: Arc<AtomicUsize>,
}

impl StubWriter {
    fn ok(scenes: Vec<Scene>) -> Self {
        Self {
            scenes: Ok(scenes),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    fn failing(message: &str) -> Self {
        Self {
            scenes: Err(message.to_string()),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }
}

#[async_trait]
impl ScriptWriting for StubWriter {
    async fn generate_script(&self, _req: &ScriptRequest) -> ReelsmithResult<Vec<Scene>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.scenes {
            Ok(scenes) => Ok(scenes.clone()),
            Err(message) => {
                Err(GeminiError::new(GeminiErrorKind::ApiRequest(message.clone())).into())
            }
        }
    }

    fn provider_name(&self) -> &'static str {
        "stub"
    }

    fn model_name(&self) -> &str {
        "stub-text"
    }
}

/// Image driver echoing the prompt into the payload, tracking concurrency.
struct StubIllustrator {
    calls: Arc<AtomicUsize>,
    in_flight: Arc<AtomicUsize>,
    max_in_flight: Arc<AtomicUsize>,
    fail_substring: Option<String>,
    gate: Option<Arc<Semaphore>>,
}

impl StubIllustrator {
    fn ok() -> Self {
        Self {
            calls: Arc::new(AtomicUsize::new(0)),
            in_flight: Arc::new(AtomicUsize::new(0)),
            max_in_flight: Arc::new(AtomicUsize::new(0)),
            fail_substring: None,
            gate: None,
        }
    }

    fn failing_on(substring: &str) -> Self {
        Self {
            fail_substring: Some(substring.to_string()),
            ..Self::ok()
        }
    }

    fn gated(gate: Arc<Semaphore>) -> Self {
        Self {
            gate: Some(gate),
            ..Self::ok()
        }
    }
}

#[async_trait]
impl ImageSynthesis for StubIllustrator {
    async fn generate_image(&self, prompt: &str) -> ReelsmithResult<SceneImage> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        if let Some(gate) = &self.gate {
            gate.acquire().await.unwrap().forget();
        } else {
            tokio::time::sleep(std::time::Duration::from_millis(10)).await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        if let Some(substring) = &self.fail_substring {
            if prompt.contains(substring.as_str()) {
                return Err(ImagenError::new(ImagenErrorKind::NoImages).into());
            }
        }
        Ok(SceneImage::png(format!("payload-{prompt}")))
    }

    fn provider_name(&self) -> &'static str {
        "stub"
    }

    fn model_name(&self) -> &str {
        "stub-image"
    }
}

fn sample_scenes(n: usize) -> Vec<Scene> {
    (0..n)
        .map(|i| Scene::new(format!("visual-{i}"), format!("voiceover-{i}")))
        .collect()
}

//
// ─── VALIDATION ─────────────────────────────────────────────────────────────────
//

#[tokio::test]
async fn empty_topic_fails_without_network_calls() {
    let writer = StubWriter::ok(sample_scenes(2));
    let writer_calls = writer.calls.clone();
    let illustrator = StubIllustrator::ok();
    let image_calls = illustrator.calls.clone();
    let workflow = ScriptWorkflow::new(writer, illustrator);

    let outcome = workflow.submit("   \t ").await;

    assert!(matches!(outcome, ScriptState::Failed(_)));
    assert!(outcome.error().unwrap().contains("enter a topic"));
    assert_eq!(writer_calls.load(Ordering::SeqCst), 0);
    assert_eq!(image_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn non_empty_topic_issues_exactly_one_script_call() {
    let writer = StubWriter::ok(sample_scenes(3));
    let writer_calls = writer.calls.clone();
    let workflow = ScriptWorkflow::new(writer, StubIllustrator::ok());

    workflow.submit("The Great Emu War").await;

    assert_eq!(writer_calls.load(Ordering::SeqCst), 1);
}

//
// ─── SUCCESS PATH ───────────────────────────────────────────────────────────────
//

#[tokio::test]
async fn ready_scenes_match_drafted_by_index() {
    let writer = StubWriter::ok(sample_scenes(4));
    let illustrator = StubIllustrator::ok();
    let image_calls = illustrator.calls.clone();
    let workflow = ScriptWorkflow::new(writer, illustrator);

    let outcome = workflow.submit("The Great Emu War").await;

    let ScriptState::Ready(scenes) = outcome else {
        panic!("expected Ready, got {outcome:?}");
    };
    assert_eq!(scenes.len(), 4);
    assert_eq!(image_calls.load(Ordering::SeqCst), 4);
    for (i, scene) in scenes.iter().enumerate() {
        assert_eq!(scene.visual, format!("visual-{i}"));
        let url = scene.image_url.as_deref().unwrap();
        assert!(url.starts_with("data:image/png;base64,"));
        // The stub echoes the prompt, proving index correspondence.
        assert!(url.ends_with(&format!("payload-visual-{i}")));
    }
}

#[tokio::test]
async fn image_requests_fan_out_concurrently() {
    let writer = StubWriter::ok(sample_scenes(5));
    let illustrator = StubIllustrator::ok();
    let max_in_flight = illustrator.max_in_flight.clone();
    let workflow = ScriptWorkflow::new(writer, illustrator);

    workflow.submit("Pompeii").await;

    assert_eq!(max_in_flight.load(Ordering::SeqCst), 5);
}

#[tokio::test]
async fn drafted_state_is_observable_before_images_complete() {
    let gate = Arc::new(Semaphore::new(0));
    let writer = StubWriter::ok(sample_scenes(2));
    let illustrator = StubIllustrator::gated(gate.clone());
    let workflow = Arc::new(ScriptWorkflow::new(writer, illustrator));

    let mut states = workflow.subscribe();
    let runner = workflow.clone();
    let handle = tokio::spawn(async move { runner.submit("Pompeii").await });

    let drafted = states
        .wait_for(|state| matches!(state, ScriptState::Drafted(_)))
        .await
        .unwrap()
        .clone();
    let drafted_scenes = drafted.scenes().unwrap();
    assert_eq!(drafted_scenes.len(), 2);
    assert!(drafted_scenes.iter().all(|scene| !scene.has_image()));
    assert!(drafted.is_loading());

    gate.add_permits(2);
    let outcome = handle.await.unwrap();
    assert!(matches!(outcome, ScriptState::Ready(_)));
}

#[tokio::test]
async fn zero_scenes_is_a_degenerate_success() {
    let writer = StubWriter::ok(Vec::new());
    let illustrator = StubIllustrator::ok();
    let image_calls = illustrator.calls.clone();
    let workflow = ScriptWorkflow::new(writer, illustrator);

    let outcome = workflow.submit("Atlantis").await;

    assert_eq!(outcome, ScriptState::Ready(Vec::new()));
    assert_eq!(image_calls.load(Ordering::SeqCst), 0);
}

//
// ─── FAILURE PATHS ──────────────────────────────────────────────────────────────
//

#[tokio::test]
async fn script_failure_surfaces_cause_and_skips_images() {
    let writer = StubWriter::failing("model overloaded");
    let illustrator = StubIllustrator::ok();
    let image_calls = illustrator.calls.clone();
    let workflow = ScriptWorkflow::new(writer, illustrator);

    let outcome = workflow.submit("Pompeii").await;

    assert!(outcome.error().unwrap().contains("model overloaded"));
    assert_eq!(image_calls.load(Ordering::SeqCst), 0);
    assert_eq!(workflow.state(), outcome);
}

#[tokio::test]
async fn missing_scenes_field_never_reaches_drafted() {
    struct MissingFieldWriter;
    #[async_trait]
    impl ScriptWriting for MissingFieldWriter {
        async fn generate_script(&self, _req: &ScriptRequest) -> ReelsmithResult<Vec<Scene>> {
            Err(GeminiError::new(GeminiErrorKind::MissingField("scenes".into())).into())
        }
        fn provider_name(&self) -> &'static str {
            "stub"
        }
        fn model_name(&self) -> &str {
            "stub-text"
        }
    }

    let illustrator = StubIllustrator::ok();
    let image_calls = illustrator.calls.clone();
    let workflow = ScriptWorkflow::new(MissingFieldWriter, illustrator);

    let outcome = workflow.submit("Pompeii").await;

    assert!(outcome.error().unwrap().contains("'scenes' field not found"));
    assert_eq!(image_calls.load(Ordering::SeqCst), 0);
    assert!(workflow.state().scenes().is_none());
}

#[tokio::test]
async fn single_image_failure_discards_the_draft() {
    let writer = StubWriter::ok(sample_scenes(3));
    let illustrator = StubIllustrator::failing_on("visual-1");
    let workflow = ScriptWorkflow::new(writer, illustrator);

    let outcome = workflow.submit("Pompeii").await;

    assert!(matches!(outcome, ScriptState::Failed(_)));
    assert!(outcome.error().unwrap().contains("produce an image"));
    // The terminal state shows only the error, not a half-illustrated script.
    assert!(workflow.state().scenes().is_none());
}

//
// ─── RACING SUBMISSIONS ─────────────────────────────────────────────────────────
//

#[tokio::test]
async fn late_completion_cannot_overwrite_newer_submission() {
    /// Writer that blocks only for topics containing "slow".
    struct RaceWriter {
        gate: Arc<Semaphore>,
    }

    #[async_trait]
    impl ScriptWriting for RaceWriter {
        async fn generate_script(&self, req: &ScriptRequest) -> ReelsmithResult<Vec<Scene>> {
            if req.topic().contains("slow") {
                self.gate.acquire().await.unwrap().forget();
            }
            Ok(vec![Scene::new(req.topic().clone(), "voiceover")])
        }
        fn provider_name(&self) -> &'static str {
            "stub"
        }
        fn model_name(&self) -> &str {
            "stub-text"
        }
    }

    let gate = Arc::new(Semaphore::new(0));
    let writer = RaceWriter { gate: gate.clone() };
    let workflow = Arc::new(ScriptWorkflow::new(writer, StubIllustrator::ok()));

    let runner = workflow.clone();
    let slow = tokio::spawn(async move { runner.submit("slow topic").await });
    tokio::task::yield_now().await;

    let fast = workflow.submit("fast topic").await;
    let ScriptState::Ready(fast_scenes) = &fast else {
        panic!("expected Ready, got {fast:?}");
    };
    assert_eq!(fast_scenes[0].visual, "fast topic");

    // Release the first submission; it resolves but must not be published.
    gate.add_permits(1);
    let slow_outcome = slow.await.unwrap();
    assert!(matches!(slow_outcome, ScriptState::Ready(_)));
    assert_eq!(workflow.state(), fast);
}
