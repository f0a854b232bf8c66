//! Tests for the single-phase facts workflow.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::Semaphore;

use reelsmith_core::FactsRequest;
use reelsmith_error::{GeminiError, GeminiErrorKind, ReelsmithResult};
use reelsmith_interface::FactFinding;
use reelsmith_workflow::{FactsState, FactsWorkflow};

/// Fact driver returning a fixed outcome.
struct StubFinder {
    facts: Result<Vec<String>, String>,
    calls: Arc<AtomicUsize>,
}

impl StubFinder {
    fn ok(facts: &[&str]) -> Self {
        Self {
            facts: Ok(facts.iter().map(|s| s.to_string()).collect()),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    fn failing(message: &str) -> Self {
        Self {
            facts: Err(message.to_string()),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }
}

#[async_trait]
impl FactFinding for StubFinder {
    async fn find_facts(&self, _req: &FactsRequest) -> ReelsmithResult<Vec<String>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.facts {
            Ok(facts) => Ok(facts.clone()),
            Err(message) => {
                Err(GeminiError::new(GeminiErrorKind::ApiRequest(message.clone())).into())
            }
        }
    }

    fn provider_name(&self) -> &'static str {
        "stub"
    }
}

#[tokio::test]
async fn facts_are_returned_in_provider_order() {
    let finder = StubFinder::ok(&["third", "first", "fifth", "second", "fourth"]);
    let calls = finder.calls.clone();
    let workflow = FactsWorkflow::new(finder);

    let outcome = workflow
        .submit(&FactsRequest::new("The Ocean", 5, "English"))
        .await;

    let FactsState::Ready(facts) = outcome else {
        panic!("expected Ready");
    };
    assert_eq!(facts, vec!["third", "first", "fifth", "second", "fourth"]);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn empty_topic_fails_without_network_calls() {
    let finder = StubFinder::ok(&["a"]);
    let calls = finder.calls.clone();
    let workflow = FactsWorkflow::new(finder);

    let outcome = workflow.submit(&FactsRequest::new("  ", 5, "English")).await;

    assert!(outcome.error().unwrap().contains("enter a topic"));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn out_of_range_count_is_rejected_locally() {
    for count in [0u8, 21] {
        let finder = StubFinder::ok(&["a"]);
        let calls = finder.calls.clone();
        let workflow = FactsWorkflow::new(finder);

        let outcome = workflow
            .submit(&FactsRequest::new("The Ocean", count, "English"))
            .await;

        let message = outcome.error().unwrap().to_string();
        assert!(message.contains("out of range"), "got: {message}");
        assert!(message.contains(&count.to_string()));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }
}

#[tokio::test]
async fn boundary_counts_are_accepted() {
    for count in [1u8, 20] {
        let workflow = FactsWorkflow::new(StubFinder::ok(&["a"]));
        let outcome = workflow
            .submit(&FactsRequest::new("The Ocean", count, "English"))
            .await;
        assert!(matches!(outcome, FactsState::Ready(_)));
    }
}

#[tokio::test]
async fn provider_failure_surfaces_cause() {
    let workflow = FactsWorkflow::new(StubFinder::failing("quota exceeded"));

    let outcome = workflow
        .submit(&FactsRequest::new("The Ocean", 5, "English"))
        .await;

    assert!(outcome.error().unwrap().contains("quota exceeded"));
    assert_eq!(workflow.state(), outcome);
}

#[tokio::test]
async fn late_completion_cannot_overwrite_newer_submission() {
    /// Finder that echoes the topic and blocks only for "slow" topics.
    struct TopicEchoFinder {
        gate: Arc<Semaphore>,
    }

    #[async_trait]
    impl FactFinding for TopicEchoFinder {
        async fn find_facts(&self, req: &FactsRequest) -> ReelsmithResult<Vec<String>> {
            if req.topic().contains("slow") {
                self.gate.acquire().await.unwrap().forget();
            }
            Ok(vec![format!("fact about {}", req.topic())])
        }
        fn provider_name(&self) -> &'static str {
            "stub"
        }
    }

    let gate = Arc::new(Semaphore::new(0));
    let finder = TopicEchoFinder { gate: gate.clone() };
    let workflow = Arc::new(FactsWorkflow::new(finder));

    let runner = workflow.clone();
    let slow = tokio::spawn(async move {
        runner
            .submit(&FactsRequest::new("slow topic", 3, "English"))
            .await
    });
    tokio::task::yield_now().await;

    let fast = workflow
        .submit(&FactsRequest::new("fast topic", 3, "English"))
        .await;
    assert_eq!(
        fast,
        FactsState::Ready(vec!["fact about fast topic".to_string()])
    );

    gate.add_permits(1);
    let slow_outcome = slow.await.unwrap();
    assert_eq!(
        slow_outcome,
        FactsState::Ready(vec!["fact about slow topic".to_string()])
    );
    assert_eq!(workflow.state(), fast);
}
