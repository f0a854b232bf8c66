//! Single-phase facts workflow controller.

use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::watch;
use tracing::{debug, instrument, warn};

use reelsmith_core::FactsRequest;
use reelsmith_error::{WorkflowError, WorkflowErrorKind};
use reelsmith_interface::FactFinding;

use crate::FactsState;

/// Controller for the fact-finding workflow.
///
/// Single-phase: validate, call the fact driver once, publish the outcome.
/// Facts are kept in the provider's returned order; no local re-sorting or
/// deduplication.
pub struct FactsWorkflow<F> {
    finder: F,
    state: watch::Sender<FactsState>,
    submissions: AtomicU64,
}

impl<F: FactFinding> FactsWorkflow<F> {
    /// Create a workflow over the given fact driver.
    pub fn new(finder: F) -> Self {
        let (state, _) = watch::channel(FactsState::Idle);
        Self {
            finder,
            state,
            submissions: AtomicU64::new(0),
        }
    }

    /// Subscribe to state transitions.
    pub fn subscribe(&self) -> watch::Receiver<FactsState> {
        self.state.subscribe()
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> FactsState {
        self.state.borrow().clone()
    }

    /// Submit a request and drive the workflow to a terminal state.
    ///
    /// Returns this submission's own outcome; the state channel only ever
    /// reflects the latest submission.
    #[instrument(skip(self, request), fields(topic = %request.topic()))]
    pub async fn submit(&self, request: &FactsRequest) -> FactsState {
        let id = self.submissions.fetch_add(1, Ordering::SeqCst) + 1;

        if let Err(e) = Self::validate(request) {
            let failed = FactsState::Failed(e.kind.to_string());
            self.publish(id, failed.clone());
            return failed;
        }

        self.publish(id, FactsState::Loading);
        let outcome = match self.finder.find_facts(request).await {
            Ok(facts) => {
                debug!(facts = facts.len(), "Facts found");
                FactsState::Ready(facts)
            }
            Err(e) => FactsState::Failed(e.to_string()),
        };
        self.publish(id, outcome.clone());
        outcome
    }

    /// Validate a request before any network call is made.
    ///
    /// The count bounds are enforced here rather than trusted to the form,
    /// so out-of-range values never reach the provider.
    fn validate(request: &FactsRequest) -> Result<(), WorkflowError> {
        if request.trimmed_topic().is_empty() {
            return Err(WorkflowError::new(WorkflowErrorKind::EmptyTopic));
        }
        if !request.count_in_range() {
            return Err(WorkflowError::new(WorkflowErrorKind::FactCountOutOfRange(
                *request.num_facts(),
            )));
        }
        Ok(())
    }

    /// Publish a state transition unless a newer submission has started.
    fn publish(&self, id: u64, state: FactsState) {
        if self.submissions.load(Ordering::SeqCst) == id {
            self.state.send_replace(state);
        } else {
            warn!(submission = id, "Discarding state from superseded submission");
        }
    }
}
