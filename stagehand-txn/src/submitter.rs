use crate::apply::ApplyTransaction;
use crate::error::{SubmitError, SubmitResult};
use crate::stager::TransactionStager;
use parking_lot::{Mutex, RwLock};
use stagehand_types::{MetaOperation, TransactionResponse};
use tracing::{debug, info, warn};

/// Resting states of the submitter.
///
/// A failed submit is not a resting state: the failure is the `Err`
/// value returned by [`TransactionSubmitter::submit`], and the submitter
/// transitions back to `Idle` with the staged list intact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitState {
    /// No submit outstanding; nothing committed yet this cycle.
    #[default]
    Idle,
    /// The apply call is in flight. Further submits are rejected.
    Submitting,
    /// The last submit succeeded; the committed snapshot is available.
    Committed,
}

/// A successfully committed batch, frozen for later review.
#[derive(Debug, Clone, PartialEq)]
pub struct CommittedTransaction {
    /// The exact operations that were submitted, in commit order.
    pub operations: Vec<MetaOperation>,
    /// The backend's response, passed through for downstream navigation.
    pub response: TransactionResponse,
}

/// Atomic submit state machine.
///
/// At most one submit is outstanding at a time: the state flip to
/// `Submitting` happens atomically before the apply call, so concurrent
/// triggers resolve deterministically to accept-first/reject-rest. The
/// batch is a single atomic unit, never reordered, split, or partially
/// replayed; all-or-nothing application is the backend's contract.
#[derive(Debug, Default)]
pub struct TransactionSubmitter {
    state: Mutex<SubmitState>,
    last_committed: RwLock<Option<CommittedTransaction>>,
}

impl TransactionSubmitter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> SubmitState {
        *self.state.lock()
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.state() == SubmitState::Submitting
    }

    /// The snapshot frozen by the last successful submit, if any.
    #[must_use]
    pub fn last_committed(&self) -> Option<CommittedTransaction> {
        self.last_committed.read().clone()
    }

    /// Submits the stager's current list as one atomic batch.
    ///
    /// Rejects with [`SubmitError::InFlight`], with no side effect, if
    /// a submit is already outstanding. On success the stager is cleared,
    /// the committed snapshot stored, and the backend response returned.
    /// On failure the staged list is left completely unchanged and the
    /// submitter returns to idle, so the caller can retry verbatim.
    ///
    /// The stager stays unlocked while the apply call is outstanding;
    /// callers are expected to disable edit controls during a submit.
    pub async fn submit(
        &self,
        stager: &TransactionStager,
        apply: &dyn ApplyTransaction,
    ) -> SubmitResult<TransactionResponse> {
        {
            let mut state = self.state.lock();
            if *state == SubmitState::Submitting {
                return Err(SubmitError::InFlight);
            }
            *state = SubmitState::Submitting;
        }

        let operations = stager.snapshot();
        info!("submitting {} staged operations", operations.len());

        match apply.apply(operations.clone()).await {
            Ok(response) => {
                stager.discard_all();
                *self.last_committed.write() = Some(CommittedTransaction {
                    operations,
                    response: response.clone(),
                });
                *self.state.lock() = SubmitState::Committed;
                debug!("transaction committed");
                Ok(response)
            }
            Err(err) => {
                *self.state.lock() = SubmitState::Idle;
                warn!("transaction rejected by backend: {err}; staged operations retained");
                Err(SubmitError::Backend(err))
            }
        }
    }
}
