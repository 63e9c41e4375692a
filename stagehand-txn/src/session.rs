use crate::apply::ApplyTransaction;
use crate::error::SubmitResult;
use crate::stager::TransactionStager;
use crate::submitter::{CommittedTransaction, SubmitState, TransactionSubmitter};
use stagehand_types::{MetaOperation, TransactionResponse};

/// The session's pending-transaction state: the staged operation list and
/// the submit state machine, bundled as one explicitly constructed object.
///
/// Callers create one per session and pass it by reference to edit flows
/// (append), to display layers (snapshot), and to the save flow (submit /
/// discard). The staged list and the in-flight flag are owned here
/// exclusively and mutated only through these methods.
#[derive(Debug, Default)]
pub struct PendingTransaction {
    stager: TransactionStager,
    submitter: TransactionSubmitter,
}

impl PendingTransaction {
    /// Empty pending transaction (session start).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&self, operation: MetaOperation) {
        self.stager.append(operation);
    }

    pub fn discard_all(&self) {
        self.stager.discard_all();
    }

    #[must_use]
    pub fn snapshot(&self) -> Vec<MetaOperation> {
        self.stager.snapshot()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.stager.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stager.is_empty()
    }

    #[must_use]
    pub fn state(&self) -> SubmitState {
        self.submitter.state()
    }

    #[must_use]
    pub fn last_committed(&self) -> Option<CommittedTransaction> {
        self.submitter.last_committed()
    }

    /// Submits the staged list as one atomic batch. See
    /// [`TransactionSubmitter::submit`].
    pub async fn submit(&self, apply: &dyn ApplyTransaction) -> SubmitResult<TransactionResponse> {
        self.submitter.submit(&self.stager, apply).await
    }
}
