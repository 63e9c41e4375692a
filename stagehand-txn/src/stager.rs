use parking_lot::RwLock;
use stagehand_types::MetaOperation;
use tracing::debug;

/// The ordered list of operations staged in this session.
///
/// Append order is commit order. The list is only ever replaced
/// wholesale (cleared on discard or successful submit), never partially
/// mutated; there is no remove-one or reorder. Staging performs no schema
/// validation: that is the backend's job at submit time.
///
/// All methods are synchronous and suspension-free.
#[derive(Debug, Default)]
pub struct TransactionStager {
    operations: RwLock<Vec<MetaOperation>>,
}

impl TransactionStager {
    /// Creates an empty stager (the session's starting state).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an operation to the end of the staged list.
    pub fn append(&self, operation: MetaOperation) {
        let mut operations = self.operations.write();
        operations.push(operation);
        debug!("staged operation {} appended", operations.len() - 1);
    }

    /// Atomically replaces the staged list with an empty one.
    /// Idempotent: discarding an empty list is a no-op.
    pub fn discard_all(&self) {
        let mut operations = self.operations.write();
        if !operations.is_empty() {
            debug!("discarding {} staged operations", operations.len());
        }
        *operations = Vec::new();
    }

    /// Read-only copy of the current staged list.
    #[must_use]
    pub fn snapshot(&self) -> Vec<MetaOperation> {
        self.operations.read().clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.operations.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.operations.read().is_empty()
    }
}
