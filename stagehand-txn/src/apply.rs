//! The caller-supplied backend seam.

use async_trait::async_trait;
use stagehand_types::{MetaOperation, TransactionResponse};

/// Applies a staged batch to the backend store.
///
/// Implementations must be all-or-nothing: either every operation in the
/// batch is applied, in list order, or none are. Errors are opaque to the
/// core and surface to the caller verbatim. The apply call is the only
/// suspension point in the submit path; any timeout an implementation
/// imposes surfaces as an ordinary failure.
#[async_trait]
pub trait ApplyTransaction: Send + Sync {
    async fn apply(&self, operations: Vec<MetaOperation>) -> anyhow::Result<TransactionResponse>;
}
