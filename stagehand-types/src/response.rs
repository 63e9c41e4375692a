//! Backend response to an applied transaction.

use crate::MetaEntity;
use serde::{Deserialize, Serialize};

/// Response returned by the backend after atomically applying a batch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionResponse {
    /// One result per submitted operation, in commit order.
    pub results: Vec<OperationResult>,
}

/// Result of a single committed operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OperationResult {
    /// The stored entity, with its store-assigned key, for operations
    /// that return one (creates, updates, deletes).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity: Option<MetaEntity>,
}

impl TransactionResponse {
    #[must_use]
    pub fn new(results: Vec<OperationResult>) -> Self {
        Self { results }
    }
}

impl OperationResult {
    #[must_use]
    pub fn with_entity(entity: MetaEntity) -> Self {
        Self {
            entity: Some(entity),
        }
    }
}
