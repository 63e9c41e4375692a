//! The operation sum type staged into a pending transaction.

use crate::{Key, MetaEntity};
use serde::{Deserialize, Serialize};

/// One pending operation against the store.
///
/// Exactly one request shape per value, enforced by the type. The wire
/// form is adjacently tagged; a tag introduced server-side after this
/// client was built deserializes to [`MetaOperation::Unknown`] so it fails
/// closed (classified and rendered as unknown) instead of mismatching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", content = "data", rename_all = "snake_case")]
pub enum MetaOperation {
    /// Create a new entity of the named kind. The entity's key may be
    /// absent (store-assigned on commit) or name-addressed.
    Create {
        kind_name: String,
        entity: MetaEntity,
    },
    /// Replace the entity identified by its (required) key.
    Update { entity: MetaEntity },
    /// Delete the entity identified by the key.
    Delete { key: Key },
    /// Read a single entity. Not a mutation; carried for completeness.
    Get { key: Key },
    /// List entities of a kind. Not a mutation.
    List {
        kind_name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        limit: Option<u32>,
    },
    /// Fail-closed arm for request kinds this client does not know.
    #[serde(other)]
    Unknown,
}

impl MetaOperation {
    /// True for operations that change store state when committed.
    #[must_use]
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            MetaOperation::Create { .. } | MetaOperation::Update { .. } | MetaOperation::Delete { .. }
        )
    }
}
