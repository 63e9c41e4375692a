use crate::{FieldValue, Key};
use serde::{Deserialize, Serialize};

/// An entity as exchanged with the store: an optional key plus an ordered
/// list of typed field values.
///
/// The key is absent while the entity has not been persisted (inside a
/// staged create operation). Field ids are not uniqueness-enforced at this
/// layer; lookup takes the first match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetaEntity {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<Key>,
    pub values: Vec<FieldValue>,
}

impl MetaEntity {
    #[must_use]
    pub fn new(key: Option<Key>) -> Self {
        Self {
            key,
            values: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_values(key: Option<Key>, values: Vec<FieldValue>) -> Self {
        Self { key, values }
    }

    /// First value whose field id matches. Duplicate ids beyond the first
    /// are ignored.
    #[must_use]
    pub fn field(&self, id: i64) -> Option<&FieldValue> {
        self.values.iter().find(|v| v.id == id)
    }
}
