//! Typed field values.
//!
//! A [`FieldValue`] carries a field id, a declared [`ValueType`], and a
//! [`Payload`] that should match the declared type. A mismatch between the
//! two is a data-corruption condition: downstream rendering degrades to an
//! unknown marker, it never panics.

use crate::Key;
use serde::{Deserialize, Serialize};

/// Declared type tag of a field value.
///
/// A closed set plus an [`ValueType::Unknown`] fallback carrying the raw
/// wire tag, so values of types introduced server-side after this client
/// was built degrade gracefully instead of failing to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueType {
    String,
    Double,
    Int64,
    Uint64,
    Key,
    Boolean,
    Timestamp,
    Bytes,
    /// Forward-compatibility fallback carrying the raw wire tag.
    Unknown(u32),
}

impl ValueType {
    /// Stable numeric tag for the declared type, used by degraded
    /// rendering to annotate unknown markers.
    #[must_use]
    pub fn wire_tag(self) -> u32 {
        match self {
            ValueType::String => 1,
            ValueType::Double => 2,
            ValueType::Int64 => 3,
            ValueType::Uint64 => 4,
            ValueType::Key => 5,
            ValueType::Boolean => 6,
            ValueType::Timestamp => 7,
            ValueType::Bytes => 8,
            ValueType::Unknown(tag) => tag,
        }
    }
}

/// The actual data carried by a field value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Payload {
    String(String),
    Double(f64),
    Int64(i64),
    Uint64(u64),
    /// A reference to another entity. `None` when the referenced entity
    /// has no assigned key yet.
    Key(Option<Key>),
    Boolean(bool),
    /// POSIX timestamp.
    Timestamp { seconds: i64, nanos: i32 },
    Bytes(Vec<u8>),
}

/// A single typed field on an entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldValue {
    /// Schema field id this value belongs to.
    pub id: i64,
    /// Declared type; should match the payload variant.
    pub value_type: ValueType,
    pub payload: Payload,
}

impl FieldValue {
    #[must_use]
    pub fn string(id: i64, value: impl Into<String>) -> Self {
        Self {
            id,
            value_type: ValueType::String,
            payload: Payload::String(value.into()),
        }
    }

    #[must_use]
    pub fn double(id: i64, value: f64) -> Self {
        Self {
            id,
            value_type: ValueType::Double,
            payload: Payload::Double(value),
        }
    }

    #[must_use]
    pub fn int64(id: i64, value: i64) -> Self {
        Self {
            id,
            value_type: ValueType::Int64,
            payload: Payload::Int64(value),
        }
    }

    #[must_use]
    pub fn uint64(id: i64, value: u64) -> Self {
        Self {
            id,
            value_type: ValueType::Uint64,
            payload: Payload::Uint64(value),
        }
    }

    #[must_use]
    pub fn key(id: i64, value: Option<Key>) -> Self {
        Self {
            id,
            value_type: ValueType::Key,
            payload: Payload::Key(value),
        }
    }

    #[must_use]
    pub fn boolean(id: i64, value: bool) -> Self {
        Self {
            id,
            value_type: ValueType::Boolean,
            payload: Payload::Boolean(value),
        }
    }

    #[must_use]
    pub fn timestamp(id: i64, seconds: i64, nanos: i32) -> Self {
        Self {
            id,
            value_type: ValueType::Timestamp,
            payload: Payload::Timestamp { seconds, nanos },
        }
    }

    #[must_use]
    pub fn bytes(id: i64, value: Vec<u8>) -> Self {
        Self {
            id,
            value_type: ValueType::Bytes,
            payload: Payload::Bytes(value),
        }
    }
}
