//! Schema metadata for Stagehand.
//!
//! The caller supplies an immutable [`Schema`] describing the kinds the
//! store holds: each kind has an ordered field list, and each field may
//! carry editor hints (a display-name override, and a flag marking
//! integer payloads as minor-unit currency). This crate performs no
//! caching or invalidation; the caller is responsible for supplying a
//! schema consistent with the operations being described.

mod schema;

pub use schema::{Schema, SchemaField, SchemaFieldEditorInfo, SchemaKind};

/// Result type for schema lookups.
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Errors that can occur during schema lookup.
///
/// A lookup miss is never fatal: callers recover by producing an empty
/// diff or a fallback label.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    #[error("kind not found in schema: {0}")]
    KindNotFound(String),
}
