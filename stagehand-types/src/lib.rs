//! Core data model for Stagehand.
//!
//! This crate defines the store-agnostic types shared by every other crate:
//! - Hierarchical entity keys and their canonical string codec
//! - Typed field values and entities
//! - The operation sum type staged into a pending transaction
//! - The transaction response returned by the backend
//!
//! Display conversion and operation summarization live in
//! `stagehand-render` and `stagehand-describe`, not here.

mod entity;
mod key;
mod operation;
mod response;
mod value;

pub use entity::MetaEntity;
pub use key::{Ident, Key, KeyError, KeyResult, KeySegment};
pub use operation::MetaOperation;
pub use response::{OperationResult, TransactionResponse};
pub use value::{FieldValue, Payload, ValueType};
