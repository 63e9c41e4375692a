//! Operation descriptors for Stagehand.
//!
//! Turns a staged [`MetaOperation`](stagehand_types::MetaOperation) into
//! what a review screen needs for one row: a classification, the affected
//! entity (a real key, or a forward reference to an entity being created
//! in the same batch), and a schema-ordered field diff. Everything here is
//! read-only over the staged list; descriptor failures degrade (empty
//! diff, no target) and are never fatal.

mod descriptor;

pub use descriptor::{
    affected_target, classify, field_diff_lines, summarize, summarize_all, AffectedTarget,
    DiffLine, OpKind, OperationSummary,
};
