use serde::{Deserialize, Serialize};
use stagehand_render::{render_field, DisplayValue};
use stagehand_schema::Schema;
use stagehand_types::{Key, MetaEntity, MetaOperation};
use std::fmt;
use tracing::warn;

/// Classification of a staged operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpKind {
    Create,
    Update,
    Delete,
    Get,
    List,
    Unknown,
}

impl fmt::Display for OpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            OpKind::Create => "Create",
            OpKind::Update => "Update",
            OpKind::Delete => "Delete",
            OpKind::Get => "Get",
            OpKind::List => "List",
            OpKind::Unknown => "(unknown)",
        };
        write!(f, "{label}")
    }
}

/// Exactly one tag per operation; `Unknown` only for request kinds this
/// client does not know (the fail-closed arm).
#[must_use]
pub fn classify(operation: &MetaOperation) -> OpKind {
    match operation {
        MetaOperation::Create { .. } => OpKind::Create,
        MetaOperation::Update { .. } => OpKind::Update,
        MetaOperation::Delete { .. } => OpKind::Delete,
        MetaOperation::Get { .. } => OpKind::Get,
        MetaOperation::List { .. } => OpKind::List,
        MetaOperation::Unknown => OpKind::Unknown,
    }
}

/// The entity a staged operation affects, for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "target", rename_all = "snake_case")]
pub enum AffectedTarget {
    /// A persisted entity, addressed by its key.
    Key { key: Key },
    /// A forward reference to an entity being created in this batch,
    /// addressed by its position in the staged list. Resolved to a real
    /// key only after a successful submit, outside this core.
    Pending { index: usize, label: String },
    /// The operation has no single affected entity (get, list, unknown).
    None,
}

/// Extracts the affected entity of the operation at `staged_index`.
///
/// Creates are always forward references: labelled with the prettified
/// key when one is already assigned, else with the kind name alone.
#[must_use]
pub fn affected_target(operation: &MetaOperation, staged_index: usize) -> AffectedTarget {
    match operation {
        MetaOperation::Create { kind_name, entity } => {
            let label = match &entity.key {
                Some(key) => key.prettify(),
                None => kind_name.clone(),
            };
            AffectedTarget::Pending {
                index: staged_index,
                label,
            }
        }
        MetaOperation::Update { entity } => match &entity.key {
            Some(key) => AffectedTarget::Key { key: key.clone() },
            None => {
                warn!("staged update at index {staged_index} has no key; no target to display");
                AffectedTarget::None
            }
        },
        MetaOperation::Delete { key } => AffectedTarget::Key { key: key.clone() },
        MetaOperation::Get { .. } | MetaOperation::List { .. } | MetaOperation::Unknown => {
            AffectedTarget::None
        }
    }
}

/// One line of a field-level diff: display label plus rendered value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiffLine {
    pub label: String,
    pub value: DisplayValue,
}

/// Field-level diff of a create or update, in schema-declared field order.
///
/// One line per declared field of the target kind; fields the entity
/// carries no value for render as the absent marker. Returns an empty
/// list (not an error) for non-entity operations and when the target kind
/// cannot be resolved.
#[must_use]
pub fn field_diff_lines(operation: &MetaOperation, schema: &Schema) -> Vec<DiffLine> {
    let (entity, kind_name) = match operation {
        MetaOperation::Create { kind_name, entity } => (entity, kind_name.as_str()),
        MetaOperation::Update { entity } => {
            let Some(kind_name) = entity.key.as_ref().and_then(Key::last_kind) else {
                warn!("staged update has no keyed kind; omitting field diff");
                return Vec::new();
            };
            (entity, kind_name)
        }
        _ => return Vec::new(),
    };
    diff_against_kind(entity, kind_name, schema)
}

fn diff_against_kind(entity: &MetaEntity, kind_name: &str, schema: &Schema) -> Vec<DiffLine> {
    let kind = match schema.kind(kind_name) {
        Ok(kind) => kind,
        Err(err) => {
            warn!("cannot diff staged operation: {err}");
            return Vec::new();
        }
    };
    kind.fields
        .iter()
        .map(|field| DiffLine {
            label: field.display_name().to_string(),
            value: render_field(entity, field),
        })
        .collect()
}

/// Everything a review screen needs for one staged row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationSummary {
    /// Position in the staged list (the commit order).
    pub index: usize,
    pub kind: OpKind,
    pub target: AffectedTarget,
    pub lines: Vec<DiffLine>,
}

/// Describes the operation at `index` for display.
#[must_use]
pub fn summarize(index: usize, operation: &MetaOperation, schema: &Schema) -> OperationSummary {
    OperationSummary {
        index,
        kind: classify(operation),
        target: affected_target(operation, index),
        lines: field_diff_lines(operation, schema),
    }
}

/// Describes a whole staged list, one summary per operation in order.
#[must_use]
pub fn summarize_all(operations: &[MetaOperation], schema: &Schema) -> Vec<OperationSummary> {
    operations
        .iter()
        .enumerate()
        .map(|(index, op)| summarize(index, op, schema))
        .collect()
}
