use crate::{SchemaError, SchemaResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Editor hints attached to a schema field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaFieldEditorInfo {
    /// Overrides the field's declared name in display contexts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// When true, the field's integer payload is currency encoded as a
    /// count of minor fractional units (nibblins), not a plain integer.
    #[serde(default)]
    pub nibblins: bool,
}

impl SchemaFieldEditorInfo {
    /// Editor info that only overrides the display name.
    #[must_use]
    pub fn with_display_name(name: impl Into<String>) -> Self {
        Self {
            display_name: Some(name.into()),
            nibblins: false,
        }
    }

    /// Editor info marking the field as minor-unit currency.
    #[must_use]
    pub fn financial() -> Self {
        Self {
            display_name: None,
            nibblins: true,
        }
    }

    #[must_use]
    pub fn financial_named(name: impl Into<String>) -> Self {
        Self {
            display_name: Some(name.into()),
            nibblins: true,
        }
    }
}

/// One declared field of a kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaField {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editor: Option<SchemaFieldEditorInfo>,
}

impl SchemaField {
    #[must_use]
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            editor: None,
        }
    }

    #[must_use]
    pub fn with_editor(mut self, editor: SchemaFieldEditorInfo) -> Self {
        self.editor = Some(editor);
        self
    }

    /// Display label: the editor override if present, else the declared name.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.editor
            .as_ref()
            .and_then(|e| e.display_name.as_deref())
            .unwrap_or(&self.name)
    }
}

/// A kind's declared, ordered field list.
///
/// Field display order is this declared order, not the order values
/// happen to be stored on an entity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaKind {
    pub fields: Vec<SchemaField>,
}

impl SchemaKind {
    #[must_use]
    pub fn new(fields: Vec<SchemaField>) -> Self {
        Self { fields }
    }
}

/// Mapping from kind name to kind metadata. Kind names are unique.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    pub kinds: HashMap<String, SchemaKind>,
}

impl Schema {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a kind, replacing any previous definition under the same name.
    #[must_use]
    pub fn with_kind(mut self, name: impl Into<String>, kind: SchemaKind) -> Self {
        self.kinds.insert(name.into(), kind);
        self
    }

    /// Looks up a kind by name.
    pub fn kind(&self, name: &str) -> SchemaResult<&SchemaKind> {
        self.kinds
            .get(name)
            .ok_or_else(|| SchemaError::KindNotFound(name.to_string()))
    }

    #[must_use]
    pub fn contains_kind(&self, name: &str) -> bool {
        self.kinds.contains_key(name)
    }
}
