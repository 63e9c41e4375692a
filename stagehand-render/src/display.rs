use serde::{Deserialize, Serialize};
use stagehand_types::Key;
use std::fmt;

/// A field value converted for display.
///
/// The presentation layer decides how each variant looks (a link widget
/// for `Link`, a check icon for `Flag`, ...); the `Display` impl provides
/// the plain-text fallback for each of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum DisplayValue {
    Text(String),
    Integer(i64),
    Unsigned(u64),
    Float(f64),
    /// Exact decimal currency string, e.g. `"1234.5678"`.
    Currency(String),
    /// Reference to another entity, rendered as a navigation link.
    Link(Key),
    Flag(bool),
    /// Local display string for a POSIX timestamp.
    Timestamp(String),
    /// No value present for the field.
    Absent,
    /// Present but not meaningfully displayable (raw bytes).
    Opaque,
    /// Value of a type this client does not know, or a declared-type /
    /// payload mismatch; `tag` is the declared type's raw tag.
    Unknown { tag: u32 },
}

impl DisplayValue {
    #[must_use]
    pub fn is_absent(&self) -> bool {
        matches!(self, DisplayValue::Absent)
    }
}

impl fmt::Display for DisplayValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayValue::Text(s) => write!(f, "{s}"),
            DisplayValue::Integer(n) => write!(f, "{n}"),
            DisplayValue::Unsigned(n) => write!(f, "{n}"),
            DisplayValue::Float(x) => write!(f, "{x}"),
            DisplayValue::Currency(s) => write!(f, "{s}"),
            DisplayValue::Link(key) => write!(f, "{}", key.prettify()),
            DisplayValue::Flag(true) => write!(f, "yes"),
            DisplayValue::Flag(false) => write!(f, "-"),
            DisplayValue::Timestamp(s) => write!(f, "{s}"),
            DisplayValue::Absent => write!(f, "-"),
            DisplayValue::Opaque => write!(f, "(bytes)"),
            DisplayValue::Unknown { tag } => write!(f, "(unknown type {tag})"),
        }
    }
}
