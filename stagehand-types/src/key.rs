//! Hierarchical entity keys and their canonical string codec.
//!
//! A key is an ordered, non-empty path of `kind:identifier` segments.
//! Identifiers are either numeric ids or opaque name strings assigned by
//! the store. The final segment's identifier may be absent, meaning the
//! store has not assigned one yet; such keys only appear inside
//! not-yet-submitted create operations.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Joins segments in the canonical string form.
const SEGMENT_SEPARATOR: char = '/';
/// Joins a segment's kind and identifier.
const IDENT_SEPARATOR: char = ':';

/// Result type for key codec operations.
pub type KeyResult<T> = Result<T, KeyError>;

/// Errors produced by the key codec.
///
/// Both variants are recoverable values; the codec never panics on bad
/// input and callers are expected to fall back to degraded display text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    /// The key violates a structural invariant and cannot be encoded.
    #[error("invalid key: {0}")]
    InvalidKey(String),

    /// The input string is not a canonical key encoding.
    #[error("malformed key string: {0}")]
    MalformedKey(String),
}

/// A segment identifier: a numeric id or a name string assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ident {
    Id(i64),
    Name(String),
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ident::Id(id) => write!(f, "{id}"),
            Ident::Name(name) => write!(f, "{name}"),
        }
    }
}

/// One `kind:identifier` step in a key path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeySegment {
    /// The entity kind this segment addresses. Never empty in a valid key.
    pub kind: String,
    /// `None` means the store has not assigned an identifier yet.
    /// Legal only on the final segment of a key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ident: Option<Ident>,
}

impl KeySegment {
    /// Segment addressed by a numeric id.
    #[must_use]
    pub fn id(kind: impl Into<String>, id: i64) -> Self {
        Self {
            kind: kind.into(),
            ident: Some(Ident::Id(id)),
        }
    }

    /// Segment addressed by a name string.
    #[must_use]
    pub fn name(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            ident: Some(Ident::Name(name.into())),
        }
    }

    /// Segment whose identifier the store has not assigned yet.
    #[must_use]
    pub fn incomplete(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            ident: None,
        }
    }
}

/// An ordered, non-empty path of segments identifying an entity.
///
/// The canonical string form joins `kind:identifier` pairs with `/`; an
/// absent identifier is encoded as an empty identifier and is legal only
/// on the final segment. [`Key::encode`] and [`Key::decode`] are exact
/// inverses for every well-formed key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Key {
    pub segments: Vec<KeySegment>,
}

impl Key {
    /// Key from a list of segments. Structural validation happens in the
    /// codec, not here; an empty segment list will fail to encode.
    #[must_use]
    pub fn new(segments: Vec<KeySegment>) -> Self {
        Self { segments }
    }

    /// Single-segment key.
    #[must_use]
    pub fn top_level(segment: KeySegment) -> Self {
        Self {
            segments: vec![segment],
        }
    }

    /// Appends a child segment, consuming the key.
    #[must_use]
    pub fn child(mut self, segment: KeySegment) -> Self {
        self.segments.push(segment);
        self
    }

    /// Kind name of the deepest segment, or `None` for an empty key.
    #[must_use]
    pub fn last_kind(&self) -> Option<&str> {
        self.segments.last().map(|s| s.kind.as_str())
    }

    /// True when the final segment has an assigned identifier.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.segments
            .last()
            .is_some_and(|s| s.ident.is_some())
    }

    /// Human-readable label: the final identifier if assigned, otherwise
    /// the final kind name alone (used for not-yet-assigned keys).
    #[must_use]
    pub fn prettify(&self) -> String {
        match self.segments.last() {
            Some(seg) => match &seg.ident {
                Some(ident) => ident.to_string(),
                None => seg.kind.clone(),
            },
            None => String::new(),
        }
    }

    /// Canonical string encoding of the segment path.
    ///
    /// Fails with [`KeyError::InvalidKey`] if the key is empty, a kind
    /// name is empty or contains a separator character, a name identifier
    /// contains a separator character, or a non-final segment has an
    /// absent identifier.
    pub fn encode(&self) -> KeyResult<String> {
        if self.segments.is_empty() {
            return Err(KeyError::InvalidKey("key has no segments".to_string()));
        }
        let last = self.segments.len() - 1;
        let mut out = String::new();
        for (i, seg) in self.segments.iter().enumerate() {
            if seg.kind.is_empty() {
                return Err(KeyError::InvalidKey(format!(
                    "segment {i} has an empty kind name"
                )));
            }
            if seg.kind.contains(SEGMENT_SEPARATOR) || seg.kind.contains(IDENT_SEPARATOR) {
                return Err(KeyError::InvalidKey(format!(
                    "kind name {:?} contains a separator character",
                    seg.kind
                )));
            }
            if i > 0 {
                out.push(SEGMENT_SEPARATOR);
            }
            out.push_str(&seg.kind);
            out.push(IDENT_SEPARATOR);
            match &seg.ident {
                Some(Ident::Id(id)) => out.push_str(&id.to_string()),
                Some(Ident::Name(name)) => {
                    if name.contains(SEGMENT_SEPARATOR) || name.contains(IDENT_SEPARATOR) {
                        return Err(KeyError::InvalidKey(format!(
                            "name identifier {name:?} contains a separator character"
                        )));
                    }
                    out.push_str(name);
                }
                None => {
                    if i != last {
                        return Err(KeyError::InvalidKey(format!(
                            "segment {i} has no identifier but is not the final segment"
                        )));
                    }
                }
            }
        }
        Ok(out)
    }

    /// Inverse of [`Key::encode`].
    ///
    /// An identifier consisting of a canonical decimal integer parses as
    /// [`Ident::Id`]; anything else parses as [`Ident::Name`]. An empty
    /// identifier means "not yet assigned" and is only accepted on the
    /// final segment.
    pub fn decode(input: &str) -> KeyResult<Self> {
        if input.is_empty() {
            return Err(KeyError::MalformedKey("empty input".to_string()));
        }
        let parts: Vec<&str> = input.split(SEGMENT_SEPARATOR).collect();
        let last = parts.len() - 1;
        let mut segments = Vec::with_capacity(parts.len());
        for (i, part) in parts.iter().enumerate() {
            let Some((kind, ident)) = part.split_once(IDENT_SEPARATOR) else {
                return Err(KeyError::MalformedKey(format!(
                    "segment {i} ({part:?}) has no identifier separator"
                )));
            };
            if kind.is_empty() {
                return Err(KeyError::MalformedKey(format!(
                    "segment {i} has an empty kind name"
                )));
            }
            let ident = if ident.is_empty() {
                if i != last {
                    return Err(KeyError::MalformedKey(format!(
                        "segment {i} has an absent identifier but is not the final segment"
                    )));
                }
                None
            } else if ident.contains(IDENT_SEPARATOR) {
                return Err(KeyError::MalformedKey(format!(
                    "segment {i} has more than one identifier separator"
                )));
            } else {
                Some(parse_ident(ident))
            };
            segments.push(KeySegment {
                kind: kind.to_string(),
                ident,
            });
        }
        Ok(Self { segments })
    }
}

/// An identifier is numeric only when it round-trips as a canonical
/// decimal, so names like `"007"` survive encode/decode unchanged.
fn parse_ident(s: &str) -> Ident {
    match s.parse::<i64>() {
        Ok(id) if id.to_string() == s => Ident::Id(id),
        _ => Ident::Name(s.to_string()),
    }
}

impl FromStr for Key {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}
