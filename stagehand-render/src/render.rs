use crate::display::DisplayValue;
use crate::financial::{nibblins_to_decimal, unsigned_nibblins_to_decimal};
use chrono::{DateTime, Local, Utc};
use stagehand_schema::{SchemaField, SchemaFieldEditorInfo};
use stagehand_types::{FieldValue, MetaEntity, Payload, ValueType};
use tracing::warn;

/// Converts a typed field value for display.
///
/// Pure and total: every declared type has an arm, a declared-type /
/// payload mismatch degrades to [`DisplayValue::Unknown`] annotated with
/// the declared type's raw tag, and the unknown arm itself never fails.
#[must_use]
pub fn render_value(value: &FieldValue, editor: Option<&SchemaFieldEditorInfo>) -> DisplayValue {
    let financial = editor.is_some_and(|e| e.nibblins);
    match (value.value_type, &value.payload) {
        (ValueType::String, Payload::String(s)) => DisplayValue::Text(s.clone()),
        (ValueType::Double, Payload::Double(x)) => DisplayValue::Float(*x),
        (ValueType::Int64, Payload::Int64(n)) => {
            if financial {
                DisplayValue::Currency(nibblins_to_decimal(*n))
            } else {
                DisplayValue::Integer(*n)
            }
        }
        (ValueType::Uint64, Payload::Uint64(n)) => {
            if financial {
                DisplayValue::Currency(unsigned_nibblins_to_decimal(*n))
            } else {
                DisplayValue::Unsigned(*n)
            }
        }
        (ValueType::Key, Payload::Key(Some(key))) => DisplayValue::Link(key.clone()),
        (ValueType::Key, Payload::Key(None)) => DisplayValue::Absent,
        (ValueType::Boolean, Payload::Boolean(b)) => DisplayValue::Flag(*b),
        (ValueType::Timestamp, Payload::Timestamp { seconds, nanos }) => {
            render_timestamp(*seconds, *nanos)
        }
        (ValueType::Bytes, Payload::Bytes(_)) => DisplayValue::Opaque,
        (ValueType::Unknown(tag), _) => DisplayValue::Unknown { tag },
        (declared, payload) => {
            warn!(
                "field {} declares {:?} but carries a {} payload; rendering degraded",
                value.id,
                declared,
                payload_name(payload)
            );
            DisplayValue::Unknown {
                tag: declared.wire_tag(),
            }
        }
    }
}

/// Renders the field's value on an entity, or the absent marker when the
/// entity has no value for it. Lookup takes the first matching field id.
#[must_use]
pub fn render_field(entity: &MetaEntity, field: &SchemaField) -> DisplayValue {
    match entity.field(field.id) {
        Some(value) => render_value(value, field.editor.as_ref()),
        None => DisplayValue::Absent,
    }
}

/// POSIX seconds to a caller-local display string. Instants chrono cannot
/// represent degrade to the unknown marker rather than failing.
fn render_timestamp(seconds: i64, nanos: i32) -> DisplayValue {
    let nanos = match u32::try_from(nanos) {
        Ok(n) => n,
        Err(_) => {
            return DisplayValue::Unknown {
                tag: ValueType::Timestamp.wire_tag(),
            }
        }
    };
    match DateTime::<Utc>::from_timestamp(seconds, nanos) {
        Some(utc) => DisplayValue::Timestamp(
            utc.with_timezone(&Local)
                .format("%Y-%m-%d %H:%M:%S")
                .to_string(),
        ),
        None => DisplayValue::Unknown {
            tag: ValueType::Timestamp.wire_tag(),
        },
    }
}

fn payload_name(payload: &Payload) -> &'static str {
    match payload {
        Payload::String(_) => "string",
        Payload::Double(_) => "double",
        Payload::Int64(_) => "int64",
        Payload::Uint64(_) => "uint64",
        Payload::Key(_) => "key",
        Payload::Boolean(_) => "boolean",
        Payload::Timestamp { .. } => "timestamp",
        Payload::Bytes(_) => "bytes",
    }
}
