//! Record shape validation.
//!
//! A record must have exactly the fields `type` and `content`, both strings.
//! Whether `type` names a known content type is left to the renderer.

use indexmap::IndexMap;
use serde_json::Value;

use blockmark_core::ContentBlock;

/// One raw input record, fields kept in source order
pub type Record = IndexMap<String, Value>;

/// Field holding the content type name
pub const TYPE_FIELD: &str = "type";

/// Field holding the content payload
pub const CONTENT_FIELD: &str = "content";

/// Every field a record must carry
pub const FIELD_NAMES: [&str; 2] = [TYPE_FIELD, CONTENT_FIELD];

/// A record with an unexpected shape
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("expected {expected} fields, got {} ({})", .found.len(), .found.join(", "))]
    FieldCount { found: Vec<String>, expected: usize },

    #[error("unexpected field `{name}`, allowed fields: {}", FIELD_NAMES.join(", "))]
    UnexpectedField { name: String },

    #[error("field `{field}` holds {kind}, expected a string")]
    NonStringValue { field: String, kind: &'static str },
}

/// Check the shape of a record
pub fn validate(record: &Record) -> Result<(), ValidationError> {
    validate_record(record).map(|_| ())
}

/// Check the shape of a record and extract its block
pub fn validate_record(record: &Record) -> Result<ContentBlock, ValidationError> {
    if record.len() != FIELD_NAMES.len() {
        return Err(ValidationError::FieldCount {
            found: record.keys().cloned().collect(),
            expected: FIELD_NAMES.len(),
        });
    }

    let mut kind = None;
    let mut content = None;
    for (field, value) in record {
        let slot = match field.as_str() {
            TYPE_FIELD => &mut kind,
            CONTENT_FIELD => &mut content,
            _ => {
                return Err(ValidationError::UnexpectedField {
                    name: field.clone(),
                })
            }
        };
        match value {
            Value::String(s) => *slot = Some(s.as_str()),
            other => {
                return Err(ValidationError::NonStringValue {
                    field: field.clone(),
                    kind: value_kind(other),
                })
            }
        }
    }

    match (kind, content) {
        (Some(kind), Some(content)) => Ok(ContentBlock::new(kind, content)),
        // Not reachable for two distinct allowed keys.
        _ => Err(ValidationError::FieldCount {
            found: record.keys().cloned().collect(),
            expected: FIELD_NAMES.len(),
        }),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
