//! Schema-driven extraction of raw field values from one line
//!
//! This is the first of the two record construction phases: every field is
//! cut out of the line, trimmed and checked against its character class.
//! Semantic typing happens afterwards in the record kind's validator.

use crate::constants::MAX_RECORD_LENGTH;
use crate::error::{LockboxError, ParseError};
use crate::field::{FieldDef, FieldType};
use crate::schema::FieldSchema;
use tracing::trace;

/// Validated, trimmed field text in column order.
///
/// `None` marks a [`FieldType::Blank`] field, which never carries a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFields {
    entries: Vec<(&'static FieldDef, Option<String>)>,
}

impl RawFields {
    /// Raw value of a field; `None` for unknown and Blank fields alike
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(field, _)| field.name == name)
            .and_then(|(_, value)| value.as_deref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(field, _)| field.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static FieldDef, Option<&str>)> + '_ {
        self.entries
            .iter()
            .map(|(field, value)| (*field, value.as_deref()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn into_entries(self) -> Vec<(&'static FieldDef, Option<String>)> {
        self.entries
    }
}

/// Extract and class-check every field of `schema` from `raw_text`.
///
/// The schema is checked before the text is looked at, so a broken layout
/// always surfaces as a definition error. `max_record_length` can tighten the
/// line length limit but never raise it past [`MAX_RECORD_LENGTH`]. Any field
/// mismatch fails the whole record.
pub fn parse_fields(
    raw_text: &str,
    schema: &FieldSchema,
    max_record_length: usize,
) -> Result<RawFields, LockboxError> {
    schema.validated()?;

    let limit = max_record_length.min(MAX_RECORD_LENGTH);
    if raw_text.len() > limit {
        return Err(ParseError::RecordTooLong {
            length: raw_text.len(),
            max: limit,
        }
        .into());
    }

    let mut entries = Vec::with_capacity(schema.field_count());
    for field in schema.fields() {
        let extracted = field.extract(raw_text);
        let value = extracted.trim();

        if !field.field_type.matches(value) {
            return Err(ParseError::FieldTypeMismatch {
                field_name: field.name.to_string(),
                expected_type: field.field_type,
                actual_value: extracted.into_owned(),
            }
            .into());
        }

        let stored = match field.field_type {
            FieldType::Blank => None,
            _ => Some(value.to_string()),
        };
        entries.push((field, stored));
    }

    trace!(
        "Parsed {} fields for {} ({} columns)",
        entries.len(),
        schema.kind_name,
        raw_text.len()
    );

    Ok(RawFields { entries })
}
