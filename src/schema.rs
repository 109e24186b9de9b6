//! Static field schemas for lockbox record kinds
//!
//! A schema is the column layout of one record kind. Layouts are fixed at
//! compile time, so [`FieldSchema::check`] runs before any text is examined
//! and turns layout mistakes into [`DefinitionError`]s instead of letting a
//! later field silently shadow an earlier one. [`FieldSchema::validated`]
//! runs that check once per schema and remembers the outcome.

use crate::constants::{MAX_RECORD_LENGTH, RECORD_TYPE_FIELD, RECORD_TYPE_LOCATION};
use crate::error::DefinitionError;
use crate::field::{FieldDef, FieldType};
use std::collections::HashSet;
use std::sync::OnceLock;

/// The implicit first-column field shared by every record kind
pub static RECORD_TYPE: FieldDef = FieldDef::new(
    RECORD_TYPE_FIELD,
    RECORD_TYPE_LOCATION.0,
    RECORD_TYPE_LOCATION.1,
    FieldType::Numeric,
);

/// Column layout of one record kind
#[derive(Debug)]
pub struct FieldSchema {
    pub kind_name: &'static str,
    fields: &'static [FieldDef],
    checked: OnceLock<Result<(), DefinitionError>>,
}

impl FieldSchema {
    pub const fn new(kind_name: &'static str, fields: &'static [FieldDef]) -> Self {
        Self {
            kind_name,
            fields,
            checked: OnceLock::new(),
        }
    }

    /// All fields in column order, the implicit record type first
    pub fn fields(&self) -> impl Iterator<Item = &'static FieldDef> {
        std::iter::once(&RECORD_TYPE).chain(self.fields.iter())
    }

    /// Number of fields including the record type
    pub fn field_count(&self) -> usize {
        self.fields.len() + 1
    }

    /// Rightmost column any field reaches
    pub fn width(&self) -> usize {
        self.fields().map(|field| field.end).max().unwrap_or(0)
    }

    /// Validate the layout itself.
    ///
    /// Rejects duplicate names (including a redeclared record type), empty or
    /// inverted ranges, ranges beyond [`MAX_RECORD_LENGTH`] and overlapping
    /// ranges.
    pub fn check(&self) -> Result<(), DefinitionError> {
        let mut seen = HashSet::with_capacity(self.field_count());
        for field in self.fields() {
            if !seen.insert(field.name) {
                return Err(DefinitionError::duplicate_field(self.kind_name, field.name));
            }
            if field.width() == 0 || field.end > MAX_RECORD_LENGTH {
                return Err(DefinitionError::FieldOutOfBounds {
                    field_name: field.name.to_string(),
                    start: field.start,
                    end: field.end,
                    max: MAX_RECORD_LENGTH,
                });
            }
        }

        let mut by_column: Vec<&'static FieldDef> = self.fields().collect();
        by_column.sort_by_key(|field| field.start);
        for pair in by_column.windows(2) {
            if pair[1].start < pair[0].end {
                return Err(DefinitionError::OverlappingFields {
                    kind: self.kind_name.to_string(),
                    first: pair[0].name.to_string(),
                    second: pair[1].name.to_string(),
                });
            }
        }

        Ok(())
    }

    /// Result of [`FieldSchema::check`], computed on first use
    pub fn validated(&self) -> Result<(), DefinitionError> {
        self.checked.get_or_init(|| self.check()).clone()
    }
}
