//! Destination trailer record (record type 9)

use super::RecordValidator;
use crate::error::DefinitionError;
use crate::field::{FieldDef, FieldType};
use crate::models::FieldValues;
use crate::schema::FieldSchema;

static FIELDS: &[FieldDef] = &[
    FieldDef::new("total_num_records", 1, 7, FieldType::Numeric),
    FieldDef::new("filler", 7, 80, FieldType::Blank),
];

pub static SCHEMA: FieldSchema = FieldSchema::new("DestinationTrailerRecord", FIELDS);

pub struct DestinationTrailerRecord;

impl RecordValidator for DestinationTrailerRecord {
    fn validate(&self, values: &mut FieldValues) -> Result<(), DefinitionError> {
        values.convert_integer("total_num_records")?;
        Ok(())
    }
}
