//! Immediate address header (record type 1)

use super::RecordValidator;
use crate::datetime::DateOrder;
use crate::error::DefinitionError;
use crate::field::{FieldDef, FieldType};
use crate::models::FieldValues;
use crate::schema::FieldSchema;

static FIELDS: &[FieldDef] = &[
    FieldDef::new("priority_code", 1, 3, FieldType::Numeric),
    FieldDef::new("destination_id", 3, 13, FieldType::Alphanumeric),
    FieldDef::new("originating_trn", 13, 23, FieldType::Numeric),
    FieldDef::new("processing_date", 23, 29, FieldType::Numeric),
    FieldDef::new("processing_time", 29, 33, FieldType::Numeric),
    FieldDef::new("filler", 33, 104, FieldType::AlphanumericOrBlank),
];

pub static SCHEMA: FieldSchema = FieldSchema::new("ImmediateAddressHeader", FIELDS);

pub struct ImmediateAddressHeader;

impl RecordValidator for ImmediateAddressHeader {
    fn validate(&self, values: &mut FieldValues) -> Result<(), DefinitionError> {
        values.convert_date("processing_date", DateOrder::Yymmdd)?;
        values.convert_time("processing_time")?;
        Ok(())
    }
}
