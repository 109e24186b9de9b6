//! Batch total and service total records (types 7 and 8)

use super::RecordValidator;
use crate::datetime::DateOrder;
use crate::error::DefinitionError;
use crate::field::{FieldDef, FieldType};
use crate::models::FieldValues;
use crate::schema::FieldSchema;

static BATCH_TOTAL_FIELDS: &[FieldDef] = &[
    FieldDef::new("batch_number", 1, 4, FieldType::AlphanumericOrBlank),
    FieldDef::new("item_number", 4, 7, FieldType::AlphanumericOrBlank),
    FieldDef::new("lockbox_number", 7, 14, FieldType::AlphanumericOrBlank),
    FieldDef::new("deposit_date", 14, 20, FieldType::AlphanumericOrBlank),
    FieldDef::new("total_number_remittances", 20, 23, FieldType::AlphanumericOrBlank),
    FieldDef::new("check_dollar_total", 23, 33, FieldType::Numeric),
    FieldDef::new("filler", 33, 81, FieldType::AlphanumericOrBlank),
];

pub static BATCH_TOTAL_SCHEMA: FieldSchema =
    FieldSchema::new("BatchTotalRecord", BATCH_TOTAL_FIELDS);

static SERVICE_TOTAL_FIELDS: &[FieldDef] = &[
    FieldDef::new("batch_number", 1, 4, FieldType::Numeric),
    FieldDef::new("item_number", 4, 7, FieldType::Numeric),
    FieldDef::new("lockbox_number", 7, 14, FieldType::AlphanumericOrBlank),
    FieldDef::new("deposit_date", 14, 20, FieldType::Numeric),
    FieldDef::new("total_num_checks", 20, 24, FieldType::Numeric),
    FieldDef::new("check_dollar_total", 24, 34, FieldType::Numeric),
    FieldDef::new("last_record_indicator", 34, 35, FieldType::AlphanumericOrBlank),
    FieldDef::new("filler", 35, 104, FieldType::AlphanumericOrBlank),
];

pub static SERVICE_TOTAL_SCHEMA: FieldSchema =
    FieldSchema::new("ServiceTotalRecord", SERVICE_TOTAL_FIELDS);

pub struct BatchTotalRecord;

impl RecordValidator for BatchTotalRecord {
    fn validate(&self, values: &mut FieldValues) -> Result<(), DefinitionError> {
        values.convert_integer("batch_number")?;
        values.convert_integer("item_number")?;
        values.convert_date("deposit_date", DateOrder::Yymmdd)?;
        values.convert_integer("total_number_remittances")?;
        values.convert_amount("check_dollar_total")?;
        Ok(())
    }
}

pub struct ServiceTotalRecord;

impl RecordValidator for ServiceTotalRecord {
    fn validate(&self, values: &mut FieldValues) -> Result<(), DefinitionError> {
        values.convert_integer("batch_number")?;
        values.convert_integer("item_number")?;
        values.convert_date("deposit_date", DateOrder::Yymmdd)?;
        values.convert_integer("total_num_checks")?;
        values.convert_amount("check_dollar_total")?;
        Ok(())
    }
}
