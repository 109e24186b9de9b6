//! Service record (record type 2)

use super::RecordValidator;
use crate::field::{FieldDef, FieldType};
use crate::schema::FieldSchema;

static FIELDS: &[FieldDef] = &[
    FieldDef::new("destination", 1, 11, FieldType::AlphanumericOrBlank),
    FieldDef::new("bank_origin", 11, 21, FieldType::AlphanumericOrBlank),
    FieldDef::new("reference_code", 21, 31, FieldType::AlphanumericOrBlank),
    FieldDef::new("service_code", 31, 34, FieldType::AlphanumericOrBlank),
    FieldDef::new("record_length", 34, 37, FieldType::AlphanumericOrBlank),
    FieldDef::new("characters_per_block", 37, 41, FieldType::AlphanumericOrBlank),
    FieldDef::new("partial_compression", 41, 42, FieldType::AlphanumericOrBlank),
    FieldDef::new("filler", 42, 81, FieldType::Blank),
];

pub static SCHEMA: FieldSchema = FieldSchema::new("ServiceRecord", FIELDS);

/// All service record fields stay as text
pub struct ServiceRecord;

impl RecordValidator for ServiceRecord {}
