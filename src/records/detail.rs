//! Detail header, detail and detail overflow records (types 5, 6 and 4)
//!
//! The detail record is the one lenient kind: malformed batch, item, amount
//! and check number values read as zero instead of failing the record. The
//! overflow record reads the same field names strictly.

use super::RecordValidator;
use crate::error::DefinitionError;
use crate::field::{FieldDef, FieldType};
use crate::models::FieldValues;
use crate::schema::FieldSchema;

static HEADER_FIELDS: &[FieldDef] = &[
    FieldDef::new("batch_number", 1, 4, FieldType::AlphanumericOrBlank),
    FieldDef::new("item_number", 4, 7, FieldType::AlphanumericOrBlank),
    FieldDef::new("lockbox_number", 7, 14, FieldType::AlphanumericOrBlank),
    FieldDef::new("deposit_date", 14, 20, FieldType::AlphanumericOrBlank),
    FieldDef::new("destination", 20, 30, FieldType::AlphanumericOrBlank),
    FieldDef::new("origin", 30, 40, FieldType::AlphanumericOrBlank),
    FieldDef::new("filler", 40, 104, FieldType::AlphanumericOrBlank),
];

pub static HEADER_SCHEMA: FieldSchema = FieldSchema::new("DetailHeader", HEADER_FIELDS);

static DETAIL_FIELDS: &[FieldDef] = &[
    FieldDef::new("batch_number", 1, 4, FieldType::AlphanumericOrBlank),
    FieldDef::new("item_number", 4, 7, FieldType::AlphanumericOrBlank),
    FieldDef::new("check_amount", 7, 17, FieldType::AlphanumericOrBlank),
    FieldDef::new("transit_routing_number", 17, 26, FieldType::AlphanumericOrBlank),
    FieldDef::new("dd_account_number", 26, 40, FieldType::AlphanumericOrBlank),
    FieldDef::new("check_number", 40, 50, FieldType::AlphanumericOrBlank),
    FieldDef::new("filler", 50, 77, FieldType::AlphanumericOrBlank),
];

pub static DETAIL_SCHEMA: FieldSchema = FieldSchema::new("DetailRecord", DETAIL_FIELDS);

static OVERFLOW_FIELDS: &[FieldDef] = &[
    FieldDef::new("batch_number", 1, 4, FieldType::AlphanumericOrBlank),
    FieldDef::new("item_number", 4, 7, FieldType::AlphanumericOrBlank),
    FieldDef::new("overflow_record_type", 7, 8, FieldType::AlphanumericOrBlank),
    FieldDef::new("overflow_sequence_number", 8, 10, FieldType::AlphanumericOrBlank),
    FieldDef::new("overflow_code", 10, 11, FieldType::AlphanumericOrBlank),
    FieldDef::new("memo_line", 11, 80, FieldType::AlphanumericOrBlank),
];

pub static OVERFLOW_SCHEMA: FieldSchema = FieldSchema::new("DetailOverflowRecord", OVERFLOW_FIELDS);

pub struct DetailHeader;

impl RecordValidator for DetailHeader {
    fn validate(&self, values: &mut FieldValues) -> Result<(), DefinitionError> {
        // deposit_date is left as text
        values.convert_integer("batch_number")?;
        Ok(())
    }
}

pub struct DetailRecord;

impl RecordValidator for DetailRecord {
    fn validate(&self, values: &mut FieldValues) -> Result<(), DefinitionError> {
        values.convert_integer_lenient("batch_number")?;
        values.convert_integer_lenient("item_number")?;
        values.convert_amount_lenient("check_amount")?;
        values.convert_integer_lenient("check_number")?;
        Ok(())
    }
}

pub struct DetailOverflowRecord;

impl RecordValidator for DetailOverflowRecord {
    fn validate(&self, values: &mut FieldValues) -> Result<(), DefinitionError> {
        values.convert_integer("batch_number")?;
        values.convert_integer("item_number")?;
        values.convert_integer("overflow_record_type")?;
        values.convert_integer("overflow_sequence_number")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::error::DefinitionError;
    use crate::records::RecordKind;
    use rust_decimal::Decimal;

    fn detail_line(batch: &str, item: &str, amount: &str, check_number: &str) -> String {
        format!(
            "6{:3}{:3}{:10}{:9}{:14}{:10}",
            batch, item, amount, "021000021", "12345678901234", check_number
        )
    }

    #[test]
    fn test_parse_detail_header() {
        let line = format!(
            "5{:3}{:3}{:7}{:6}{:10}{:10}",
            "001", "000", "1234567", "250615", "DEST01", "ORIGIN02"
        );
        let record = RecordKind::DetailHeader.parse(&line).unwrap();

        assert_eq!(record.integer("batch_number"), Some(1));
        assert_eq!(record.text("item_number"), Some("000"));
        assert_eq!(record.text("lockbox_number"), Some("1234567"));
        assert_eq!(record.text("deposit_date"), Some("250615"));
        assert_eq!(record.text("destination"), Some("DEST01"));
        assert_eq!(record.text("origin"), Some("ORIGIN02"));
    }

    #[test]
    fn test_detail_header_batch_number_has_no_fallback() {
        let line = format!("5{:3}{:3}{:7}", "AB", "000", "1234567");
        let err = RecordKind::DetailHeader.parse(&line).unwrap_err();
        assert_eq!(
            err.as_definition_error(),
            Some(&DefinitionError::invalid_integer("batch_number", "AB"))
        );
    }

    #[test]
    fn test_parse_detail_record() {
        let line = detail_line("001", "002", "0000012345", "0000001001");
        let record = RecordKind::DetailRecord.parse(&line).unwrap();

        assert_eq!(record.integer("batch_number"), Some(1));
        assert_eq!(record.integer("item_number"), Some(2));
        assert_eq!(record.amount("check_amount"), Some(Decimal::new(12345, 2)));
        assert_eq!(record.integer("check_number"), Some(1001));
        assert_eq!(record.text("transit_routing_number"), Some("021000021"));
        assert_eq!(record.text("dd_account_number"), Some("12345678901234"));
    }

    #[test]
    fn test_detail_record_lenient_fields() {
        let line = detail_line("X1", "A", "ABC", "");
        let record = RecordKind::DetailRecord.parse(&line).unwrap();

        assert_eq!(record.integer("batch_number"), Some(0));
        assert_eq!(record.integer("item_number"), Some(0));
        let amount = record.amount("check_amount").unwrap();
        assert_eq!(amount, Decimal::ZERO);
        assert_eq!(amount.to_string(), "0.00");
        assert_eq!(record.integer("check_number"), Some(0));
    }

    #[test]
    fn test_detail_record_leniency_does_not_cover_character_class() {
        // lower case fails the class check before any fallback applies
        let line = detail_line("001", "002", "abc", "1");
        assert!(RecordKind::DetailRecord.parse(&line).is_err());
    }

    #[test]
    fn test_parse_overflow_record() {
        let line = format!("4{:3}{:3}{:1}{:2}{:1}{}", "001", "002", "6", "01", "9", "INVOICE 4411");
        let record = RecordKind::DetailOverflowRecord.parse(&line).unwrap();

        assert_eq!(record.integer("batch_number"), Some(1));
        assert_eq!(record.integer("item_number"), Some(2));
        assert_eq!(record.integer("overflow_record_type"), Some(6));
        assert_eq!(record.integer("overflow_sequence_number"), Some(1));
        assert_eq!(record.text("overflow_code"), Some("9"));
        assert_eq!(record.text("memo_line"), Some("INVOICE 4411"));
    }

    #[test]
    fn test_overflow_batch_number_has_no_fallback() {
        let line = format!("4{:3}{:3}{:1}{:2}{:1}", "X1", "002", "6", "01", "9");
        let err = RecordKind::DetailOverflowRecord.parse(&line).unwrap_err();
        assert_eq!(
            err.as_definition_error(),
            Some(&DefinitionError::invalid_integer("batch_number", "X1"))
        );

        // the same raw value is accepted by the lenient detail record
        let detail = detail_line("X1", "002", "1", "1");
        assert!(RecordKind::DetailRecord.parse(&detail).is_ok());
    }
}
