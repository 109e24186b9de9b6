//! Core data structures for parsed lockbox records.
//!
//! A [`Record`] is the immutable result of constructing one line: its kind,
//! the original text and one [`FieldValue`] per schema field. Validators work
//! on the mutable [`FieldValues`] set before it is frozen into a record.

use crate::constants::{CURRENCY_SCALE, LENIENT_FALLBACK, RECORD_TYPE_FIELD};
use crate::datetime::{DateOrder, decode_date, decode_time};
use crate::error::DefinitionError;
use crate::parser::RawFields;
use crate::records::RecordKind;
use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

/// Value exposed for one field of a record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Validated, trimmed text with no further typing
    Text(String),
    /// Blank fields never carry a value
    Absent,
    Integer(i64),
    Date(NaiveDate),
    Time(NaiveTime),
    /// Fixed-point currency with two decimal places
    Amount(Decimal),
}

impl FieldValue {
    pub fn is_absent(&self) -> bool {
        matches!(self, FieldValue::Absent)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(text) => f.write_str(text),
            FieldValue::Absent => f.write_str("-"),
            FieldValue::Integer(value) => write!(f, "{}", value),
            FieldValue::Date(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            FieldValue::Time(time) => write!(f, "{}", time.format("%H:%M")),
            FieldValue::Amount(amount) => write!(f, "{}", amount),
        }
    }
}

/// Working set of field values handed to a record validator
#[derive(Debug, Clone)]
pub struct FieldValues {
    kind_name: &'static str,
    raw: RawFields,
    typed: HashMap<&'static str, FieldValue>,
}

impl FieldValues {
    pub fn new(kind_name: &'static str, raw: RawFields) -> Self {
        Self {
            kind_name,
            raw,
            typed: HashMap::new(),
        }
    }

    /// Trimmed raw text of a field (empty for Blank fields)
    pub fn raw(&self, name: &str) -> Result<&str, DefinitionError> {
        if !self.raw.contains(name) {
            return Err(DefinitionError::missing_field(self.kind_name, name));
        }
        Ok(self.raw.get(name).unwrap_or(""))
    }

    /// Replace a field's exposed value
    pub fn set(&mut self, name: &str, value: FieldValue) -> Result<(), DefinitionError> {
        let (field, _) = self
            .raw
            .iter()
            .find(|(field, _)| field.name == name)
            .ok_or_else(|| DefinitionError::missing_field(self.kind_name, name))?;
        self.typed.insert(field.name, value);
        Ok(())
    }

    /// Parse a field as an integer, failing on anything non-numeric
    pub fn convert_integer(&mut self, name: &str) -> Result<i64, DefinitionError> {
        let value = parse_integer(name, self.raw(name)?)?;
        self.set(name, FieldValue::Integer(value))?;
        Ok(value)
    }

    /// Parse a field as an integer, reading anything non-numeric as zero
    pub fn convert_integer_lenient(&mut self, name: &str) -> Result<i64, DefinitionError> {
        let raw = lenient_digits(name, self.raw(name)?);
        let value = parse_integer(name, raw)?;
        self.set(name, FieldValue::Integer(value))?;
        Ok(value)
    }

    /// Parse a field of integer cents as a currency amount
    pub fn convert_amount(&mut self, name: &str) -> Result<Decimal, DefinitionError> {
        let cents = parse_integer(name, self.raw(name)?)?;
        let amount = Decimal::new(cents, CURRENCY_SCALE);
        self.set(name, FieldValue::Amount(amount))?;
        Ok(amount)
    }

    /// Parse a field of integer cents as an amount, reading anything
    /// non-numeric as zero
    pub fn convert_amount_lenient(&mut self, name: &str) -> Result<Decimal, DefinitionError> {
        let raw = lenient_digits(name, self.raw(name)?);
        let amount = Decimal::new(parse_integer(name, raw)?, CURRENCY_SCALE);
        self.set(name, FieldValue::Amount(amount))?;
        Ok(amount)
    }

    pub fn convert_date(&mut self, name: &str, order: DateOrder) -> Result<NaiveDate, DefinitionError> {
        let date = decode_date(self.raw(name)?, order)?;
        self.set(name, FieldValue::Date(date))?;
        Ok(date)
    }

    pub fn convert_time(&mut self, name: &str) -> Result<NaiveTime, DefinitionError> {
        let time = decode_time(self.raw(name)?)?;
        self.set(name, FieldValue::Time(time))?;
        Ok(time)
    }

    /// Freeze into a record, exposing untyped fields as text or absent
    pub fn into_record(mut self, kind: RecordKind, raw_text: &str) -> Record {
        let fields = self
            .raw
            .into_entries()
            .into_iter()
            .map(|(field, raw)| {
                let value = match self.typed.remove(field.name) {
                    Some(value) => value,
                    None => raw.map_or(FieldValue::Absent, FieldValue::Text),
                };
                (field.name, value)
            })
            .collect();

        Record {
            kind,
            raw_text: raw_text.to_string(),
            fields,
        }
    }
}

fn parse_integer(name: &str, raw: &str) -> Result<i64, DefinitionError> {
    raw.parse::<i64>()
        .map_err(|_| DefinitionError::invalid_integer(name, raw))
}

/// The raw text if it is all digits and fits an i64, otherwise the fallback
fn lenient_digits<'a>(name: &str, raw: &'a str) -> &'a str {
    let numeric = !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit());
    if numeric && raw.parse::<i64>().is_ok() {
        raw
    } else {
        debug!(
            "Field '{}' = '{}' is not numeric, using {}",
            name, raw, LENIENT_FALLBACK
        );
        LENIENT_FALLBACK
    }
}

/// One parsed lockbox line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    kind: RecordKind,
    raw_text: String,
    fields: Vec<(&'static str, FieldValue)>,
}

impl Record {
    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    /// Leading record type digit as written in the line
    pub fn record_type(&self) -> Option<&str> {
        self.text(RECORD_TYPE_FIELD)
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, value)| value)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &FieldValue)> + '_ {
        self.fields.iter().map(|(name, value)| (*name, value))
    }

    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|(name, _)| *name)
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        match self.get(name)? {
            FieldValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn integer(&self, name: &str) -> Option<i64> {
        match self.get(name)? {
            FieldValue::Integer(value) => Some(*value),
            _ => None,
        }
    }

    pub fn date(&self, name: &str) -> Option<NaiveDate> {
        match self.get(name)? {
            FieldValue::Date(date) => Some(*date),
            _ => None,
        }
    }

    pub fn time(&self, name: &str) -> Option<NaiveTime> {
        match self.get(name)? {
            FieldValue::Time(time) => Some(*time),
            _ => None,
        }
    }

    pub fn amount(&self, name: &str) -> Option<Decimal> {
        match self.get(name)? {
            FieldValue::Amount(amount) => Some(*amount),
            _ => None,
        }
    }

    /// True for fields that exist but carry no value
    pub fn is_absent(&self, name: &str) -> bool {
        self.get(name).is_some_and(FieldValue::is_absent)
    }
}

struct FieldMap<'a>(&'a [(&'static str, FieldValue)]);

impl Serialize for FieldMap<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, value) in self.0 {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry("kind", &self.kind)?;
        map.serialize_entry("raw_text", &self.raw_text)?;
        map.serialize_entry("fields", &FieldMap(&self.fields))?;
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MAX_RECORD_LENGTH;
    use crate::field::{FieldDef, FieldType::*};
    use crate::parser::parse_fields;
    use crate::schema::FieldSchema;

    static FIELDS: &[FieldDef] = &[
        FieldDef::new("amount", 1, 11, AlphanumericOrBlank),
        FieldDef::new("count", 11, 14, AlphanumericOrBlank),
        FieldDef::new("stamp", 14, 20, Numeric),
        FieldDef::new("filler", 20, 30, Blank),
    ];
    static SCHEMA: FieldSchema = FieldSchema::new("Sample", FIELDS);

    fn values(line: &str) -> FieldValues {
        let raw = parse_fields(line, &SCHEMA, MAX_RECORD_LENGTH).unwrap();
        FieldValues::new(SCHEMA.kind_name, raw)
    }

    #[test]
    fn test_convert_amount_uses_cents() {
        let mut values = values("90000012345007250101");
        assert_eq!(
            values.convert_amount("amount").unwrap(),
            Decimal::new(12345, 2)
        );
        assert_eq!(values.convert_integer("count").unwrap(), 7);
        assert_eq!(
            values.convert_date("stamp", DateOrder::Yymmdd).unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
        );
    }

    #[test]
    fn test_lenient_conversion_falls_back_to_zero() {
        let mut values = values("9ABC       X  250101");
        let amount = values.convert_amount_lenient("amount").unwrap();
        assert_eq!(amount, Decimal::ZERO);
        assert_eq!(amount.to_string(), "0.00");
        assert_eq!(values.convert_integer_lenient("count").unwrap(), 0);
    }

    #[test]
    fn test_strict_conversion_fails() {
        let mut values = values("9ABC       X  250101");
        assert_eq!(
            values.convert_integer("count").unwrap_err(),
            DefinitionError::invalid_integer("count", "X")
        );
        assert!(values.convert_amount("amount").is_err());
    }

    #[test]
    fn test_unknown_field_is_definition_error() {
        let mut values = values("9          001250101");
        assert!(matches!(
            values.convert_integer("batch_number"),
            Err(DefinitionError::MissingField { .. })
        ));
    }

    #[test]
    fn test_into_record_exposes_text_and_absent() {
        let mut values = values("9   ABC    001250101");
        values.convert_integer("count").unwrap();
        let record = values.into_record(RecordKind::DetailRecord, "9   ABC    001250101");

        assert_eq!(record.record_type(), Some("9"));
        assert_eq!(record.text("amount"), Some("ABC"));
        assert_eq!(record.integer("count"), Some(1));
        assert_eq!(record.text("stamp"), Some("250101"));
        assert!(record.is_absent("filler"));
        assert!(!record.is_absent("amount"));
        assert_eq!(record.get("missing"), None);
        assert_eq!(
            record.field_names().collect::<Vec<_>>(),
            vec!["record_type", "amount", "count", "stamp", "filler"]
        );
    }

    #[test]
    fn test_field_value_display() {
        assert_eq!(FieldValue::Amount(Decimal::new(12345, 2)).to_string(), "123.45");
        assert_eq!(
            FieldValue::Time(NaiveTime::from_hms_opt(13, 45, 0).unwrap()).to_string(),
            "13:45"
        );
        assert_eq!(FieldValue::Absent.to_string(), "-");
    }
}
