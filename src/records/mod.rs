//! Lockbox record kinds
//!
//! Each kind pairs a static [`FieldSchema`] with a [`RecordValidator`]. The
//! validator is the second construction phase: it turns selected raw strings
//! into integers, dates, times and amounts, and may reject the record.
//!
//! ## Layout
//!
//! - [`address`] - immediate address header (type 1)
//! - [`service`] - service record (type 2)
//! - [`detail`] - detail header, detail and detail overflow (types 5, 6, 4)
//! - [`totals`] - batch total and service total (types 7, 8)
//! - [`trailer`] - destination trailer (type 9)

pub mod address;
pub mod detail;
pub mod service;
pub mod totals;
pub mod trailer;

use crate::constants::{MAX_RECORD_LENGTH, record_types};
use crate::error::{DefinitionError, Result};
use crate::models::{FieldValues, Record};
use crate::parser::parse_fields;
use crate::schema::FieldSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Semantic post-processing of a record's raw field values.
///
/// Runs only after every field passed its character-class check. Kinds with
/// nothing to convert keep the default no-op.
pub trait RecordValidator {
    fn validate(&self, _values: &mut FieldValues) -> std::result::Result<(), DefinitionError> {
        Ok(())
    }
}

/// The record kinds of a lockbox file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordKind {
    ImmediateAddressHeader,
    ServiceRecord,
    DetailHeader,
    DetailRecord,
    DetailOverflowRecord,
    BatchTotalRecord,
    ServiceTotalRecord,
    DestinationTrailerRecord,
}

impl RecordKind {
    /// All kinds in the order they appear in a file
    pub const ALL: [RecordKind; 8] = [
        RecordKind::ImmediateAddressHeader,
        RecordKind::ServiceRecord,
        RecordKind::DetailHeader,
        RecordKind::DetailRecord,
        RecordKind::DetailOverflowRecord,
        RecordKind::BatchTotalRecord,
        RecordKind::ServiceTotalRecord,
        RecordKind::DestinationTrailerRecord,
    ];

    /// Leading digit that identifies this kind in a line
    pub fn record_type_code(&self) -> u8 {
        match self {
            RecordKind::ImmediateAddressHeader => record_types::IMMEDIATE_ADDRESS_HEADER,
            RecordKind::ServiceRecord => record_types::SERVICE_RECORD,
            RecordKind::DetailHeader => record_types::DETAIL_HEADER,
            RecordKind::DetailRecord => record_types::DETAIL_RECORD,
            RecordKind::DetailOverflowRecord => record_types::DETAIL_OVERFLOW_RECORD,
            RecordKind::BatchTotalRecord => record_types::BATCH_TOTAL_RECORD,
            RecordKind::ServiceTotalRecord => record_types::SERVICE_TOTAL_RECORD,
            RecordKind::DestinationTrailerRecord => record_types::DESTINATION_TRAILER_RECORD,
        }
    }

    /// Look up the kind for a line's leading character
    pub fn from_record_type(code: char) -> Option<Self> {
        let digit = u8::try_from(code.to_digit(10)?).ok()?;
        Self::ALL
            .into_iter()
            .find(|kind| kind.record_type_code() == digit)
    }

    pub fn name(&self) -> &'static str {
        self.schema().kind_name
    }

    pub fn schema(&self) -> &'static FieldSchema {
        match self {
            RecordKind::ImmediateAddressHeader => &address::SCHEMA,
            RecordKind::ServiceRecord => &service::SCHEMA,
            RecordKind::DetailHeader => &detail::HEADER_SCHEMA,
            RecordKind::DetailRecord => &detail::DETAIL_SCHEMA,
            RecordKind::DetailOverflowRecord => &detail::OVERFLOW_SCHEMA,
            RecordKind::BatchTotalRecord => &totals::BATCH_TOTAL_SCHEMA,
            RecordKind::ServiceTotalRecord => &totals::SERVICE_TOTAL_SCHEMA,
            RecordKind::DestinationTrailerRecord => &trailer::SCHEMA,
        }
    }

    fn validator(&self) -> &'static dyn RecordValidator {
        match self {
            RecordKind::ImmediateAddressHeader => &address::ImmediateAddressHeader,
            RecordKind::ServiceRecord => &service::ServiceRecord,
            RecordKind::DetailHeader => &detail::DetailHeader,
            RecordKind::DetailRecord => &detail::DetailRecord,
            RecordKind::DetailOverflowRecord => &detail::DetailOverflowRecord,
            RecordKind::BatchTotalRecord => &totals::BatchTotalRecord,
            RecordKind::ServiceTotalRecord => &totals::ServiceTotalRecord,
            RecordKind::DestinationTrailerRecord => &trailer::DestinationTrailerRecord,
        }
    }

    /// Construct a record of this kind from one line
    pub fn parse(&self, raw_text: &str) -> Result<Record> {
        self.parse_with_limit(raw_text, MAX_RECORD_LENGTH)
    }

    /// Construct a record with a tighter line length limit.
    ///
    /// Either every field parses and validates or an error is returned;
    /// no partially populated record escapes.
    pub fn parse_with_limit(&self, raw_text: &str, max_record_length: usize) -> Result<Record> {
        let schema = self.schema();
        let raw = parse_fields(raw_text, schema, max_record_length)?;

        let mut values = FieldValues::new(schema.kind_name, raw);
        self.validator().validate(&mut values)?;

        debug!("Constructed {} record", schema.kind_name);
        Ok(values.into_record(*self, raw_text))
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
