//! Error handling for lockbox record parsing.
//!
//! Two failure families are kept apart on purpose:
//! - [`ParseError`] - the text of a line does not fit the schema it was read with
//! - [`DefinitionError`] - the schema itself is unusable, or a value that passed
//!   character-class checks could not be given its semantic type (bad dates,
//!   bad times, non-numeric integers without a fallback)
//!
//! [`LockboxError`] wraps both, together with the I/O and configuration
//! failures of the file-level collaborators.

use crate::field::FieldType;
use std::path::PathBuf;
use thiserror::Error;

/// Malformed input text relative to a record schema.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("record longer than {max} characters (found {length})")]
    RecordTooLong { length: usize, max: usize },

    #[error("field {field_name} does not match expected type {expected_type}, value = \"{actual_value}\"")]
    FieldTypeMismatch {
        field_name: String,
        expected_type: FieldType,
        actual_value: String,
    },

    #[error("unknown record type {code:?}")]
    UnknownRecordType { code: Option<char> },

    #[error("trailer reports {expected} records but {found} were parsed")]
    TrailerCountMismatch { expected: i64, found: usize },
}

/// Schema mistakes and failed semantic conversions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DefinitionError {
    #[error("invalid field type found: \"{tag}\"")]
    UnknownFieldType { tag: String },

    #[error("record {kind} already has field \"{field_name}\"")]
    DuplicateField { kind: String, field_name: String },

    #[error("field {field_name} has invalid location ({start}, {end}) for a {max} column record")]
    FieldOutOfBounds {
        field_name: String,
        start: usize,
        end: usize,
        max: usize,
    },

    #[error("fields {first} and {second} overlap in record {kind}")]
    OverlappingFields {
        kind: String,
        first: String,
        second: String,
    },

    #[error("record {kind} has no field \"{field_name}\"")]
    MissingField { kind: String, field_name: String },

    #[error("{value} is not a valid {format} formatted date")]
    InvalidDate { value: String, format: String },

    #[error("{value} is not a valid HHMM formatted time")]
    InvalidTime { value: String },

    #[error("field {field_name} is not a valid integer, value = \"{value}\"")]
    InvalidInteger { field_name: String, value: String },
}

impl DefinitionError {
    /// Create a duplicate field error
    pub fn duplicate_field(kind: impl Into<String>, field_name: impl Into<String>) -> Self {
        Self::DuplicateField {
            kind: kind.into(),
            field_name: field_name.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(kind: impl Into<String>, field_name: impl Into<String>) -> Self {
        Self::MissingField {
            kind: kind.into(),
            field_name: field_name.into(),
        }
    }

    /// Create an integer conversion error
    pub fn invalid_integer(field_name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidInteger {
            field_name: field_name.into(),
            value: value.into(),
        }
    }
}

/// Top-level error for record construction and file parsing.
#[derive(Error, Debug)]
pub enum LockboxError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Definition(#[from] DefinitionError),

    #[error("line {line_number}: {source}")]
    Line {
        line_number: usize,
        #[source]
        source: Box<LockboxError>,
    },

    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl LockboxError {
    /// Attach a 1-based line number to an error
    pub fn at_line(line_number: usize, source: LockboxError) -> Self {
        Self::Line {
            line_number,
            source: Box::new(source),
        }
    }

    /// Create an I/O error for a path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// The parse error behind this failure, looking through line context
    pub fn as_parse_error(&self) -> Option<&ParseError> {
        match self {
            Self::Parse(err) => Some(err),
            Self::Line { source, .. } => source.as_parse_error(),
            _ => None,
        }
    }

    /// The definition error behind this failure, looking through line context
    pub fn as_definition_error(&self) -> Option<&DefinitionError> {
        match self {
            Self::Definition(err) => Some(err),
            Self::Line { source, .. } => source.as_definition_error(),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, LockboxError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_type_mismatch_message() {
        let err = ParseError::FieldTypeMismatch {
            field_name: "priority_code".to_string(),
            expected_type: FieldType::Numeric,
            actual_value: "A1".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "field priority_code does not match expected type numeric, value = \"A1\""
        );
    }

    #[test]
    fn test_line_context_unwraps_to_kind() {
        let err = LockboxError::at_line(
            3,
            ParseError::RecordTooLong {
                length: 200,
                max: 160,
            }
            .into(),
        );
        assert!(err.to_string().starts_with("line 3: "));
        assert!(matches!(
            err.as_parse_error(),
            Some(ParseError::RecordTooLong { length: 200, .. })
        ));
        assert!(err.as_definition_error().is_none());
    }
}
