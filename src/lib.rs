//! Lockbox Parser Library
//!
//! A Rust library for parsing and validating BAI-style lockbox bank deposit
//! files: fixed-width text records whose fields are defined purely by column
//! position and a per-record-type schema.
//!
//! Record construction runs in two phases:
//! - Extraction - every schema field is cut from the line, trimmed and checked
//!   against its character class ([`parser::parse_fields`])
//! - Validation - the record kind converts selected raw strings into integers,
//!   dates, times and currency amounts ([`records::RecordValidator`])
//!
//! ## Usage
//!
//! ```rust
//! use lockbox::{RecordKind, parse_line};
//!
//! let line = "8001002       25010100050000012345";
//! let record = parse_line(line)?;
//!
//! assert_eq!(record.kind(), RecordKind::ServiceTotalRecord);
//! assert_eq!(record.integer("total_num_checks"), Some(5));
//! assert_eq!(record.amount("check_dollar_total").unwrap().to_string(), "123.45");
//! # Ok::<(), lockbox::LockboxError>(())
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod datetime;
pub mod error;
pub mod field;
pub mod file;
pub mod models;
pub mod parser;
pub mod records;
pub mod schema;

// Re-export commonly used types
pub use config::LockboxConfig;
pub use datetime::{DateOrder, decode_date, decode_time};
pub use error::{DefinitionError, LockboxError, ParseError, Result};
pub use field::{FieldDef, FieldType};
pub use file::{LockboxParser, ParseResult, ParseStats, parse_line};
pub use models::{FieldValue, FieldValues, Record};
pub use records::{RecordKind, RecordValidator};
pub use schema::FieldSchema;
