//! Whole-file parsing: line splitting and record type dispatch
//!
//! Each line is routed to its record kind by the leading digit and parsed
//! independently. Lines share no state, so the result of one never depends
//! on another.

use crate::config::LockboxConfig;
use crate::constants::MAX_RECORD_LENGTH;
use crate::error::{LockboxError, ParseError, Result};
use crate::models::Record;
use crate::records::RecordKind;
use rust_decimal::Decimal;
use serde::Serialize;
use std::path::Path;
use tracing::{debug, info, warn};

/// Parse one line, choosing the record kind from its first character
pub fn parse_line(line: &str) -> Result<Record> {
    parse_line_with_limit(line, MAX_RECORD_LENGTH)
}

/// Parse one line with a custom line length limit
pub fn parse_line_with_limit(line: &str, max_record_length: usize) -> Result<Record> {
    let code = line.chars().next();
    let kind = code
        .and_then(RecordKind::from_record_type)
        .ok_or(ParseError::UnknownRecordType { code })?;
    kind.parse_with_limit(line, max_record_length)
}

/// Parsing statistics for one file
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParseStats {
    /// Non-blank lines encountered
    pub total_lines: usize,

    /// Lines turned into records
    pub records_parsed: usize,

    /// Lines skipped because they failed to parse
    pub lines_skipped: usize,

    /// First error messages, capped by configuration
    pub errors: Vec<String>,
}

impl ParseStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Calculate success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total_lines == 0 {
            0.0
        } else {
            (self.records_parsed as f64 / self.total_lines as f64) * 100.0
        }
    }

    fn record_skip(&mut self, line_number: usize, error: &LockboxError, max_reported: usize) {
        self.lines_skipped += 1;
        if self.errors.len() < max_reported {
            self.errors.push(format!("line {}: {}", line_number, error));
        }
    }
}

/// Records parsed from a file together with statistics
#[derive(Debug, Clone, Serialize)]
pub struct ParseResult {
    pub records: Vec<Record>,
    pub stats: ParseStats,
}

impl ParseResult {
    /// Records of one kind, in file order
    pub fn records_of(&self, kind: RecordKind) -> impl Iterator<Item = &Record> + '_ {
        self.records.iter().filter(move |record| record.kind() == kind)
    }

    /// Sum of all detail record check amounts
    pub fn deposit_total(&self) -> Decimal {
        self.records_of(RecordKind::DetailRecord)
            .filter_map(|record| record.amount("check_amount"))
            .sum()
    }

    /// Number of records per kind, in file order of kinds
    pub fn kind_counts(&self) -> Vec<(RecordKind, usize)> {
        RecordKind::ALL
            .into_iter()
            .map(|kind| (kind, self.records_of(kind).count()))
            .filter(|(_, count)| *count > 0)
            .collect()
    }
}

/// Parser for complete lockbox files
#[derive(Debug, Clone, Default)]
pub struct LockboxParser {
    config: LockboxConfig,
}

impl LockboxParser {
    /// Create a parser, rejecting configuration outside the accepted ranges
    pub fn new(config: LockboxConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Read and parse a lockbox file
    pub fn parse_file(&self, path: &Path) -> Result<ParseResult> {
        info!("Parsing lockbox file: {}", path.display());
        let content = std::fs::read_to_string(path).map_err(|e| LockboxError::io(path, e))?;
        self.parse_str(&content)
    }

    /// Parse lockbox file content.
    ///
    /// Blank lines are ignored. In strict mode the first bad line aborts with
    /// its line number; otherwise it is skipped and counted.
    pub fn parse_str(&self, content: &str) -> Result<ParseResult> {
        let mut stats = ParseStats::new();
        let mut records = Vec::new();

        for (index, line) in content.lines().enumerate() {
            let line_number = index + 1;
            if line.trim().is_empty() {
                continue;
            }
            stats.total_lines += 1;

            match parse_line_with_limit(line, self.config.max_record_length) {
                Ok(record) => {
                    stats.records_parsed += 1;
                    records.push(record);
                }
                Err(e) if self.config.strict => {
                    return Err(LockboxError::at_line(line_number, e));
                }
                Err(e) => {
                    warn!("Skipping line {}: {}", line_number, e);
                    stats.record_skip(line_number, &e, self.config.max_reported_errors);
                }
            }
        }

        if self.config.verify_trailer_count {
            verify_trailer_count(&records)?;
        }

        info!(
            "Parsed {} of {} lines ({:.1}% success)",
            stats.records_parsed,
            stats.total_lines,
            stats.success_rate()
        );

        Ok(ParseResult { records, stats })
    }
}

/// The trailer's record count includes the trailer itself
fn verify_trailer_count(records: &[Record]) -> Result<()> {
    let trailer_count = records
        .iter()
        .rev()
        .find(|record| record.kind() == RecordKind::DestinationTrailerRecord)
        .and_then(|record| record.integer("total_num_records"));

    match trailer_count {
        Some(expected) if usize::try_from(expected).ok() != Some(records.len()) => {
            Err(ParseError::TrailerCountMismatch {
                expected,
                found: records.len(),
            }
            .into())
        }
        Some(_) => {
            debug!("Trailer record count matches {} records", records.len());
            Ok(())
        }
        None => {
            debug!("No destination trailer found, skipping record count check");
            Ok(())
        }
    }
}
