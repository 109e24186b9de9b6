//! Application constants for the lockbox parser
//!
//! Record geometry, record type codes and conversion constants shared by
//! every record kind.

// =============================================================================
// Record Geometry
// =============================================================================

/// Longest line accepted for any record kind.
///
/// Officially this should be [`HISTORICAL_RECORD_LENGTH`] but real-world
/// files already carry longer lines.
pub const MAX_RECORD_LENGTH: usize = 160;

/// Record length given by the published lockbox layout
pub const HISTORICAL_RECORD_LENGTH: usize = 104;

/// Name of the implicit first-column field present in every schema
pub const RECORD_TYPE_FIELD: &str = "record_type";

/// Column range of the implicit record type field
pub const RECORD_TYPE_LOCATION: (usize, usize) = (0, 1);

// =============================================================================
// Record Type Codes
// =============================================================================

/// Leading character of each record kind
pub mod record_types {
    pub const IMMEDIATE_ADDRESS_HEADER: u8 = 1;
    pub const SERVICE_RECORD: u8 = 2;
    pub const DETAIL_OVERFLOW_RECORD: u8 = 4;
    pub const DETAIL_HEADER: u8 = 5;
    pub const DETAIL_RECORD: u8 = 6;
    pub const BATCH_TOTAL_RECORD: u8 = 7;
    pub const SERVICE_TOTAL_RECORD: u8 = 8;
    pub const DESTINATION_TRAILER_RECORD: u8 = 9;

    /// All record type codes in file order
    pub const ALL: &[u8] = &[
        IMMEDIATE_ADDRESS_HEADER,
        SERVICE_RECORD,
        DETAIL_HEADER,
        DETAIL_RECORD,
        DETAIL_OVERFLOW_RECORD,
        BATCH_TOTAL_RECORD,
        SERVICE_TOTAL_RECORD,
        DESTINATION_TRAILER_RECORD,
    ];
}

// =============================================================================
// Value Conversion
// =============================================================================

/// Two-digit years are read as `CENTURY_BASE + YY`
pub const CENTURY_BASE: i32 = 2000;

/// Currency fields hold integer cents
pub const CURRENCY_SCALE: u32 = 2;

/// Substitute for malformed numeric fields that are read leniently
pub const LENIENT_FALLBACK: &str = "0";

// =============================================================================
// Logging
// =============================================================================

/// Default log level when neither `-v` nor `-q` is given
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Default cap on individual error messages kept in parse statistics
pub const DEFAULT_MAX_REPORTED_ERRORS: usize = 100;
