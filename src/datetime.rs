//! Date and time decoding for fixed-width numeric fields
//!
//! Lockbox files carry dates as six digits and times as four. Years are two
//! digits and always read as 20YY.

use crate::constants::CENTURY_BASE;
use crate::error::DefinitionError;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Digit order of a six-digit date field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DateOrder {
    #[default]
    Yymmdd,
    Mmddyy,
}

impl fmt::Display for DateOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateOrder::Yymmdd => f.write_str("YYMMDD"),
            DateOrder::Mmddyy => f.write_str("MMDDYY"),
        }
    }
}

/// Split a string of exactly `width` ASCII digits into two-digit numbers
fn two_digit_groups(raw: &str, width: usize) -> Option<Vec<u32>> {
    if raw.len() != width || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(
        raw.as_bytes()
            .chunks(2)
            .map(|pair| u32::from(pair[0] - b'0') * 10 + u32::from(pair[1] - b'0'))
            .collect(),
    )
}

/// Decode a six-digit date in the given digit order
pub fn decode_date(raw: &str, order: DateOrder) -> Result<NaiveDate, DefinitionError> {
    let invalid = || DefinitionError::InvalidDate {
        value: raw.to_string(),
        format: order.to_string(),
    };

    let groups = two_digit_groups(raw, 6).ok_or_else(invalid)?;
    let (yy, month, day) = match order {
        DateOrder::Yymmdd => (groups[0], groups[1], groups[2]),
        DateOrder::Mmddyy => (groups[2], groups[0], groups[1]),
    };

    NaiveDate::from_ymd_opt(CENTURY_BASE + yy as i32, month, day).ok_or_else(invalid)
}

/// Decode a four-digit HHMM time
pub fn decode_time(raw: &str) -> Result<NaiveTime, DefinitionError> {
    let invalid = || DefinitionError::InvalidTime {
        value: raw.to_string(),
    };

    let groups = two_digit_groups(raw, 4).ok_or_else(invalid)?;
    NaiveTime::from_hms_opt(groups[0], groups[1], 0).ok_or_else(invalid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_date_yymmdd() {
        assert_eq!(
            decode_date("250615", DateOrder::Yymmdd).unwrap(),
            NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
        );
        assert_eq!(
            decode_date("000101", DateOrder::Yymmdd).unwrap(),
            NaiveDate::from_ymd_opt(2000, 1, 1).unwrap()
        );
    }

    #[test]
    fn test_decode_date_mmddyy() {
        assert_eq!(
            decode_date("061525", DateOrder::Mmddyy).unwrap(),
            NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
        );
        assert_eq!(
            decode_date("123199", DateOrder::Mmddyy).unwrap(),
            NaiveDate::from_ymd_opt(2099, 12, 31).unwrap()
        );
    }

    #[test]
    fn test_decode_date_invalid_calendar_values() {
        let err = decode_date("251305", DateOrder::Yymmdd).unwrap_err();
        assert_eq!(
            err,
            DefinitionError::InvalidDate {
                value: "251305".to_string(),
                format: "YYMMDD".to_string(),
            }
        );
        assert!(decode_date("250132", DateOrder::Yymmdd).is_err());
        assert!(decode_date("250230", DateOrder::Yymmdd).is_err());
        assert!(decode_date("250000", DateOrder::Yymmdd).is_err());
        // 2024 is a leap year, 2025 is not
        assert!(decode_date("240229", DateOrder::Yymmdd).is_ok());
        assert!(decode_date("250229", DateOrder::Yymmdd).is_err());
    }

    #[test]
    fn test_decode_date_rejects_wrong_shape() {
        assert!(decode_date("25061", DateOrder::Yymmdd).is_err());
        assert!(decode_date("2506150", DateOrder::Yymmdd).is_err());
        assert!(decode_date("25 615", DateOrder::Yymmdd).is_err());
        assert!(decode_date("", DateOrder::Mmddyy).is_err());
    }

    #[test]
    fn test_decode_time() {
        assert_eq!(
            decode_time("1345").unwrap(),
            NaiveTime::from_hms_opt(13, 45, 0).unwrap()
        );
        assert_eq!(
            decode_time("0000").unwrap(),
            NaiveTime::from_hms_opt(0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_decode_time_invalid() {
        assert_eq!(
            decode_time("2460").unwrap_err(),
            DefinitionError::InvalidTime {
                value: "2460".to_string()
            }
        );
        assert!(decode_time("2400").is_err());
        assert!(decode_time("1260").is_err());
        assert!(decode_time("134").is_err());
        assert!(decode_time("13:4").is_err());
    }
}
