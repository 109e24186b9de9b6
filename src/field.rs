//! Field definitions and character-class validation
//!
//! Every field of a lockbox record is a fixed column range with one of four
//! character classes. The classes are checked with anchored regular
//! expressions against the trimmed column text.

use crate::error::DefinitionError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

static NUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("numeric pattern"));

static ALPHANUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[ A-Z0-9;:,./()-]+$").expect("alphanumeric pattern"));

static BLANK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*$").expect("blank pattern"));

static ALPHANUMERIC_OR_BLANK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^$|^[ A-Z0-9;%#:',./_&()-]+$").expect("alphanumeric-or-blank pattern")
});

/// Character class a field's content must belong to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// Digits only, at least one
    Numeric,
    /// Upper-case letters, digits, space and `;:,./()-`, at least one
    Alphanumeric,
    /// Whitespace only, including empty
    Blank,
    /// Empty, or upper-case letters, digits, space and `;%#:',./_&()-`
    AlphanumericOrBlank,
}

impl FieldType {
    /// Tag used in schema definitions and error messages
    pub fn tag(&self) -> &'static str {
        match self {
            FieldType::Numeric => "numeric",
            FieldType::Alphanumeric => "alphanumeric",
            FieldType::Blank => "blank",
            FieldType::AlphanumericOrBlank => "alphanumericorblank",
        }
    }

    fn pattern(&self) -> &'static Regex {
        match self {
            FieldType::Numeric => &NUMERIC,
            FieldType::Alphanumeric => &ALPHANUMERIC,
            FieldType::Blank => &BLANK,
            FieldType::AlphanumericOrBlank => &ALPHANUMERIC_OR_BLANK,
        }
    }

    /// Check already-trimmed field content against this class
    pub fn matches(&self, value: &str) -> bool {
        self.pattern().is_match(value)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for FieldType {
    type Err = DefinitionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "numeric" => Ok(FieldType::Numeric),
            "alphanumeric" => Ok(FieldType::Alphanumeric),
            "blank" => Ok(FieldType::Blank),
            "alphanumericorblank" => Ok(FieldType::AlphanumericOrBlank),
            _ => Err(DefinitionError::UnknownFieldType { tag: s.to_string() }),
        }
    }
}

/// A named column range with its character class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    pub name: &'static str,
    /// First column, 0-indexed
    pub start: usize,
    /// One past the last column
    pub end: usize,
    pub field_type: FieldType,
}

impl FieldDef {
    pub const fn new(name: &'static str, start: usize, end: usize, field_type: FieldType) -> Self {
        Self {
            name,
            start,
            end,
            field_type,
        }
    }

    pub fn width(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Slice this field's columns out of a line.
    ///
    /// Lines shorter than the field yield a shorter (possibly empty) slice.
    /// A multi-byte character cut by the column boundary is replaced with
    /// U+FFFD, which no character class accepts.
    pub fn extract<'a>(&self, line: &'a str) -> Cow<'a, str> {
        let bytes = line.as_bytes();
        let end = self.end.min(bytes.len());
        let start = self.start.min(end);
        String::from_utf8_lossy(&bytes[start..end])
    }
}
