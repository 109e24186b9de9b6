//! Configuration management and validation.
//!
//! Controls how a whole lockbox file is read: the line length limit, whether
//! one bad line rejects the file, and the optional trailer count check.

use crate::constants::{DEFAULT_MAX_REPORTED_ERRORS, HISTORICAL_RECORD_LENGTH, MAX_RECORD_LENGTH};
use crate::error::{LockboxError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Settings for parsing lockbox files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LockboxConfig {
    /// Longest accepted line
    pub max_record_length: usize,

    /// Abort on the first bad line instead of skipping it
    pub strict: bool,

    /// Compare the destination trailer's record count with the records parsed
    pub verify_trailer_count: bool,

    /// Upper bound on error messages kept in parse statistics
    pub max_reported_errors: usize,
}

impl Default for LockboxConfig {
    fn default() -> Self {
        Self {
            max_record_length: MAX_RECORD_LENGTH,
            strict: false,
            verify_trailer_count: false,
            max_reported_errors: DEFAULT_MAX_REPORTED_ERRORS,
        }
    }
}

impl LockboxConfig {
    /// Load configuration from a JSON file; missing keys keep their defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| LockboxError::io(path, e))?;
        let config: Self = serde_json::from_str(&content).map_err(|e| {
            LockboxError::configuration(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        config.validate()?;

        debug!("Loaded configuration from {}: {:?}", path.display(), config);
        Ok(config)
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn with_max_record_length(mut self, max_record_length: usize) -> Self {
        self.max_record_length = max_record_length;
        self
    }

    pub fn with_trailer_verification(mut self) -> Self {
        self.verify_trailer_count = true;
        self
    }

    pub fn with_max_reported_errors(mut self, max_reported_errors: usize) -> Self {
        self.max_reported_errors = max_reported_errors;
        self
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if !(HISTORICAL_RECORD_LENGTH..=MAX_RECORD_LENGTH).contains(&self.max_record_length) {
            return Err(LockboxError::configuration(format!(
                "max_record_length must be between {} and {}, got {}",
                HISTORICAL_RECORD_LENGTH, MAX_RECORD_LENGTH, self.max_record_length
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config_is_valid() {
        let config = LockboxConfig::default();
        assert_eq!(config.max_record_length, 160);
        assert!(!config.strict);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_record_length_bounds() {
        assert!(
            LockboxConfig::default()
                .with_max_record_length(104)
                .validate()
                .is_ok()
        );
        assert!(
            LockboxConfig::default()
                .with_max_record_length(80)
                .validate()
                .is_err()
        );
        assert!(
            LockboxConfig::default()
                .with_max_record_length(161)
                .validate()
                .is_err()
        );
    }

    #[test]
    fn test_from_file_keeps_defaults_for_missing_keys() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, r#"{{"strict": true}}"#).unwrap();

        let config = LockboxConfig::from_file(temp_file.path()).unwrap();
        assert!(config.strict);
        assert_eq!(config.max_record_length, 160);
        assert_eq!(config.max_reported_errors, 100);
    }

    #[test]
    fn test_from_file_rejects_bad_json() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "strict = true").unwrap();

        let err = LockboxConfig::from_file(temp_file.path()).unwrap_err();
        assert!(matches!(err, LockboxError::Configuration { .. }));
    }
}
