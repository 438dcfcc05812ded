//! Batch configuration
//!
//! Describes where the course logs live, which assignments and categories
//! to score, and how the files are encoded. Loadable from TOML; every field
//! has a default so an empty file is a valid configuration.
//!
//! # Example TOML
//! ```toml
//! data_dir = "/srv/course-logs"
//! results_dir = "results"
//! assignments = ["03", "04", "05"]
//! categories = ["compiler-errors"]
//! error_encoding = "latin1"
//! delimiter = ";"
//! ```

use crate::category::ErrorCategory;
use crate::error::{EqError, Result};
use crate::ingest::{DataLayout, Encoding};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration for a batch run over several assignments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EqConfig {
    /// Root containing `data-snapshots/`, `data-compiler-errors/`, ...
    pub data_dir: PathBuf,

    /// Directory the report files are written to
    pub results_dir: PathBuf,

    /// Assignment numbers, used in file names as `hw<NN>`
    pub assignments: Vec<String>,

    /// Error categories to score, each producing its own report
    pub categories: Vec<ErrorCategory>,

    /// Encoding of the error/exception logs
    pub error_encoding: Encoding,

    /// Encoding of the event (snapshot) logs
    pub event_encoding: Encoding,

    /// Field delimiter shared by all logs
    pub delimiter: String,
}

impl Default for EqConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            results_dir: PathBuf::from("results"),
            assignments: ["03", "04", "05", "06", "07", "08"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            categories: ErrorCategory::ALL.to_vec(),
            error_encoding: Encoding::Latin1,
            event_encoding: Encoding::Utf8,
            delimiter: ";".to_string(),
        }
    }
}

impl EqConfig {
    /// Load a configuration file and validate it
    pub fn from_toml<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path.as_ref()).with_context(|| {
            format!("Failed to read config file: {}", path.as_ref().display())
        })?;
        let config: EqConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.as_ref().display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.assignments.is_empty() {
            return Err(EqError::InvalidConfig(
                "at least one assignment is required".to_string(),
            ));
        }

        if self.assignments.iter().any(|a| a.trim().is_empty()) {
            return Err(EqError::InvalidConfig(
                "assignment names must not be empty".to_string(),
            ));
        }

        if self.categories.is_empty() {
            return Err(EqError::InvalidConfig(
                "at least one error category is required".to_string(),
            ));
        }

        self.delimiter_byte()?;
        Ok(())
    }

    /// The delimiter as the single ASCII byte the reader needs
    pub fn delimiter_byte(&self) -> Result<u8> {
        match self.delimiter.as_bytes() {
            [b] if b.is_ascii() => Ok(*b),
            _ => Err(EqError::InvalidConfig(format!(
                "delimiter must be a single ASCII character, got {:?}",
                self.delimiter
            ))),
        }
    }

    pub fn layout(&self) -> DataLayout {
        DataLayout::new(&self.data_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = EqConfig::default();
        assert_eq!(config.assignments, vec!["03", "04", "05", "06", "07", "08"]);
        assert_eq!(config.categories, ErrorCategory::ALL.to_vec());
        assert_eq!(config.error_encoding, Encoding::Latin1);
        assert_eq!(config.event_encoding, Encoding::Utf8);
        assert_eq!(config.delimiter_byte().unwrap(), b';');
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config: EqConfig = toml::from_str("").unwrap();
        assert_eq!(config, EqConfig::default());
    }

    #[test]
    fn test_partial_toml() {
        let config: EqConfig = toml::from_str(
            r#"
            assignments = ["10"]
            categories = ["exceptions"]
            error_encoding = "utf8"
            "#,
        )
        .unwrap();
        assert_eq!(config.assignments, vec!["10"]);
        assert_eq!(config.categories, vec![ErrorCategory::Exceptions]);
        assert_eq!(config.error_encoding, Encoding::Utf8);
        assert_eq!(config.results_dir, PathBuf::from("results"));
    }

    #[test]
    fn test_unknown_category_in_toml_rejected() {
        let parsed: std::result::Result<EqConfig, _> = toml::from_str(r#"categories = ["warnings"]"#);
        assert!(parsed.is_err());
    }

    #[test]
    #[allow(clippy::field_reassign_with_default)]
    fn test_invalid_empty_assignments() {
        let mut config = EqConfig::default();
        config.assignments.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    #[allow(clippy::field_reassign_with_default)]
    fn test_invalid_empty_categories() {
        let mut config = EqConfig::default();
        config.categories.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    #[allow(clippy::field_reassign_with_default)]
    fn test_invalid_delimiter() {
        let mut config = EqConfig::default();
        config.delimiter = ";;".to_string();
        assert!(config.validate().is_err());
        config.delimiter = "§".to_string();
        assert!(config.validate().is_err());
        config.delimiter = ",".to_string();
        assert_eq!(config.delimiter_byte().unwrap(), b',');
    }

    #[test]
    fn test_from_toml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "data_dir = \"/srv/logs\"\nassignments = [\"03\"]").unwrap();

        let config = EqConfig::from_toml(file.path()).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/srv/logs"));
        assert_eq!(config.assignments, vec!["03"]);
    }

    #[test]
    fn test_from_toml_rejects_invalid() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "assignments = []").unwrap();
        assert!(EqConfig::from_toml(file.path()).is_err());
    }

    #[test]
    fn test_from_toml_missing_file() {
        let err = EqConfig::from_toml("/nonexistent/eq.toml").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
