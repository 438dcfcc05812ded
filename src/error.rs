//! Error types for log ingestion and scoring
//!
//! Data-integrity problems are fatal for the file they occur in: a silently
//! skipped row would leave a gap in the join between events and errors.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading logs or building sessions
#[derive(Error, Debug)]
pub enum EqError {
    #[error("{source_name}: record {record} has {found} columns, expected at least {expected}")]
    MalformedRow {
        source_name: String,
        record: u64,
        expected: usize,
        found: usize,
    },

    #[error("Unknown error category '{0}' (expected 'compiler-errors' or 'exceptions')")]
    UnknownCategory(String),

    #[error("Failed to open {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for ingestion and scoring operations
pub type Result<T> = std::result::Result<T, EqError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_row_message() {
        let err = EqError::MalformedRow {
            source_name: "hw03-compiler-errors.csv".to_string(),
            record: 7,
            expected: 5,
            found: 3,
        };
        assert_eq!(
            err.to_string(),
            "hw03-compiler-errors.csv: record 7 has 3 columns, expected at least 5"
        );
    }

    #[test]
    fn test_unknown_category_message() {
        let err = EqError::UnknownCategory("warnings".to_string());
        assert!(err.to_string().contains("'warnings'"));
    }
}
