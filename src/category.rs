//! Error categories and their log shapes

use crate::error::{EqError, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which error log an assignment is scored against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorCategory {
    /// Compiler diagnostics; the message lives in column 4
    CompilerErrors,
    /// Runtime exceptions; identity is formed from columns 3..=6
    Exceptions,
}

impl ErrorCategory {
    pub const ALL: [ErrorCategory; 2] = [ErrorCategory::CompilerErrors, ErrorCategory::Exceptions];

    /// Tag used in file names and report names
    pub fn tag(self) -> &'static str {
        match self {
            ErrorCategory::CompilerErrors => "compiler-errors",
            ErrorCategory::Exceptions => "exceptions",
        }
    }

    /// Minimum number of columns a row of this category must have
    pub fn min_columns(self) -> usize {
        match self {
            ErrorCategory::CompilerErrors => 5,
            ErrorCategory::Exceptions => 7,
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for ErrorCategory {
    type Err = EqError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "compiler-errors" => Ok(ErrorCategory::CompilerErrors),
            "exceptions" => Ok(ErrorCategory::Exceptions),
            other => Err(EqError::UnknownCategory(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_roundtrips_through_from_str() {
        for category in ErrorCategory::ALL {
            assert_eq!(category.tag().parse::<ErrorCategory>().unwrap(), category);
        }
    }

    #[test]
    fn test_unknown_tag_rejected() {
        let err = "compiler_errors".parse::<ErrorCategory>().unwrap_err();
        assert!(matches!(err, EqError::UnknownCategory(ref t) if t == "compiler_errors"));
    }

    #[test]
    fn test_tag_is_case_sensitive() {
        assert!("Exceptions".parse::<ErrorCategory>().is_err());
    }

    #[test]
    fn test_min_columns() {
        assert_eq!(ErrorCategory::CompilerErrors.min_columns(), 5);
        assert_eq!(ErrorCategory::Exceptions.min_columns(), 7);
    }

    #[test]
    fn test_serde_uses_tags() {
        let json = serde_json::to_string(&ErrorCategory::CompilerErrors).unwrap();
        assert_eq!(json, "\"compiler-errors\"");
    }
}
