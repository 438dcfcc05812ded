use crate::category::ErrorCategory;
use crate::error::{EqError, Result};
use crate::ingest::RawRow;

fn check_columns(row: &RawRow, expected: usize, source_name: &str) -> Result<()> {
    if row.fields.len() < expected {
        return Err(EqError::MalformedRow {
            source_name: source_name.to_string(),
            record: row.record,
            expected,
            found: row.fields.len(),
        });
    }
    Ok(())
}

/// A validated row of the event (snapshot) log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRow {
    pub student_id: String,
    pub timestamp: String,
}

impl EventRow {
    pub const MIN_COLUMNS: usize = 2;

    /// Validate a raw row; only the first two columns are consumed
    pub fn from_raw(row: RawRow, source_name: &str) -> Result<Self> {
        check_columns(&row, Self::MIN_COLUMNS, source_name)?;
        let mut fields = row.fields.into_iter();
        let student_id = fields.next().unwrap_or_default();
        let timestamp = fields.next().unwrap_or_default();
        Ok(Self {
            student_id,
            timestamp,
        })
    }
}

/// A validated row of an error log, shaped by its category
///
/// The timestamp is kept as written in the log (underscore-separated); the
/// normalizer canonicalizes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorRow {
    Compiler {
        student_id: String,
        timestamp: String,
        message: String,
    },
    Exception {
        student_id: String,
        timestamp: String,
        fields: [String; 4],
    },
}

impl ErrorRow {
    /// Validate a raw row against the column layout of `category`
    pub fn from_raw(row: RawRow, category: ErrorCategory, source_name: &str) -> Result<Self> {
        check_columns(&row, category.min_columns(), source_name)?;
        let mut fields = row.fields;
        let student_id = std::mem::take(&mut fields[0]);
        let timestamp = std::mem::take(&mut fields[1]);

        Ok(match category {
            ErrorCategory::CompilerErrors => ErrorRow::Compiler {
                student_id,
                timestamp,
                message: std::mem::take(&mut fields[4]),
            },
            ErrorCategory::Exceptions => ErrorRow::Exception {
                student_id,
                timestamp,
                fields: [
                    std::mem::take(&mut fields[3]),
                    std::mem::take(&mut fields[4]),
                    std::mem::take(&mut fields[5]),
                    std::mem::take(&mut fields[6]),
                ],
            },
        })
    }

    pub fn student_id(&self) -> &str {
        match self {
            ErrorRow::Compiler { student_id, .. } | ErrorRow::Exception { student_id, .. } => {
                student_id
            }
        }
    }

    pub fn timestamp(&self) -> &str {
        match self {
            ErrorRow::Compiler { timestamp, .. } | ErrorRow::Exception { timestamp, .. } => {
                timestamp
            }
        }
    }
}
