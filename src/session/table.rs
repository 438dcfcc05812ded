use crate::category::ErrorCategory;
use crate::error::Result;
use crate::ingest::{ErrorRow, RowSource};
use crate::normalize::{normalize, ErrorRecord};
use std::collections::HashMap;

/// Error identities grouped by student, then by canonical timestamp
///
/// Several records at the same key accumulate in arrival order, duplicates
/// included.
#[derive(Debug, Clone, Default)]
pub struct ErrorTable {
    by_student: HashMap<String, HashMap<String, Vec<String>>>,
    records: usize,
}

impl ErrorTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read, validate and normalize every row of an error log
    ///
    /// # Errors
    /// Fails on the first row that does not have the columns `category`
    /// requires, or on an unreadable record.
    pub fn from_source<S: RowSource>(source: S, category: ErrorCategory) -> Result<Self> {
        let name = source.source_name().to_string();
        let mut table = Self::new();
        for row in source {
            let row = ErrorRow::from_raw(row?, category, &name)?;
            table.insert(normalize(row));
        }
        tracing::debug!("{}: {} {} records", name, table.records, category);
        Ok(table)
    }

    pub fn insert(&mut self, record: ErrorRecord) {
        self.by_student
            .entry(record.student_id)
            .or_default()
            .entry(record.timestamp)
            .or_default()
            .push(record.identity);
        self.records += 1;
    }

    /// Identities reported for a student at an exact timestamp
    pub fn get(&self, student_id: &str, timestamp: &str) -> Option<&[String]> {
        self.by_student
            .get(student_id)?
            .get(timestamp)
            .map(Vec::as_slice)
    }

    /// Total number of records inserted
    pub fn len(&self) -> usize {
        self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records == 0
    }

    /// Iterate over `(student_id, timestamp, identities)` keys
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, &[String])> {
        self.by_student.iter().flat_map(|(student, times)| {
            times
                .iter()
                .map(move |(ts, ids)| (student.as_str(), ts.as_str(), ids.as_slice()))
        })
    }
}

impl FromIterator<ErrorRecord> for ErrorTable {
    fn from_iter<I: IntoIterator<Item = ErrorRecord>>(iter: I) -> Self {
        let mut table = Self::new();
        for record in iter {
            table.insert(record);
        }
        table
    }
}
