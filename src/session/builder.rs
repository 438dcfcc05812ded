use crate::error::Result;
use crate::ingest::{EventRow, RowSource};
use crate::session::{CompilationEvent, ErrorTable, StudentSession};
use indexmap::IndexMap;
use std::collections::HashSet;

/// Counters describing how well the two logs joined
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JoinStats {
    /// Event rows read
    pub events: usize,
    /// Error records in the table
    pub errors: usize,
    /// Error records whose key matched at least one event
    pub matched_errors: usize,
}

impl JoinStats {
    /// Error records that never found an event (lost by the join)
    pub fn dropped_errors(&self) -> usize {
        self.errors - self.matched_errors
    }
}

/// Sessions of one assignment, students in order of their first event
#[derive(Debug, Clone, Default)]
pub struct SessionTable {
    sessions: IndexMap<String, StudentSession>,
    stats: JoinStats,
}

impl SessionTable {
    pub fn get(&self, student_id: &str) -> Option<&StudentSession> {
        self.sessions.get(student_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &StudentSession> {
        self.sessions.values()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn stats(&self) -> JoinStats {
        self.stats
    }
}

impl IntoIterator for SessionTable {
    type Item = StudentSession;
    type IntoIter = indexmap::map::IntoValues<String, StudentSession>;

    fn into_iter(self) -> Self::IntoIter {
        self.sessions.into_values()
    }
}

/// Joins an [`ErrorTable`] onto the event log of one assignment
///
/// # Example
/// ```
/// use jadud_eq::normalize::ErrorRecord;
/// use jadud_eq::session::{ErrorTable, SessionBuilder};
/// use jadud_eq::ingest::EventRow;
///
/// let errors: ErrorTable = vec![ErrorRecord {
///     student_id: "A".to_string(),
///     timestamp: "t:1".to_string(),
///     identity: "';' expected".to_string(),
/// }]
/// .into_iter()
/// .collect();
///
/// let events = vec![
///     EventRow { student_id: "A".to_string(), timestamp: "t:1".to_string() },
///     EventRow { student_id: "A".to_string(), timestamp: "t:2".to_string() },
/// ];
///
/// let table = SessionBuilder::new(errors).build_from_rows(events);
/// let session = table.get("A").unwrap();
/// assert_eq!(session.events.len(), 2);
/// assert!(session.events[1].is_clean());
/// ```
#[derive(Debug)]
pub struct SessionBuilder {
    errors: ErrorTable,
}

impl SessionBuilder {
    pub fn new(errors: ErrorTable) -> Self {
        Self { errors }
    }

    /// Validate and join every row of an event log, in file order
    pub fn build<S: RowSource>(self, source: S) -> Result<SessionTable> {
        let name = source.source_name().to_string();
        let mut rows = Vec::new();
        for row in source {
            rows.push(EventRow::from_raw(row?, &name)?);
        }
        Ok(self.build_from_rows(rows))
    }

    /// Join already-validated event rows, in the order given
    pub fn build_from_rows<I>(self, rows: I) -> SessionTable
    where
        I: IntoIterator<Item = EventRow>,
    {
        let mut sessions: IndexMap<String, StudentSession> = IndexMap::new();
        let mut matched_keys: HashSet<(String, String)> = HashSet::new();
        let mut stats = JoinStats {
            errors: self.errors.len(),
            ..JoinStats::default()
        };

        for row in rows {
            stats.events += 1;
            let errors = match self.errors.get(&row.student_id, &row.timestamp) {
                Some(ids) => {
                    if matched_keys.insert((row.student_id.clone(), row.timestamp.clone())) {
                        stats.matched_errors += ids.len();
                    }
                    ids.to_vec()
                }
                None => Vec::new(),
            };

            sessions
                .entry(row.student_id.clone())
                .or_insert_with(|| StudentSession::new(row.student_id, Vec::new()))
                .events
                .push(CompilationEvent::new(row.timestamp, errors));
        }

        tracing::debug!(
            "Built {} sessions from {} events ({} of {} errors joined)",
            sessions.len(),
            stats.events,
            stats.matched_errors,
            stats.errors
        );

        SessionTable { sessions, stats }
    }
}
