//! Session reconstruction
//!
//! Errors are subordinate to events: they are folded into a lookup table
//! keyed by `(student_id, canonical timestamp)` and attached to the event
//! rows that carry exactly that key. Errors with no matching event are
//! dropped; they never create events.

mod builder;
mod table;

pub use builder::{JoinStats, SessionBuilder, SessionTable};
pub use table::ErrorTable;

use serde::Serialize;

/// One compilation or run attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompilationEvent {
    pub timestamp: String,
    /// Identities reported at this event; duplicates are kept, scoring uses
    /// set semantics. Empty means a clean attempt.
    pub errors: Vec<String>,
}

impl CompilationEvent {
    pub fn new(timestamp: impl Into<String>, errors: Vec<String>) -> Self {
        Self {
            timestamp: timestamp.into(),
            errors,
        }
    }

    pub fn clean(timestamp: impl Into<String>) -> Self {
        Self::new(timestamp, Vec::new())
    }

    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// The ordered attempts of one student within one assignment
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudentSession {
    pub student_id: String,
    pub events: Vec<CompilationEvent>,
}

impl StudentSession {
    pub fn new(student_id: impl Into<String>, events: Vec<CompilationEvent>) -> Self {
        Self {
            student_id: student_id.into(),
            events,
        }
    }

    /// Consecutive event pairs in arrival order (`N-1` of them)
    pub fn pairs(&self) -> impl Iterator<Item = (&CompilationEvent, &CompilationEvent)> {
        self.events.windows(2).map(|w| (&w[0], &w[1]))
    }

    pub fn pair_count(&self) -> usize {
        self.events.len().saturating_sub(1)
    }
}
