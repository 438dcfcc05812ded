//! Canonical error identities
//!
//! Two errors are "the same type" iff their identity strings are equal. The
//! identity is a pure function of the raw fields:
//!
//! - compiler errors: first line of the message, trimmed on both ends. The
//!   remaining lines (source excerpts, carets) would otherwise split identical
//!   errors into distinct identities.
//! - exceptions: the four identifying fields joined by single spaces, in
//!   column order.
//!
//! Error-log timestamps separate their parts with `_` where the event log
//! uses `:`; [`canonical_timestamp`] rewrites them into the event-log form.

use crate::ingest::ErrorRow;

/// An error attached to a `(student_id, timestamp)` join key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorRecord {
    pub student_id: String,
    /// Canonical (event-log) timestamp
    pub timestamp: String,
    pub identity: String,
}

/// Identity of a compiler error: the trimmed first line of the message
///
/// # Example
/// ```
/// use jadud_eq::normalize::compiler_error_identity;
///
/// let message = "  cannot find symbol\n  symbol:   variable x\n  location: class Main";
/// assert_eq!(compiler_error_identity(message), "cannot find symbol");
/// ```
pub fn compiler_error_identity(message: &str) -> String {
    let first_line = match message.find('\n') {
        Some(idx) => &message[..idx],
        None => message,
    };
    first_line.trim().to_string()
}

/// Identity of a runtime exception: the four fields joined by single spaces
pub fn exception_identity(fields: &[String; 4]) -> String {
    fields.join(" ")
}

/// Rewrite an error-log timestamp into the event-log form
///
/// ```
/// use jadud_eq::normalize::canonical_timestamp;
///
/// assert_eq!(canonical_timestamp("2023-02-01 10_15_42"), "2023-02-01 10:15:42");
/// ```
pub fn canonical_timestamp(raw: &str) -> String {
    raw.replace('_', ":")
}

/// Normalize a validated error row into a join-ready record
pub fn normalize(row: ErrorRow) -> ErrorRecord {
    match row {
        ErrorRow::Compiler {
            student_id,
            timestamp,
            message,
        } => ErrorRecord {
            student_id,
            timestamp: canonical_timestamp(&timestamp),
            identity: compiler_error_identity(&message),
        },
        ErrorRow::Exception {
            student_id,
            timestamp,
            fields,
        } => ErrorRecord {
            student_id,
            timestamp: canonical_timestamp(&timestamp),
            identity: exception_identity(&fields),
        },
    }
}
