//! jadud-eq - Jadud's Error Quotient for student compilation logs
//!
//! This library reconstructs per-student compilation sessions by joining an
//! error (or exception) log onto an event log, and scores each session with
//! Jadud's pairwise Error Quotient. Scores from several assignments can be
//! joined into a report and summarized.

pub mod category;
pub mod cli;
pub mod config;
pub mod error;
pub mod ingest;
pub mod normalize;
pub mod pipeline;
pub mod report;
pub mod scoring;
pub mod session;

pub use category::ErrorCategory;
pub use error::{EqError, Result};
