//! Report assembly
//!
//! Per-assignment score maps are outer-joined into a [`ScoreMatrix`]
//! (students × assignments) and exported as CSV, descriptive statistics or
//! JSON.

mod csv_output;
mod describe;
mod json;
mod matrix;

pub use csv_output::{format_score, CsvReport, DescribeCsv};
pub use describe::{describe, Summary, SUMMARY_HEADERS};
pub use json::{JsonAssignment, JsonReport, JsonScore};
pub use matrix::{column_label, ScoreMatrix};
