//! Log ingestion
//!
//! Event and error logs arrive as semicolon-delimited tables with a header
//! row. Rows are read through a [`RowSource`] and validated into typed
//! records ([`EventRow`], [`ErrorRow`]) before any positional field access.

mod layout;
mod rows;
mod source;

pub use layout::DataLayout;
pub use rows::{ErrorRow, EventRow};
pub use source::{CsvRowSource, Encoding, RawRow, RowSource, VecRowSource};
