use crate::error::{EqError, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Text encoding of a log file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    /// UTF-8, invalid sequences replaced with U+FFFD
    #[default]
    Utf8,
    /// ISO-8859-1: every byte is the code point of the same value
    Latin1,
}

impl Encoding {
    pub fn decode(self, bytes: &[u8]) -> String {
        match self {
            Encoding::Utf8 => String::from_utf8_lossy(bytes).into_owned(),
            Encoding::Latin1 => bytes.iter().map(|&b| b as char).collect(),
        }
    }
}

/// One data row of a log, header excluded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    /// 1-based index of the data record (the header is not counted)
    pub record: u64,
    pub fields: Vec<String>,
}

impl RawRow {
    pub fn new(record: u64, fields: Vec<String>) -> Self {
        Self { record, fields }
    }
}

/// A stream of raw rows with a name for diagnostics
pub trait RowSource: Iterator<Item = Result<RawRow>> {
    /// Name used in error messages (usually the file name)
    fn source_name(&self) -> &str;
}

/// Row source backed by a delimited text reader
///
/// Rows are read with flexible lengths: column counts are checked by the
/// typed row constructors so the error can name the expected shape.
pub struct CsvRowSource {
    name: String,
    reader: csv::Reader<Box<dyn Read>>,
    encoding: Encoding,
    record: u64,
}

impl CsvRowSource {
    /// Open a log file, skipping its header row
    pub fn open<P: AsRef<Path>>(path: P, delimiter: u8, encoding: Encoding) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| EqError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!("Opened {} ({:?})", path.display(), encoding);

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Ok(Self::from_reader(name, Box::new(file), delimiter, encoding))
    }

    /// Wrap any reader, skipping its header row
    pub fn from_reader(
        name: impl Into<String>,
        reader: Box<dyn Read>,
        delimiter: u8,
        encoding: Encoding,
    ) -> Self {
        let reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        Self {
            name: name.into(),
            reader,
            encoding,
            record: 0,
        }
    }
}

impl Iterator for CsvRowSource {
    type Item = Result<RawRow>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut record = csv::ByteRecord::new();
        match self.reader.read_byte_record(&mut record) {
            Ok(true) => {
                self.record += 1;
                let fields = record
                    .iter()
                    .map(|field| self.encoding.decode(field))
                    .collect();
                Some(Ok(RawRow::new(self.record, fields)))
            }
            Ok(false) => None,
            Err(e) => Some(Err(EqError::Csv(e))),
        }
    }
}

impl RowSource for CsvRowSource {
    fn source_name(&self) -> &str {
        &self.name
    }
}

/// In-memory row source (header already stripped)
#[derive(Debug, Clone)]
pub struct VecRowSource {
    name: String,
    rows: std::vec::IntoIter<Vec<String>>,
    record: u64,
}

impl VecRowSource {
    pub fn new(name: impl Into<String>, rows: Vec<Vec<String>>) -> Self {
        Self {
            name: name.into(),
            rows: rows.into_iter(),
            record: 0,
        }
    }

    /// Convenience constructor from string slices
    pub fn from_strs(name: impl Into<String>, rows: &[&[&str]]) -> Self {
        let rows = rows
            .iter()
            .map(|row| row.iter().map(|f| f.to_string()).collect())
            .collect();
        Self::new(name, rows)
    }
}

impl Iterator for VecRowSource {
    type Item = Result<RawRow>;

    fn next(&mut self) -> Option<Self::Item> {
        let fields = self.rows.next()?;
        self.record += 1;
        Some(Ok(RawRow::new(self.record, fields)))
    }
}

impl RowSource for VecRowSource {
    fn source_name(&self) -> &str {
        &self.name
    }
}
