#![no_main]

use jadud_eq::ingest::{CsvRowSource, Encoding, ErrorRow};
use jadud_eq::normalize::normalize;
use jadud_eq::ErrorCategory;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes as a latin-1 error log: rows are either rejected with
    // an error or normalized, never a panic
    for category in ErrorCategory::ALL {
        let source = CsvRowSource::from_reader(
            "fuzz.csv",
            Box::new(std::io::Cursor::new(data.to_vec())),
            b';',
            Encoding::Latin1,
        );
        for row in source {
            let Ok(row) = row else { break };
            if let Ok(row) = ErrorRow::from_raw(row, category, "fuzz.csv") {
                let record = normalize(row);
                assert!(!record.timestamp.contains('_'));
            }
        }
    }
});
