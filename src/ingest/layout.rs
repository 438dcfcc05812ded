use crate::category::ErrorCategory;
use std::path::{Path, PathBuf};

/// Conventional on-disk layout of the course logs
///
/// ```text
/// <data_dir>/data-snapshots/hw<NN>-complete_snapshots.csv
/// <data_dir>/data-compiler-errors/hw<NN>-compiler-errors.csv
/// <data_dir>/data-exceptions/hw<NN>-exceptions.csv
/// ```
#[derive(Debug, Clone)]
pub struct DataLayout {
    data_dir: PathBuf,
}

impl DataLayout {
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    pub fn events_path(&self, assignment: &str) -> PathBuf {
        self.data_dir
            .join("data-snapshots")
            .join(format!("hw{}-complete_snapshots.csv", assignment))
    }

    pub fn errors_path(&self, assignment: &str, category: ErrorCategory) -> PathBuf {
        self.data_dir
            .join(format!("data-{}", category.tag()))
            .join(format!("hw{}-{}.csv", assignment, category.tag()))
    }
}
