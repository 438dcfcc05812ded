//! CLI argument parsing for jadud-eq

use crate::category::ErrorCategory;
use crate::ingest::Encoding;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for scores
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `student_id score` lines (default)
    Text,
    /// JSON document with join statistics
    Json,
    /// CSV table, one column per assignment
    Csv,
}

#[derive(Parser, Debug)]
#[command(name = "jadud-eq")]
#[command(version)]
#[command(
    about = "Jadud's Error Quotient from student compilation and error logs",
    long_about = None
)]
pub struct Cli {
    /// Event (snapshot) log of one assignment
    #[arg(long = "events", value_name = "FILE")]
    pub events: Option<PathBuf>,

    /// Error or exception log of the same assignment
    #[arg(long = "errors", value_name = "FILE")]
    pub errors: Option<PathBuf>,

    /// Error category; repeatable in batch mode (default: all configured)
    #[arg(short = 'k', long = "category", value_enum, value_name = "CATEGORY")]
    pub categories: Vec<ErrorCategory>,

    /// Assignment number(s); one label in single mode, a list in batch mode
    #[arg(short = 'a', long = "assignment", value_name = "NN")]
    pub assignments: Vec<String>,

    /// Score every configured assignment from the data directory layout
    #[arg(short = 'b', long = "batch")]
    pub batch: bool,

    /// TOML configuration file for batch mode
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Root of the data-* directories (batch mode)
    #[arg(long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Where report files are written (batch mode)
    #[arg(long = "results-dir", value_name = "DIR")]
    pub results_dir: Option<PathBuf>,

    /// Encoding of the error logs
    #[arg(long = "error-encoding", value_enum, value_name = "ENCODING")]
    pub error_encoding: Option<Encoding>,

    /// Field delimiter of all logs
    #[arg(short = 'd', long = "delimiter", value_name = "CHAR")]
    pub delimiter: Option<String>,

    /// Output format
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Show the score of every event pair
    #[arg(long = "explain")]
    pub explain: bool,

    /// Enable debug logging on stderr
    #[arg(long = "debug")]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_single_mode() {
        let cli = Cli::parse_from([
            "jadud-eq",
            "--events",
            "snapshots.csv",
            "--errors",
            "errors.csv",
        ]);
        assert_eq!(cli.events, Some(PathBuf::from("snapshots.csv")));
        assert_eq!(cli.errors, Some(PathBuf::from("errors.csv")));
        assert!(cli.categories.is_empty());
        assert!(!cli.batch);
    }

    #[test]
    fn test_cli_format_default_text() {
        let cli = Cli::parse_from(["jadud-eq"]);
        assert_eq!(cli.format, OutputFormat::Text);
        assert!(!cli.explain);
        assert!(!cli.debug);
    }

    #[test]
    fn test_cli_category_values() {
        let cli = Cli::parse_from([
            "jadud-eq",
            "-b",
            "--category",
            "compiler-errors",
            "-k",
            "exceptions",
        ]);
        assert_eq!(
            cli.categories,
            vec![ErrorCategory::CompilerErrors, ErrorCategory::Exceptions]
        );
    }

    #[test]
    fn test_cli_unknown_category_rejected() {
        let result = Cli::try_parse_from(["jadud-eq", "--category", "warnings"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_repeated_assignments() {
        let cli = Cli::parse_from(["jadud-eq", "--batch", "-a", "03", "-a", "04"]);
        assert!(cli.batch);
        assert_eq!(cli.assignments, vec!["03", "04"]);
    }

    #[test]
    fn test_cli_encoding_and_delimiter() {
        let cli = Cli::parse_from([
            "jadud-eq",
            "--error-encoding",
            "utf8",
            "-d",
            ",",
        ]);
        assert_eq!(cli.error_encoding, Some(Encoding::Utf8));
        assert_eq!(cli.delimiter.as_deref(), Some(","));
    }

    #[test]
    fn test_cli_json_explain() {
        let cli = Cli::parse_from(["jadud-eq", "--format", "json", "--explain"]);
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.explain);
    }
}
