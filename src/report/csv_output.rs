//! CSV export of score matrices and their summaries
//!
//! Everything goes through `csv::Writer` with `\n` line endings, so student
//! ids and assignment labels are quoted only when they need to be.

use crate::error::{EqError, Result};
use crate::report::{column_label, ScoreMatrix, Summary, SUMMARY_HEADERS};

/// Shortest round-trip formatting that always keeps a decimal point
pub fn format_score(score: f64) -> String {
    format!("{:?}", score)
}

fn format_stat(value: Option<f64>) -> String {
    value.map(format_score).unwrap_or_default()
}

fn table_writer() -> csv::Writer<Vec<u8>> {
    csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new())
}

fn finish(writer: csv::Writer<Vec<u8>>) -> Result<String> {
    let bytes = writer
        .into_inner()
        .map_err(|e| EqError::Csv(e.into_error().into()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// One row per student, one column per assignment; missing cells are empty
#[derive(Debug)]
pub struct CsvReport<'a> {
    matrix: &'a ScoreMatrix,
}

impl<'a> CsvReport<'a> {
    pub fn new(matrix: &'a ScoreMatrix) -> Self {
        Self { matrix }
    }

    fn header(&self) -> Vec<String> {
        let mut headers = vec!["student_id".to_string()];
        headers.extend(self.matrix.assignments().iter().map(|a| column_label(a)));
        headers
    }

    fn row(&self, student: &str) -> Vec<String> {
        let mut fields = vec![student.to_string()];
        for assignment in self.matrix.assignments() {
            fields.push(format_stat(self.matrix.get(student, assignment)));
        }
        fields
    }

    /// Generate CSV output as string
    pub fn to_csv(&self) -> Result<String> {
        let mut writer = table_writer();
        writer.write_record(self.header())?;
        for student in self.matrix.students() {
            writer.write_record(self.row(student))?;
        }
        finish(writer)
    }
}

/// Summaries as CSV
///
/// Two layouts: `per_row` puts one summary per line (used per student),
/// `per_column` transposes so every summary is a column and every statistic
/// a line (used per assignment).
#[derive(Debug, Default)]
pub struct DescribeCsv {
    summaries: Vec<Summary>,
}

impl DescribeCsv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_summary(&mut self, summary: Summary) {
        self.summaries.push(summary);
    }

    /// `<label_header>,count,mean,...` then one line per summary
    pub fn per_row(&self, label_header: &str) -> Result<String> {
        let mut writer = table_writer();

        let mut header = vec![label_header.to_string()];
        header.extend(SUMMARY_HEADERS.iter().map(|h| h.to_string()));
        writer.write_record(&header)?;

        for summary in &self.summaries {
            let mut record = vec![summary.label.clone(), summary.count.to_string()];
            record.extend(summary.values().into_iter().map(format_stat));
            writer.write_record(&record)?;
        }

        finish(writer)
    }

    /// `statistic,<label>,<label>,...` then one line per statistic
    pub fn per_column(&self) -> Result<String> {
        let mut writer = table_writer();

        let mut header = vec!["statistic".to_string()];
        header.extend(self.summaries.iter().map(|s| s.label.clone()));
        writer.write_record(&header)?;

        let mut counts = vec![SUMMARY_HEADERS[0].to_string()];
        counts.extend(self.summaries.iter().map(|s| s.count.to_string()));
        writer.write_record(&counts)?;

        for (idx, name) in SUMMARY_HEADERS.iter().enumerate().skip(1) {
            let mut record = vec![name.to_string()];
            record.extend(
                self.summaries
                    .iter()
                    .map(|s| format_stat(s.values()[idx - 1])),
            );
            writer.write_record(&record)?;
        }

        finish(writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::describe;
    use crate::scoring::StudentScores;

    fn matrix() -> ScoreMatrix {
        let mut matrix = ScoreMatrix::new();
        let hw03: StudentScores = [("A".to_string(), 0.0), ("D".to_string(), 8.0 / 11.0)]
            .into_iter()
            .collect();
        let hw04: StudentScores = [("A".to_string(), 1.0)].into_iter().collect();
        matrix.add_assignment("03", &hw03);
        matrix.add_assignment("04", &hw04);
        matrix
    }

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(1.0), "1.0");
        assert_eq!(format_score(0.0), "0.0");
        assert_eq!(format_score(8.0 / 11.0), "0.7272727272727273");
    }

    #[test]
    fn test_csv_report() {
        let matrix = matrix();
        let csv = CsvReport::new(&matrix).to_csv().unwrap();
        assert_eq!(
            csv,
            "student_id,jadud_hw_03,jadud_hw_04\n\
             A,0.0,1.0\n\
             D,0.7272727272727273,\n"
        );
    }

    #[test]
    fn test_csv_report_empty_matrix() {
        let matrix = ScoreMatrix::new();
        assert_eq!(CsvReport::new(&matrix).to_csv().unwrap(), "student_id\n");
    }

    #[test]
    fn test_describe_per_row() {
        let mut out = DescribeCsv::new();
        out.add_summary(describe("A", &[0.0, 1.0]).unwrap());
        out.add_summary(describe("D", &[]).unwrap());

        let csv = out.per_row("student_id").unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "student_id,count,mean,std,min,25%,50%,75%,max");
        assert!(lines[1].starts_with("A,2,0.5,"));
        assert_eq!(lines[2], "D,0,,,,,,,");
    }

    #[test]
    fn test_describe_per_column() {
        let mut out = DescribeCsv::new();
        out.add_summary(describe("jadud_hw_03", &[0.5]).unwrap());
        out.add_summary(describe("jadud_hw_04", &[1.0, 1.0]).unwrap());

        let csv = out.per_column().unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "statistic,jadud_hw_03,jadud_hw_04");
        assert_eq!(lines[1], "count,1,2");
        assert_eq!(lines[2], "mean,0.5,1.0");
        assert_eq!(lines[3], "std,,0.0");
        assert_eq!(lines[8], "max,0.5,1.0");
    }

    #[test]
    fn test_csv_report_quotes_ids_and_labels() {
        let mut matrix = ScoreMatrix::new();
        let scores: StudentScores = [("Doe, Jane".to_string(), 1.0)].into_iter().collect();
        matrix.add_assignment("0\"3", &scores);
        matrix.add_assignment("04,b", &scores);

        let output = CsvReport::new(&matrix).to_csv().unwrap();
        assert_eq!(
            output,
            "student_id,\"jadud_hw_0\"\"3\",\"jadud_hw_04,b\"\n\
             \"Doe, Jane\",1.0,1.0\n"
        );

        // Same column count on every line once parsed back
        let mut reader = csv::ReaderBuilder::new().from_reader(output.as_bytes());
        assert_eq!(reader.headers().unwrap().len(), 3);
        for record in reader.records() {
            assert_eq!(record.unwrap().len(), 3);
        }
    }

    #[test]
    fn test_summary_min_max_print_like_cells() {
        let mut out = DescribeCsv::new();
        out.add_summary(describe("jadud_hw_03", &[8.0 / 11.0, 1.0]).unwrap());

        let csv = out.per_column().unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[4], "min,0.7272727272727273");
        assert_eq!(lines[8], "max,1.0");
    }

    #[test]
    fn test_describe_labels_are_quoted() {
        let mut out = DescribeCsv::new();
        out.add_summary(describe("Doe, Jane", &[0.5]).unwrap());

        let csv = out.per_row("student_id").unwrap();
        assert!(csv.contains("\n\"Doe, Jane\",1,0.5,,0.5,0.5,0.5,0.5,0.5\n"));
    }
}
