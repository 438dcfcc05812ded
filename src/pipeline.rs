//! Assignment-by-assignment computation
//!
//! Each assignment builds its own error table and session table, scores
//! them, and hands only the scores on; nothing is shared between
//! assignments.

use crate::category::ErrorCategory;
use crate::config::EqConfig;
use crate::error::Result;
use crate::ingest::{CsvRowSource, RowSource};
use crate::report::{
    column_label, describe, CsvReport, DescribeCsv, JsonAssignment, JsonReport, ScoreMatrix,
};
use crate::scoring::{score_session_detailed, score_sessions, EqBreakdown, StudentScores};
use crate::session::{ErrorTable, JoinStats, SessionBuilder};
use anyhow::Context;
use std::fs;
use std::path::PathBuf;

/// Scores of one (assignment, category) pair
#[derive(Debug, Clone)]
pub struct AssignmentScores {
    pub assignment: String,
    pub category: ErrorCategory,
    pub scores: StudentScores,
    pub stats: JoinStats,
    /// Present when requested
    pub breakdown: Option<Vec<EqBreakdown>>,
}

impl AssignmentScores {
    pub fn to_json(&self) -> JsonAssignment {
        let json = JsonAssignment::new(&self.assignment, self.stats, &self.scores);
        match &self.breakdown {
            Some(breakdown) => json.with_breakdown(breakdown.clone()),
            None => json,
        }
    }
}

/// Build sessions from the two logs of one assignment and score them
pub fn score_assignment<E, V>(
    assignment: &str,
    category: ErrorCategory,
    errors: E,
    events: V,
    explain: bool,
) -> Result<AssignmentScores>
where
    E: RowSource,
    V: RowSource,
{
    let error_table = ErrorTable::from_source(errors, category)?;
    let sessions = SessionBuilder::new(error_table).build(events)?;
    let stats = sessions.stats();

    if stats.dropped_errors() > 0 {
        tracing::warn!(
            "hw{} {}: {} error records matched no event and were dropped",
            assignment,
            category,
            stats.dropped_errors()
        );
    }

    let scores = score_sessions(&sessions);
    let breakdown = explain.then(|| sessions.iter().map(score_session_detailed).collect());

    tracing::info!(
        "hw{} {}: scored {} students ({} events, {} errors)",
        assignment,
        category,
        scores.len(),
        stats.events,
        stats.errors
    );

    Ok(AssignmentScores {
        assignment: assignment.to_string(),
        category,
        scores,
        stats,
        breakdown,
    })
}

/// Everything computed for one category across all assignments
#[derive(Debug, Clone)]
pub struct CategoryReport {
    pub category: ErrorCategory,
    pub matrix: ScoreMatrix,
    pub assignments: Vec<AssignmentScores>,
}

impl CategoryReport {
    pub fn to_json(&self) -> JsonReport {
        let mut report = JsonReport::new(self.category);
        for assignment in &self.assignments {
            report.add_assignment(assignment.to_json());
        }
        report
    }

    /// Summary per assignment (one column each)
    pub fn per_assignment_summary(&self) -> anyhow::Result<DescribeCsv> {
        let mut out = DescribeCsv::new();
        for assignment in self.matrix.assignments() {
            let label = column_label(assignment);
            out.add_summary(describe(&label, &self.matrix.column(assignment))?);
        }
        Ok(out)
    }

    /// Summary per student (one row each)
    pub fn per_student_summary(&self) -> anyhow::Result<DescribeCsv> {
        let mut out = DescribeCsv::new();
        for student in self.matrix.students() {
            out.add_summary(describe(student, &self.matrix.row(student))?);
        }
        Ok(out)
    }
}

/// Batch runner over the configured assignments and categories
#[derive(Debug, Clone)]
pub struct Pipeline {
    config: EqConfig,
}

impl Pipeline {
    pub fn new(config: EqConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EqConfig {
        &self.config
    }

    /// Score one assignment from the conventional file layout
    ///
    /// Returns `Ok(None)` when the assignment has no event log.
    pub fn run_assignment(
        &self,
        assignment: &str,
        category: ErrorCategory,
        explain: bool,
    ) -> Result<Option<AssignmentScores>> {
        let layout = self.config.layout();
        let delimiter = self.config.delimiter_byte()?;

        let events_path = layout.events_path(assignment);
        if !events_path.exists() {
            tracing::warn!(
                "hw{}: no event log at {}, skipping",
                assignment,
                events_path.display()
            );
            return Ok(None);
        }

        let errors = CsvRowSource::open(
            layout.errors_path(assignment, category),
            delimiter,
            self.config.error_encoding,
        )?;
        let events = CsvRowSource::open(&events_path, delimiter, self.config.event_encoding)?;

        score_assignment(assignment, category, errors, events, explain).map(Some)
    }

    /// Score every configured assignment for one category
    pub fn run_category(&self, category: ErrorCategory, explain: bool) -> Result<CategoryReport> {
        let mut matrix = ScoreMatrix::new();
        let mut assignments = Vec::new();

        for assignment in &self.config.assignments {
            if let Some(scores) = self.run_assignment(assignment, category, explain)? {
                matrix.add_assignment(assignment, &scores.scores);
                assignments.push(scores);
            }
        }

        Ok(CategoryReport {
            category,
            matrix,
            assignments,
        })
    }

    /// Write the score table and both summaries of a category
    ///
    /// Returns the paths written, in order: scores, per-assignment summary,
    /// per-student summary.
    pub fn write_reports(&self, report: &CategoryReport) -> anyhow::Result<Vec<PathBuf>> {
        let dir = &self.config.results_dir;
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create results directory {}", dir.display()))?;

        let stem = format!("jadud-{}", report.category.tag());
        let outputs = [
            (
                dir.join(format!("{}.csv", stem)),
                CsvReport::new(&report.matrix).to_csv()?,
            ),
            (
                dir.join(format!("{}-per-homework.csv", stem)),
                report.per_assignment_summary()?.per_column()?,
            ),
            (
                dir.join(format!("{}-per-student.csv", stem)),
                report.per_student_summary()?.per_row("student_id")?,
            ),
        ];

        let mut written = Vec::with_capacity(outputs.len());
        for (path, content) in outputs {
            fs::write(&path, content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::debug!("Wrote {}", path.display());
            written.push(path);
        }

        Ok(written)
    }
}
