//! JSON export of per-assignment results

use crate::category::ErrorCategory;
use crate::scoring::{EqBreakdown, StudentScores};
use crate::session::JoinStats;
use serde::Serialize;

/// A single student's quotient
#[derive(Debug, Clone, Serialize)]
pub struct JsonScore {
    pub student_id: String,
    pub eq: f64,
}

/// Results of one assignment
#[derive(Debug, Clone, Serialize)]
pub struct JsonAssignment {
    pub assignment: String,
    pub events: usize,
    pub errors: usize,
    pub dropped_errors: usize,
    pub scores: Vec<JsonScore>,
    /// Pair-by-pair detail (only with --explain)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<Vec<EqBreakdown>>,
}

impl JsonAssignment {
    pub fn new(assignment: &str, stats: JoinStats, scores: &StudentScores) -> Self {
        Self {
            assignment: assignment.to_string(),
            events: stats.events,
            errors: stats.errors,
            dropped_errors: stats.dropped_errors(),
            scores: scores
                .iter()
                .map(|(student_id, eq)| JsonScore {
                    student_id: student_id.clone(),
                    eq: *eq,
                })
                .collect(),
            breakdown: None,
        }
    }

    pub fn with_breakdown(mut self, breakdown: Vec<EqBreakdown>) -> Self {
        self.breakdown = Some(breakdown);
        self
    }
}

/// Top-level JSON document
#[derive(Debug, Clone, Serialize)]
pub struct JsonReport {
    pub version: String,
    pub category: ErrorCategory,
    pub assignments: Vec<JsonAssignment>,
}

impl JsonReport {
    pub fn new(category: ErrorCategory) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            category,
            assignments: Vec::new(),
        }
    }

    pub fn add_assignment(&mut self, assignment: JsonAssignment) {
        self.assignments.push(assignment);
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::PairScore;

    fn scores() -> StudentScores {
        [("A".to_string(), 0.0), ("E".to_string(), 1.0)]
            .into_iter()
            .collect()
    }

    fn stats() -> JoinStats {
        JoinStats {
            events: 4,
            errors: 3,
            matched_errors: 2,
        }
    }

    #[test]
    fn test_json_report_shape() {
        let mut report = JsonReport::new(ErrorCategory::CompilerErrors);
        report.add_assignment(JsonAssignment::new("03", stats(), &scores()));

        let value: serde_json::Value =
            serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(value["category"], "compiler-errors");
        assert_eq!(value["assignments"][0]["assignment"], "03");
        assert_eq!(value["assignments"][0]["dropped_errors"], 1);
        assert_eq!(value["assignments"][0]["scores"][1]["student_id"], "E");
        assert_eq!(value["assignments"][0]["scores"][1]["eq"], 1.0);
        assert!(value["assignments"][0].get("breakdown").is_none());
    }

    #[test]
    fn test_json_breakdown_included() {
        let breakdown = EqBreakdown {
            student_id: "E".to_string(),
            events: 2,
            pairs: vec![PairScore::RepeatedError],
            pair_scores: vec![1.0],
            eq: 1.0,
        };
        let assignment =
            JsonAssignment::new("03", stats(), &scores()).with_breakdown(vec![breakdown]);
        let value = serde_json::to_value(&assignment).unwrap();
        assert_eq!(value["breakdown"][0]["pairs"][0], "repeated_error");
    }
}
