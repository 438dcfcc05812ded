use crate::scoring::StudentScores;
use std::collections::BTreeMap;

/// Column label of an assignment in exported tables
pub fn column_label(assignment: &str) -> String {
    format!("jadud_hw_{}", assignment)
}

/// Scores of every student across assignments (outer join)
///
/// Students are kept sorted; assignments keep the order they were added in.
/// A student missing from an assignment simply has no cell for it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreMatrix {
    assignments: Vec<String>,
    scores: BTreeMap<String, BTreeMap<String, f64>>,
}

impl ScoreMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    /// Join the scores of one assignment into the matrix
    ///
    /// Adding the same assignment twice replaces its cells.
    pub fn add_assignment(&mut self, assignment: &str, scores: &StudentScores) {
        if !self.assignments.iter().any(|a| a == assignment) {
            self.assignments.push(assignment.to_string());
        } else {
            for row in self.scores.values_mut() {
                row.remove(assignment);
            }
            self.scores.retain(|_, row| !row.is_empty());
        }

        for (student, score) in scores {
            self.scores
                .entry(student.clone())
                .or_default()
                .insert(assignment.to_string(), *score);
        }
    }

    pub fn assignments(&self) -> &[String] {
        &self.assignments
    }

    pub fn students(&self) -> impl Iterator<Item = &str> {
        self.scores.keys().map(String::as_str)
    }

    pub fn student_count(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn get(&self, student: &str, assignment: &str) -> Option<f64> {
        self.scores.get(student)?.get(assignment).copied()
    }

    /// Present scores of one assignment, in student order
    pub fn column(&self, assignment: &str) -> Vec<f64> {
        self.scores
            .values()
            .filter_map(|row| row.get(assignment).copied())
            .collect()
    }

    /// Present scores of one student, in assignment order
    pub fn row(&self, student: &str) -> Vec<f64> {
        self.assignments
            .iter()
            .filter_map(|a| self.get(student, a))
            .collect()
    }
}
