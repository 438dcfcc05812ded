use crate::scoring::PairScore;
use crate::session::{SessionTable, StudentSession};
use indexmap::IndexMap;
use serde::Serialize;

/// EQ per student for one assignment, in session-table order
pub type StudentScores = IndexMap<String, f64>;

/// Tolerance for floating-point drift before the final clamp
const RANGE_TOLERANCE: f64 = 1e-9;

/// Pair-by-pair account of one student's score
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EqBreakdown {
    pub student_id: String,
    pub events: usize,
    pub pairs: Vec<PairScore>,
    pub pair_scores: Vec<f64>,
    pub eq: f64,
}

fn mean_of_pairs(pair_scores: &[f64]) -> f64 {
    if pair_scores.is_empty() {
        // No consecutive attempts: nothing could have recurred
        return 0.0;
    }

    let total: f64 = pair_scores.iter().sum();
    let mean = total / pair_scores.len() as f64;

    debug_assert!(
        (-RANGE_TOLERANCE..=1.0 + RANGE_TOLERANCE).contains(&mean),
        "EQ out of range before clamping: {}",
        mean
    );
    mean.clamp(0.0, 1.0)
}

/// Jadud's EQ of one session, in `[0, 1]`
pub fn score_session(session: &StudentSession) -> f64 {
    let pair_scores: Vec<f64> = session
        .pairs()
        .map(|(a, b)| PairScore::classify(a, b).value())
        .collect();
    mean_of_pairs(&pair_scores)
}

/// Like [`score_session`], keeping the classification of every pair
pub fn score_session_detailed(session: &StudentSession) -> EqBreakdown {
    let pairs: Vec<PairScore> = session
        .pairs()
        .map(|(a, b)| PairScore::classify(a, b))
        .collect();
    let pair_scores: Vec<f64> = pairs.iter().map(|p| p.value()).collect();
    let eq = mean_of_pairs(&pair_scores);

    EqBreakdown {
        student_id: session.student_id.clone(),
        events: session.events.len(),
        pairs,
        pair_scores,
        eq,
    }
}

/// Score every session of an assignment
pub fn score_sessions(table: &SessionTable) -> StudentScores {
    table
        .iter()
        .map(|session| (session.student_id.clone(), score_session(session)))
        .collect()
}
