use crate::session::CompilationEvent;
use serde::Serialize;
use std::collections::HashSet;

/// Points for a pair in which both events reported at least one error
pub const BOTH_ERRORED_POINTS: u32 = 8;

/// Extra points when the two events share an error identity
pub const SAME_ERROR_POINTS: u32 = 3;

/// Normalizer: the highest score a pair can reach
pub const MAX_PAIR_POINTS: u32 = BOTH_ERRORED_POINTS + SAME_ERROR_POINTS;

/// Classification of a consecutive event pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PairScore {
    /// At least one of the two events compiled/ran cleanly
    Clean,
    /// Both errored, no identity in common
    DifferentErrors,
    /// Both errored and at least one identity recurs
    RepeatedError,
}

impl PairScore {
    /// Classify the ordered pair `(first, second)`
    ///
    /// Error lists are compared as sets: duplicates and order within an event
    /// do not matter.
    pub fn classify(first: &CompilationEvent, second: &CompilationEvent) -> Self {
        if first.is_clean() || second.is_clean() {
            return PairScore::Clean;
        }

        let seen: HashSet<&str> = first.errors.iter().map(String::as_str).collect();
        if second.errors.iter().any(|id| seen.contains(id.as_str())) {
            PairScore::RepeatedError
        } else {
            PairScore::DifferentErrors
        }
    }

    /// Raw points before normalization
    pub fn points(self) -> u32 {
        match self {
            PairScore::Clean => 0,
            PairScore::DifferentErrors => BOTH_ERRORED_POINTS,
            PairScore::RepeatedError => BOTH_ERRORED_POINTS + SAME_ERROR_POINTS,
        }
    }

    /// Normalized score: `0`, `8/11` or `1.0`
    pub fn value(self) -> f64 {
        if self.points() == 0 {
            return 0.0;
        }
        f64::from(self.points()) / f64::from(MAX_PAIR_POINTS)
    }
}

/// Normalized score of two consecutive events
///
/// # Example
/// ```
/// use jadud_eq::scoring::pair_score;
/// use jadud_eq::session::CompilationEvent;
///
/// let a = CompilationEvent::new("t:1", vec!["';' expected".to_string()]);
/// let b = CompilationEvent::new("t:2", vec!["';' expected".to_string()]);
/// let c = CompilationEvent::clean("t:3");
///
/// assert_eq!(pair_score(&a, &b), 1.0);
/// assert_eq!(pair_score(&b, &c), 0.0);
/// ```
pub fn pair_score(first: &CompilationEvent, second: &CompilationEvent) -> f64 {
    PairScore::classify(first, second).value()
}
