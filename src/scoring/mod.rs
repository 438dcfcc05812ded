// Jadud's Error Quotient
//
// Matthew C. Jadud. 2006. Methods and tools for exploring novice compilation
// behaviour. ICER '06, 73-84. (Algorithm on page 6.)
//
// 1. COLLATE: consecutive pairs of events from a session
// 2. CALCULATE: 8 points when both events errored, 3 more when they share an
//    error identity
// 3. NORMALIZE: divide each pair score by 11
// 4. AVERAGE: mean over all pairs
//
// Sessions with fewer than two events have no pairs and score 0.0. Some
// variants of this algorithm treat that case as unreachable and abort; here
// it is an ordinary result meaning "no evidence of repeated errors".

mod aggregate;
mod pair;

pub use aggregate::{
    score_session, score_session_detailed, score_sessions, EqBreakdown, StudentScores,
};
pub use pair::{pair_score, PairScore, BOTH_ERRORED_POINTS, MAX_PAIR_POINTS, SAME_ERROR_POINTS};
