//! Session score report

use serde::{Deserialize, Serialize};

/// Final score of a quiz session (Value Object)
///
/// `total` is always the full problem-set size, whether the session ran
/// to exhaustion or timed out — unanswered problems count against the
/// score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub correct: usize,
    pub total: usize,
    pub timed_out: bool,
}

impl ScoreReport {
    pub fn new(correct: usize, total: usize, timed_out: bool) -> Self {
        Self {
            correct,
            total,
            timed_out,
        }
    }
}
