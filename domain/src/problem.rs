//! Problem value object

use serde::{Deserialize, Serialize};

/// A single question/expected-answer pair (Value Object)
///
/// Both fields are trimmed of leading and trailing whitespace when the
/// problem is constructed, so a `Problem` never carries padding from its
/// source row. Answer checking is an exact string match after trimming
/// the candidate; there is no case folding and no numeric normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    question: String,
    answer: String,
}

impl Problem {
    /// Create a new problem, trimming both fields
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into().trim().to_string(),
            answer: answer.into().trim().to_string(),
        }
    }

    /// Get the question text
    pub fn question(&self) -> &str {
        &self.question
    }

    /// Get the expected answer
    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Check a candidate answer against the expected one.
    ///
    /// The candidate is trimmed first (a line read from a console still
    /// carries its newline); the comparison itself is exact.
    pub fn check(&self, candidate: &str) -> bool {
        candidate.trim() == self.answer
    }
}

impl std::fmt::Display for Problem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} = {}", self.question, self.answer)
    }
}
