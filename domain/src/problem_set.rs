//! Ordered problem collection

use crate::problem::Problem;
use serde::{Deserialize, Serialize};

/// An ordered sequence of problems (Entity)
///
/// Order is the source row order, one problem per data row. A set is
/// created once at startup and never mutated afterward.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemSet {
    problems: Vec<Problem>,
}

impl ProblemSet {
    /// Create a new problem set from an ordered list of problems
    pub fn new(problems: Vec<Problem>) -> Self {
        Self { problems }
    }

    /// Number of problems in the set
    pub fn len(&self) -> usize {
        self.problems.len()
    }

    /// Whether the set contains no problems
    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }

    /// Get the problem at `index`, if any
    pub fn get(&self, index: usize) -> Option<&Problem> {
        self.problems.get(index)
    }

    /// Iterate over the problems in source order
    pub fn iter(&self) -> impl Iterator<Item = &Problem> {
        self.problems.iter()
    }
}

impl From<Vec<Problem>> for ProblemSet {
    fn from(problems: Vec<Problem>) -> Self {
        Self::new(problems)
    }
}
