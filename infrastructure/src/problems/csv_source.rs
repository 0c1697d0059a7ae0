//! CSV problem source
//!
//! This module provides the [`CsvProblemSource`] implementation of
//! [`ProblemSourcePort`] that reads question/answer pairs from a
//! headerless CSV file.
//!
//! # Format
//!
//! Every data row must have exactly two fields: question, answer. Blank
//! lines are skipped by the reader. Leading and trailing whitespace on
//! either field is removed when the [`Problem`] is constructed, so the
//! loaded set never carries padding.
//!
//! # Failure modes
//!
//! - the file cannot be opened → [`ProblemSourceError::Unavailable`]
//! - a row has fewer or more than two fields →
//!   [`ProblemSourceError::MalformedRow`] naming the 1-based row
//! - the CSV reader itself fails (e.g. an unclosed quote) →
//!   [`ProblemSourceError::Malformed`]
//!
//! There is no partial loading: the first bad row fails the whole load
//! before any session starts.

use async_trait::async_trait;
use quizdash_application::ports::problem_source::{ProblemSourceError, ProblemSourcePort};
use quizdash_domain::{Problem, ProblemSet};
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Problem source backed by a CSV file on the local file system.
#[derive(Debug, Clone)]
pub struct CsvProblemSource {
    path: PathBuf,
}

impl CsvProblemSource {
    /// Create a source reading from `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this source reads from
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<ProblemSet, ProblemSourceError> {
        let file = File::open(&self.path).map_err(|source| ProblemSourceError::Unavailable {
            path: self.path.clone(),
            source,
        })?;

        // Headerless, and record lengths validated per row so the error
        // can name the offending row instead of the reader's position.
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(file);

        let mut problems = Vec::new();
        for (index, record) in reader.records().enumerate() {
            let record = record.map_err(|e| ProblemSourceError::Malformed(e.to_string()))?;
            if record.len() != 2 {
                return Err(ProblemSourceError::MalformedRow {
                    row: index + 1,
                    fields: record.len(),
                });
            }
            problems.push(Problem::new(&record[0], &record[1]));
        }

        debug!(path = %self.path.display(), problems = problems.len(), "problem set read");
        Ok(ProblemSet::new(problems))
    }
}

#[async_trait]
impl ProblemSourcePort for CsvProblemSource {
    async fn load(&self) -> Result<ProblemSet, ProblemSourceError> {
        self.read()
    }
}
