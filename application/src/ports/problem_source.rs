//! Problem source port
//!
//! Defines the contract for loading the problem set from its tabular
//! source. The production adapter reads a CSV file; see
//! `CsvProblemSource` in the infrastructure layer.

use async_trait::async_trait;
use quizdash_domain::ProblemSet;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the problem set
///
/// All of these are fatal: they abort the run before any session starts.
/// There is no partial loading — the first malformed row fails the whole
/// load. Adapter-level parse errors cross the port as strings so this
/// crate stays free of adapter dependencies.
#[derive(Error, Debug)]
pub enum ProblemSourceError {
    #[error("failed to open problem source {path}: {source}")]
    Unavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed row {row}: expected 2 fields, found {fields}")]
    MalformedRow { row: usize, fields: usize },

    #[error("failed to parse problem source: {0}")]
    Malformed(String),
}

/// Port for producing the ordered problem set.
///
/// Loading happens once, before the session starts. Implementations must
/// preserve source row order and be deterministic: loading the same
/// static source twice yields an equal [`ProblemSet`].
#[async_trait]
pub trait ProblemSourcePort: Send + Sync {
    /// Load the full problem set, or fail without starting a session.
    async fn load(&self) -> Result<ProblemSet, ProblemSourceError>;
}
