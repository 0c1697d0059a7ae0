//! Infrastructure layer for quizdash
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer, plus configuration file loading.

pub mod config;
pub mod input;
pub mod problems;

// Re-export commonly used types
pub use config::{ConfigLoader, FileConfig, FileQuizConfig};
pub use input::StdinAnswerSource;
pub use problems::CsvProblemSource;
