//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly; CLI flags override them in the
//! binary.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Quiz session settings
    pub quiz: FileQuizConfig,
}

/// Raw quiz configuration from TOML (`[quiz]` section)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileQuizConfig {
    /// Path to the problem CSV file
    pub problems: PathBuf,
    /// Session time limit in seconds
    pub limit_secs: u64,
}

impl Default for FileQuizConfig {
    fn default() -> Self {
        Self {
            problems: PathBuf::from("problems.csv"),
            limit_secs: 30,
        }
    }
}
