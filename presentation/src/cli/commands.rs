//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for the final score line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain score line
    Text,
    /// Single-line JSON report
    Json,
}

/// CLI arguments for quizdash
#[derive(Parser, Debug)]
#[command(name = "quizdash")]
#[command(author, version, about = "Timed console quiz - race your answers against the clock")]
#[command(long_about = r#"
Quizdash loads question/answer pairs from a CSV file (two fields per row)
and presents them one at a time. Every answer is read from standard input
and raced against a single deadline for the whole session; when the time
limit elapses, the remaining problems count against the score.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./quizdash.toml     Project-level config
3. ~/.config/quizdash/config.toml   Global config

CLI flags override configuration files.

Example:
  quizdash
  quizdash --csv arithmetic.csv --limit 60
  quizdash --output json < answers.txt
"#)]
pub struct Cli {
    /// CSV file with one question,answer pair per row
    #[arg(long, value_name = "PATH")]
    pub csv: Option<PathBuf>,

    /// Time limit for the whole session, in seconds
    #[arg(long, value_name = "SECS")]
    pub limit: Option<u64>,

    /// Output format for the final score line
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_leave_config_to_the_loader() {
        let cli = Cli::parse_from(["quizdash"]);
        assert!(cli.csv.is_none());
        assert!(cli.limit.is_none());
        assert_eq!(cli.output, OutputFormat::Text);
        assert_eq!(cli.verbose, 0);
        assert!(!cli.no_config);
    }

    #[test]
    fn test_original_flag_names_are_recognized() {
        let cli = Cli::parse_from(["quizdash", "--csv", "hard.csv", "--limit", "60"]);
        assert_eq!(cli.csv, Some(PathBuf::from("hard.csv")));
        assert_eq!(cli.limit, Some(60));
    }

    #[test]
    fn test_verbosity_is_counted() {
        let cli = Cli::parse_from(["quizdash", "-vvv"]);
        assert_eq!(cli.verbose, 3);
    }

    #[test]
    fn test_json_output_flag() {
        let cli = Cli::parse_from(["quizdash", "--output", "json"]);
        assert_eq!(cli.output, OutputFormat::Json);
    }
}
