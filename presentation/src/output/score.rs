//! Score report formatting

use quizdash_domain::ScoreReport;

/// Formats the final score for console display
///
/// Both formats produce exactly one line, in both terminal phases:
/// problems left unanswered at a timeout are already reflected in the
/// report's `total`.
pub struct ScoreFormatter;

impl ScoreFormatter {
    /// Plain score line
    pub fn format(report: &ScoreReport) -> String {
        format!("correct answers are : {}/{}", report.correct, report.total)
    }

    /// Single-line JSON report
    pub fn format_json(report: &ScoreReport) -> String {
        serde_json::to_string(report).unwrap_or_else(|_| String::from("{}"))
    }
}
