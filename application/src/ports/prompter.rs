//! Problem prompter port
//!
//! Defines the interface for announcing each problem before its answer
//! is requested. Implementations live in the presentation layer and can
//! render the prompt however suits the surface (console, tests, none).

/// Callback invoked immediately before each answer request
pub trait ProblemPrompter: Send + Sync {
    /// Called once per problem, in set order. `number` is 1-based.
    fn present_problem(&self, number: usize, question: &str);
}

/// No-op prompter for when no prompt surface is wanted
pub struct NullPrompter;

impl ProblemPrompter for NullPrompter {
    fn present_problem(&self, _number: usize, _question: &str) {}
}
