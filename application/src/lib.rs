//! Application layer for quizdash
//!
//! This crate contains use cases and port definitions. It depends only
//! on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    answer_source::AnswerSourcePort,
    problem_source::{ProblemSourceError, ProblemSourcePort},
    prompter::{NullPrompter, ProblemPrompter},
};
pub use use_cases::run_quiz::{RunQuizInput, RunQuizUseCase};
