//! Prompt surfaces

pub mod console;

pub use console::ConsolePrompter;
