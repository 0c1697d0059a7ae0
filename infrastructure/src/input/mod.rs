//! Interactive input adapters

pub mod stdin;

pub use stdin::StdinAnswerSource;
