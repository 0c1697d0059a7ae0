//! Quiz session state machine

use crate::report::ScoreReport;
use serde::{Deserialize, Serialize};

/// Phase of a quiz session
///
/// Transitions are `Idle -> Running -> {Completed, TimedOut}`. Both
/// terminal phases produce a [`ScoreReport`] with the same shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    Idle,
    Running,
    Completed,
    TimedOut,
}

/// One run of the quiz from start to a terminal phase (Entity)
///
/// The session tracks scoring state while the runner drives the problem
/// loop. Counters advance monotonically and maintain the invariant
/// `correct <= answered <= current_index <= total`. Once a terminal
/// phase is reached, further transitions are ignored — a result that
/// arrives late is discarded, never scored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    total: usize,
    current_index: usize,
    answered: usize,
    correct: usize,
    phase: SessionPhase,
}

impl Session {
    /// Create an idle session over `total` problems
    pub fn new(total: usize) -> Self {
        Self {
            total,
            current_index: 0,
            answered: 0,
            correct: 0,
            phase: SessionPhase::Idle,
        }
    }

    /// Start the session. An empty set completes immediately.
    pub fn start(&mut self) {
        if self.phase != SessionPhase::Idle {
            return;
        }
        self.phase = if self.total == 0 {
            SessionPhase::Completed
        } else {
            SessionPhase::Running
        };
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == SessionPhase::Running
    }

    /// Index of the problem currently being presented
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn answered(&self) -> usize {
        self.answered
    }

    pub fn correct(&self) -> usize {
        self.correct
    }

    /// Record the outcome of the current problem and advance.
    ///
    /// Completes the session when the last problem has been answered.
    /// Ignored unless the session is running.
    pub fn record_answer(&mut self, correct: bool) {
        if !self.is_running() {
            return;
        }
        self.answered += 1;
        if correct {
            self.correct += 1;
        }
        self.current_index += 1;
        if self.current_index == self.total {
            self.phase = SessionPhase::Completed;
        }
    }

    /// Transition to `TimedOut`. Ignored unless the session is running.
    pub fn time_out(&mut self) {
        if self.is_running() {
            self.phase = SessionPhase::TimedOut;
        }
    }

    /// Produce the score report for this session.
    ///
    /// `total` is the full problem-set size in both terminal phases:
    /// problems left unanswered at a timeout count against the score.
    pub fn report(&self) -> ScoreReport {
        ScoreReport {
            correct: self.correct,
            total: self.total,
            timed_out: self.phase == SessionPhase::TimedOut,
        }
    }
}
