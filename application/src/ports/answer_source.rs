//! Answer source port
//!
//! Defines the contract for collecting one line of interactive input per
//! problem without blocking the caller. The production adapter reads
//! standard input; see `StdinAnswerSource` in the infrastructure layer.
//!
//! # Delivery contract
//!
//! [`AnswerSourcePort::request_answer`] hands control back immediately
//! and delivers the line asynchronously on a single-use channel. The
//! runner issues at most one outstanding request at a time, so no two
//! reads ever compete for the input stream.
//!
//! If the input stream closes before a line is read, no answer is ever
//! delivered: the sender side is dropped and the receiver observes a
//! [`tokio::sync::oneshot::error::RecvError`]. The runner maps that to
//! "no answer will ever arrive" and falls back to racing the deadline
//! alone.
//!
//! A request still in flight when the session reaches a terminal phase is
//! *abandoned*, not cancelled: the receiver is dropped and the eventual
//! result, if any, is discarded.

use tokio::sync::oneshot;

/// Port for asynchronously reading one answer line per problem.
pub trait AnswerSourcePort: Send + Sync {
    /// Begin reading one line of input.
    ///
    /// Returns immediately. The raw line (trailing newline included, no
    /// trimming) arrives on the returned channel when available.
    fn request_answer(&self) -> oneshot::Receiver<String>;
}
