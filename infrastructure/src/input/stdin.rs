//! Standard-input answer source
//!
//! Implements [`AnswerSourcePort`] over the process's standard input.
//! Each request spawns one blocking read of a single line and returns
//! immediately; the line is delivered through a single-use oneshot
//! channel once the user presses enter.
//!
//! On end of input (EOF) or a read error the sender is dropped without
//! sending, so the receiver observes a closed channel — the contract's
//! way of saying no answer will ever arrive. A request abandoned by the
//! runner (deadline fired first) leaves the blocking read parked on
//! stdin; its eventual `send` fails against the dropped receiver and the
//! line is discarded.

use quizdash_application::ports::answer_source::AnswerSourcePort;
use std::io::{self, BufRead};
use tokio::sync::oneshot;
use tracing::warn;

/// Answer source reading lines from standard input.
#[derive(Debug, Clone, Default)]
pub struct StdinAnswerSource;

impl StdinAnswerSource {
    pub fn new() -> Self {
        Self
    }
}

impl AnswerSourcePort for StdinAnswerSource {
    fn request_answer(&self) -> oneshot::Receiver<String> {
        let (tx, rx) = oneshot::channel();

        tokio::task::spawn_blocking(move || {
            let mut line = String::new();
            match io::stdin().lock().read_line(&mut line) {
                // EOF: drop the sender, the stream is exhausted.
                Ok(0) => {}
                Ok(_) => {
                    // Fails only if the runner abandoned the read.
                    let _ = tx.send(line);
                }
                Err(e) => {
                    warn!("failed to read answer from stdin: {}", e);
                }
            }
        });

        rx
    }
}
