//! Producer/consumer token queue.
//!
//! The producer side ([`TokenSink`]) lives inside the running [`Lexer`](crate::Lexer);
//! the consumer side is the [`TokenStream`] handed to the caller. Both wrap a
//! `crossbeam` bounded channel:
//!
//! - a full queue blocks the producer on the next `emit`;
//! - an empty queue blocks the consumer on `next_token`;
//! - dropping the sender at run end closes the queue, and the consumer sees
//!   end of stream only after every buffered token has been drained.

use std::thread::JoinHandle;

use crossbeam::channel::{Receiver, Sender};
use statelex_core::Token;

use crate::LexError;

/// Final state of a finished run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    /// Tokens emitted by the state machine, including any discarded after
    /// the consumer went away.
    pub tokens_emitted: usize,
    /// Calls to [`Lexer::error`](crate::Lexer::error).
    pub errors_reported: usize,
    /// The most recent recorded error.
    pub last_error: Option<LexError>,
    /// The input after any in-place edits.
    pub input: String,
}

/// Producer end of the queue, owned by the lexer.
#[derive(Debug)]
pub(crate) enum TokenSink {
    /// No run in progress. Tokens emitted now have nowhere to go.
    Detached,
    Open(Sender<Token>),
    /// The consumer dropped its stream; later tokens are discarded.
    Disconnected,
}

impl TokenSink {
    /// Send `token` to the consumer, blocking while the queue is full.
    pub(crate) fn publish(&mut self, token: Token) {
        match self {
            TokenSink::Open(sender) => {
                if sender.send(token).is_err() {
                    tracing::warn!("token consumer disconnected; discarding remaining tokens");
                    *self = TokenSink::Disconnected;
                }
            }
            TokenSink::Detached => {
                tracing::debug!(span = %token.span, "token emitted outside a run; dropped");
            }
            TokenSink::Disconnected => {}
        }
    }

    /// Drop the sender, closing the queue.
    pub(crate) fn close(&mut self) {
        *self = TokenSink::Detached;
    }
}

/// Consumer end of the queue.
///
/// Also an [`Iterator`] over the remaining tokens.
#[derive(Debug)]
pub struct TokenStream {
    receiver: Receiver<Token>,
    /// Producer thread in async mode.
    producer: Option<JoinHandle<RunSummary>>,
    summary: Option<RunSummary>,
}

impl TokenStream {
    /// Stream fed by a producer on the caller's own thread (sync mode).
    pub(crate) fn new(receiver: Receiver<Token>) -> Self {
        TokenStream {
            receiver,
            producer: None,
            summary: None,
        }
    }

    /// Stream fed by a spawned producer thread (async mode).
    pub(crate) fn with_producer(receiver: Receiver<Token>, producer: JoinHandle<RunSummary>) -> Self {
        TokenStream {
            receiver,
            producer: Some(producer),
            summary: None,
        }
    }

    /// Pull the next token, blocking until one is published.
    ///
    /// Returns `None` once the run has finished and the queue is drained.
    ///
    /// # Panics
    ///
    /// In async mode, if the run aborted (an error reported with no hook under
    /// [`ErrorPolicy::Abort`](crate::ErrorPolicy::Abort)), the producer's panic
    /// is re-raised here when the consumer reaches the end of the stream.
    pub fn next_token(&mut self) -> Option<Token> {
        if let Ok(token) = self.receiver.recv() {
            return Some(token);
        }
        self.join_producer();
        None
    }

    /// Queue capacity.
    pub fn capacity(&self) -> Option<usize> {
        self.receiver.capacity()
    }

    /// Tokens published but not yet pulled.
    pub fn buffered(&self) -> usize {
        self.receiver.len()
    }

    /// Drain and discard the remaining tokens, then wait for the run to end.
    ///
    /// Returns the run summary in async mode. Streams handed to a
    /// [`Lexer::run_sync`](crate::Lexer::run_sync) drain have no producer
    /// thread and return `None`; `run_sync` returns the summary itself.
    pub fn finish(mut self) -> Option<RunSummary> {
        while self.next_token().is_some() {}
        self.summary.take()
    }

    fn join_producer(&mut self) {
        let Some(producer) = self.producer.take() else {
            return;
        };
        match producer.join() {
            Ok(summary) => self.summary = Some(summary),
            Err(payload) => std::panic::resume_unwind(payload),
        }
    }
}

impl Iterator for TokenStream {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.next_token()
    }
}
