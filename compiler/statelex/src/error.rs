//! Error types for the run engine.

use statelex_core::Span;

/// A lexical error reported by a transition through [`Lexer::error`](crate::Lexer::error).
///
/// `Display` prints the message exactly as reported.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct LexError {
    message: String,
    /// Lexeme in progress when the error was reported.
    span: Span,
}

impl LexError {
    pub fn new(message: impl Into<String>, span: Span) -> Self {
        LexError {
            message: message.into(),
            span,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn span(&self) -> Span {
        self.span
    }
}

/// Failure to start a run.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    /// The OS refused to create the producer or drain thread.
    #[error("failed to spawn lexer thread: {0}")]
    Spawn(#[from] std::io::Error),
}
