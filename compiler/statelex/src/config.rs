//! Run configuration.

use std::num::NonZeroUsize;

/// Name given to the producer thread spawned by [`Lexer::run_async`](crate::Lexer::run_async).
pub const DEFAULT_THREAD_NAME: &str = "statelex-run";

/// Default token queue capacity for an input of `input_len` bytes.
///
/// Half the input length, never less than one.
#[inline]
pub fn queue_capacity(input_len: usize) -> usize {
    (input_len / 2).max(1)
}

/// What [`Lexer::error`](crate::Lexer::error) does when no error hook is registered.
///
/// A registered hook always takes precedence: the error is recorded, the hook
/// is called, and the run continues.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Abort the run with a panic carrying the error message.
    #[default]
    Abort,
    /// Record the error as the lexer's last error and keep running.
    Collect,
}

/// Configuration for a [`Lexer`](crate::Lexer).
///
/// ```
/// use statelex::{ErrorPolicy, LexerConfig};
///
/// let config = LexerConfig::default()
///     .error_policy(ErrorPolicy::Collect)
///     .queue_capacity(64);
/// assert_eq!(config.capacity_for(10), 64);
/// ```
#[derive(Clone, Debug)]
pub struct LexerConfig {
    pub(crate) error_policy: ErrorPolicy,
    pub(crate) queue_capacity: Option<NonZeroUsize>,
    pub(crate) thread_name: String,
}

impl LexerConfig {
    /// Set the behavior for errors reported without a hook.
    #[must_use]
    pub fn error_policy(mut self, policy: ErrorPolicy) -> Self {
        self.error_policy = policy;
        self
    }

    /// Override the token queue capacity. Zero keeps the computed default.
    #[must_use]
    pub fn queue_capacity(mut self, capacity: usize) -> Self {
        self.queue_capacity = NonZeroUsize::new(capacity);
        self
    }

    /// Name of the producer thread in async mode.
    #[must_use]
    pub fn thread_name(mut self, name: impl Into<String>) -> Self {
        self.thread_name = name.into();
        self
    }

    pub fn policy(&self) -> ErrorPolicy {
        self.error_policy
    }

    /// Queue capacity used for an input of `input_len` bytes.
    pub fn capacity_for(&self, input_len: usize) -> usize {
        self.queue_capacity
            .map_or_else(|| queue_capacity(input_len), NonZeroUsize::get)
    }
}

impl Default for LexerConfig {
    fn default() -> Self {
        LexerConfig {
            error_policy: ErrorPolicy::default(),
            queue_capacity: None,
            thread_name: DEFAULT_THREAD_NAME.to_owned(),
        }
    }
}
