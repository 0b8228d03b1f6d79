//! The lexer: scanning API for transitions plus the run loop that drives them.

use std::fmt;

use crossbeam::channel::{bounded, Sender};
use statelex_core::{AcceptSet, Scanner, Span, StateLedger, Token, TokenKind};

use crate::stream::{RunSummary, TokenSink, TokenStream};
use crate::{ErrorPolicy, LexError, LexerConfig, RunError, State};

type ErrorHook = Box<dyn FnMut(&str) + Send>;

/// A lexer over one input, driven by states of type `S`.
///
/// Built with [`Lexer::new`], optionally given an error hook, then consumed
/// by one of the run modes. During the run each [`State::step`] receives
/// `&mut Lexer<S>` and uses the scanning methods below.
///
/// A lexer serves exactly one input and one run.
pub struct Lexer<S> {
    scanner: Scanner,
    ledger: StateLedger<S>,
    /// Taken when the run starts.
    start: Option<S>,
    config: LexerConfig,
    hook: Option<ErrorHook>,
    sink: TokenSink,
    last_error: Option<LexError>,
    tokens_emitted: usize,
    errors_reported: usize,
}

impl<S: State> Lexer<S> {
    /// Create a lexer over `input` that starts in state `start`.
    pub fn new(input: impl Into<String>, start: S) -> Self {
        Self::with_config(input, start, LexerConfig::default())
    }

    pub fn with_config(input: impl Into<String>, start: S, config: LexerConfig) -> Self {
        Lexer {
            scanner: Scanner::new(input),
            ledger: StateLedger::new(),
            start: Some(start),
            config,
            hook: None,
            sink: TokenSink::Detached,
            last_error: None,
            tokens_emitted: 0,
            errors_reported: 0,
        }
    }

    /// Register the error hook called by [`error`](Self::error).
    ///
    /// The hook receives the exact message passed to `error`. With a hook
    /// registered, errors never abort the run.
    #[must_use]
    pub fn on_error(mut self, hook: impl FnMut(&str) + Send + 'static) -> Self {
        self.hook = Some(Box::new(hook));
        self
    }

    /// Token queue capacity this lexer will run with.
    pub fn queue_capacity(&self) -> usize {
        self.config.capacity_for(self.scanner.input().len())
    }

    // === Run modes ===

    /// Run the state machine on a new thread.
    ///
    /// Returns as soon as the thread is started. `emit` blocks the producer
    /// thread while the queue is full, so a slow consumer throttles the run.
    pub fn run_async(self) -> Result<TokenStream, RunError>
    where
        S: Send + 'static,
    {
        let (sender, receiver) = bounded(self.queue_capacity());
        let producer = std::thread::Builder::new()
            .name(self.config.thread_name.clone())
            .spawn(move || self.drive(sender, "async"))?;
        Ok(TokenStream::with_producer(receiver, producer))
    }

    /// Run the state machine on the calling thread.
    ///
    /// `drain` receives the token stream on a second, scoped thread and runs
    /// concurrently with the state machine. `run_sync` returns when both the
    /// run and `drain` are done.
    ///
    /// `drain` must keep pulling until it has what it needs: once the queue
    /// is full the state machine blocks until the drain pulls another token
    /// or drops the stream. Tokens emitted after the stream is dropped are
    /// discarded.
    ///
    /// # Panics
    ///
    /// Re-raises a panic from `drain`, and propagates the abort of an error
    /// reported with no hook under [`ErrorPolicy::Abort`].
    pub fn run_sync<R, F>(self, drain: F) -> Result<(R, RunSummary), RunError>
    where
        F: FnOnce(TokenStream) -> R + Send,
        R: Send,
    {
        let (sender, receiver) = bounded(self.queue_capacity());
        let drain_name = format!("{}-drain", self.config.thread_name);
        std::thread::scope(|scope| {
            let consumer = std::thread::Builder::new()
                .name(drain_name)
                .spawn_scoped(scope, move || drain(TokenStream::new(receiver)))?;
            let summary = self.drive(sender, "sync");
            match consumer.join() {
                Ok(drained) => Ok((drained, summary)),
                Err(payload) => std::panic::resume_unwind(payload),
            }
        })
    }

    /// Run on the calling thread and collect every token.
    pub fn run_sync_collect(self) -> Result<(Vec<Token>, RunSummary), RunError> {
        self.run_sync(|stream| stream.collect())
    }

    /// The run loop: step until a state returns `None`, then close the queue.
    #[tracing::instrument(
        level = "debug",
        name = "lex_run",
        skip_all,
        fields(mode = mode, input_len = self.scanner.input().len())
    )]
    fn drive(mut self, sender: Sender<Token>, mode: &'static str) -> RunSummary {
        tracing::debug!(capacity = sender.capacity(), "run started");
        self.sink = TokenSink::Open(sender);

        let mut state = self.start.take();
        while let Some(current) = state {
            tracing::trace!(state = ?current, pos = self.scanner.pos(), "step");
            state = current.step(&mut self);
        }

        self.sink.close();
        tracing::debug!(
            tokens = self.tokens_emitted,
            errors = self.errors_reported,
            "run finished"
        );
        RunSummary {
            tokens_emitted: self.tokens_emitted,
            errors_reported: self.errors_reported,
            last_error: self.last_error,
            input: self.scanner.into_input(),
        }
    }
}

impl<S> Lexer<S> {
    // === Cursor ===

    /// Consume the next character. `None` at end of input.
    #[allow(
        clippy::should_implement_trait,
        reason = "a scanner step journals the unit; it is not an Iterator"
    )]
    #[inline]
    pub fn next(&mut self) -> Option<char> {
        self.scanner.next()
    }

    /// Undo the most recent `next`. Returns `true` if the step would have
    /// crossed the lexeme start and the cursor was clamped instead.
    pub fn backup(&mut self) -> bool {
        let overflow = self.scanner.backup();
        if overflow {
            tracing::warn!(
                start = self.scanner.start(),
                "backup crossed the lexeme start; cursor clamped"
            );
        }
        overflow
    }

    /// The next character, without consuming it.
    #[inline]
    pub fn peek(&mut self) -> Option<char> {
        self.scanner.peek()
    }

    /// The `n`th character ahead (1-based), without consuming anything.
    #[inline]
    pub fn peek_ahead(&mut self, n: usize) -> Option<char> {
        self.scanner.peek_ahead(n)
    }

    /// Consume one character if `set` accepts it.
    #[inline]
    pub fn take(&mut self, set: impl AcceptSet) -> bool {
        self.scanner.take(set)
    }

    /// Consume characters while `set` accepts them.
    #[inline]
    pub fn take_run(&mut self, set: impl AcceptSet) {
        self.scanner.take_run(set);
    }

    /// Consume one character if `pred` holds for it.
    #[inline]
    pub fn take_if(&mut self, pred: impl Fn(char) -> bool) -> bool {
        self.scanner.take_if(pred)
    }

    /// Consume characters while `pred` holds for them.
    #[inline]
    pub fn take_run_if(&mut self, pred: impl Fn(char) -> bool) {
        self.scanner.take_run_if(pred);
    }

    #[cfg(feature = "regex")]
    #[inline]
    pub fn take_pattern(&mut self, pattern: &regex::Regex) -> bool {
        self.scanner.take_pattern(pattern)
    }

    #[cfg(feature = "regex")]
    #[inline]
    pub fn take_run_pattern(&mut self, pattern: &regex::Regex) {
        self.scanner.take_run_pattern(pattern);
    }

    /// Text of the lexeme in progress.
    #[inline]
    pub fn current(&self) -> &str {
        self.scanner.current()
    }

    /// Span of the lexeme in progress.
    #[inline]
    pub fn span(&self) -> Span {
        self.scanner.span()
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.scanner.is_eof()
    }

    /// Read access to the underlying cursor.
    #[inline]
    pub fn scanner(&self) -> &Scanner {
        &self.scanner
    }

    // === Lexeme boundaries ===

    /// Publish the current lexeme as a token of `kind` and start a new one.
    ///
    /// Blocks while the token queue is full.
    pub fn emit(&mut self, kind: TokenKind) {
        let token = self.scanner.finish_lexeme(kind);
        tracing::trace!(kind = kind.raw(), span = %token.span, "emit");
        self.tokens_emitted += 1;
        self.sink.publish(token);
    }

    /// Discard the current lexeme and start a new one.
    #[inline]
    pub fn ignore(&mut self) {
        self.scanner.ignore();
    }

    /// Cut the most recently consumed character out of the input.
    ///
    /// See [`Scanner::ignore_last_unit`].
    #[inline]
    pub fn ignore_last_unit(&mut self) -> Option<char> {
        self.scanner.ignore_last_unit()
    }

    // === Nested states ===

    /// Save a state to resume after a delegated sub-scan.
    #[inline]
    pub fn push_state(&mut self, state: S) {
        self.ledger.push(state);
    }

    /// Take back the most recently saved state.
    ///
    /// Popping does not switch states; return the popped value from `step`
    /// to resume it.
    #[inline]
    pub fn pop_state(&mut self) -> Option<S> {
        self.ledger.pop()
    }

    /// The state [`pop_state`](Self::pop_state) would return.
    #[inline]
    pub fn saved_state(&self) -> Option<&S> {
        self.ledger.peek()
    }

    /// Number of saved states.
    #[inline]
    pub fn nesting_depth(&self) -> usize {
        self.ledger.len()
    }

    // === Errors ===

    /// Report a lexical error.
    ///
    /// With an error hook registered, the error becomes the lexer's last
    /// error and the hook is called with `message`; the run continues.
    /// Without one, the configured [`ErrorPolicy`] decides.
    ///
    /// # Panics
    ///
    /// Panics with `message` when no hook is registered and the policy is
    /// [`ErrorPolicy::Abort`] (the default). The run produces no further
    /// tokens.
    pub fn error(&mut self, message: impl Into<String>) {
        let err = LexError::new(message, self.scanner.span());
        self.errors_reported += 1;

        if let Some(hook) = self.hook.as_mut() {
            let err = self.last_error.insert(err);
            hook(err.message());
            return;
        }

        match self.config.error_policy {
            ErrorPolicy::Abort => {
                tracing::error!(span = %err.span(), "{err}");
                panic!("{err}");
            }
            ErrorPolicy::Collect => {
                tracing::debug!(span = %err.span(), "collected lexical error: {err}");
                self.last_error = Some(err);
            }
        }
    }

    /// The most recent error recorded by [`error`](Self::error).
    #[inline]
    pub fn last_error(&self) -> Option<&LexError> {
        self.last_error.as_ref()
    }
}

impl<S: fmt::Debug> fmt::Debug for Lexer<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lexer")
            .field("scanner", &self.scanner)
            .field("ledger", &self.ledger)
            .field("start", &self.start)
            .field("config", &self.config)
            .field("has_hook", &self.hook.is_some())
            .field("last_error", &self.last_error)
            .finish_non_exhaustive()
    }
}
