//! State-function lexing engine.
//!
//! A grammar is a set of states, usually a fieldless enum, implementing
//! [`State`]. Each state inspects and advances the [`Lexer`], emits zero or
//! more tokens, and returns the next state. The run ends when a state
//! returns `None`.
//!
//! ```
//! use statelex::{Lexer, State, TokenKind};
//!
//! const NUMBER: TokenKind = TokenKind::new(1);
//! const PLUS: TokenKind = TokenKind::new(2);
//!
//! #[derive(Debug)]
//! enum Sum {
//!     Operand,
//!     Operator,
//! }
//!
//! impl State for Sum {
//!     fn step(self, lx: &mut Lexer<Self>) -> Option<Self> {
//!         match self {
//!             Sum::Operand => {
//!                 lx.take_run("0123456789");
//!                 lx.emit(NUMBER);
//!                 Some(Sum::Operator)
//!             }
//!             Sum::Operator => {
//!                 if lx.take('+') {
//!                     lx.emit(PLUS);
//!                     Some(Sum::Operand)
//!                 } else {
//!                     None
//!                 }
//!             }
//!         }
//!     }
//! }
//!
//! let texts: Vec<String> = Lexer::new("12+34", Sum::Operand)
//!     .run_async()?
//!     .map(|tok| tok.text)
//!     .collect();
//! assert_eq!(texts, ["12", "+", "34"]);
//! # Ok::<(), statelex::RunError>(())
//! ```
//!
//! # Run modes
//!
//! Tokens travel through a bounded queue sized `max(1, input.len() / 2)`.
//!
//! - [`Lexer::run_async`]: the state machine runs on its own thread; the
//!   returned [`TokenStream`] pulls tokens as they are produced.
//! - [`Lexer::run_sync`]: the state machine runs on the calling thread and a
//!   caller-supplied drain consumes the stream on a second, scoped thread.
//!
//! # Tracing
//!
//! The engine logs through `tracing`. Call [`init_tracing`] once from a
//! binary and enable with `RUST_LOG=statelex=debug` or `RUST_LOG=statelex=trace`.

mod config;
mod error;
mod lexer;
mod state;
mod stream;

use std::sync::Once;

pub use config::{queue_capacity, ErrorPolicy, LexerConfig, DEFAULT_THREAD_NAME};
pub use error::{LexError, RunError};
pub use lexer::Lexer;
pub use state::State;
pub use stream::{RunSummary, TokenStream};

// Re-export the scanning primitives so grammars need a single dependency.
pub use statelex_core::{AcceptSet, Consumed, RewindBuffer, Scanner, Span, StateLedger, Token, TokenKind};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing subscriber for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Does nothing unless `RUST_LOG` is set.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .init();
        }
    });
}
