//! Low-level scanning primitives for state-function lexers.
//!
//! This crate owns everything a transition needs to move over the input:
//!
//! - [`Scanner`]: forward-only-but-undoable cursor over a mutable input buffer
//! - [`RewindBuffer`]: per-lexeme undo journal backing [`Scanner::backup`]
//! - [`StateLedger`]: LIFO stack of saved states for delegated sub-scans
//! - [`Token`], [`TokenKind`], [`Span`]: the emitted unit
//! - [`AcceptSet`]: membership test used by the `take` family
//!
//! It does not run anything. The `statelex` crate layers the state machine,
//! the bounded token queue and the error hook on top of these types.

mod accept;
mod ledger;
mod rewind;
mod scanner;
mod token;

pub use accept::AcceptSet;
pub use ledger::StateLedger;
pub use rewind::{Consumed, RewindBuffer};
pub use scanner::Scanner;
pub use token::{Span, Token, TokenKind};
