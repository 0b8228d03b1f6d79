//! The state-machine seam between the engine and a grammar.

use std::fmt;

use crate::Lexer;

/// One state of a grammar's state machine.
///
/// `step` receives the lexer, scans, optionally emits, and returns the state
/// to run next. Returning `None` ends the run and closes the token stream.
///
/// Implement this on a fieldless enum so every state is nameable: the engine
/// logs each transition with `Debug`, and tests can assert on the returned
/// state directly. States that delegate to a sub-scan save their resume point
/// with [`Lexer::push_state`] and the delegate returns
/// [`Lexer::pop_state`] when it is done.
pub trait State: Sized + fmt::Debug {
    fn step(self, lexer: &mut Lexer<Self>) -> Option<Self>;
}
