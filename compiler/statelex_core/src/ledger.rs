//! Saved-state stack for delegated sub-scans.
//!
//! A transition that hands scanning over to another state (say, an
//! interpolation inside a string literal) pushes the state it wants to come
//! back to. When the sub-scan is done, the delegate pops it and returns it as
//! its next state. Popping never switches states by itself.
//!
//! The run engine never touches the ledger.

/// LIFO stack of saved states.
#[derive(Clone, Debug)]
pub struct StateLedger<S> {
    saved: Vec<S>,
}

impl<S> StateLedger<S> {
    pub fn new() -> Self {
        StateLedger { saved: Vec::new() }
    }

    pub fn push(&mut self, state: S) {
        self.saved.push(state);
    }

    /// Remove the most recently saved state, or `None` if nothing is saved.
    pub fn pop(&mut self) -> Option<S> {
        self.saved.pop()
    }

    /// The state [`pop`](Self::pop) would return.
    pub fn peek(&self) -> Option<&S> {
        self.saved.last()
    }

    /// Nesting depth.
    pub fn len(&self) -> usize {
        self.saved.len()
    }

    pub fn is_empty(&self) -> bool {
        self.saved.is_empty()
    }

    pub fn clear(&mut self) {
        self.saved.clear();
    }
}

impl<S> Default for StateLedger<S> {
    fn default() -> Self {
        Self::new()
    }
}
