//! Forward-only, undoable cursor over a mutable input buffer.
//!
//! The scanner tracks two offsets into its input:
//!
//! ```text
//! input:  a b c d e f g h
//!             ^     ^
//!           start  pos
//!             |_____|
//!             current lexeme
//! ```
//!
//! `next()` moves `pos` forward one character and records it in the
//! [`RewindBuffer`]; `backup()` replays that journal backwards. Emitting or
//! ignoring the lexeme moves `start` up to `pos` and drops the journal, so a
//! transition can never undo past a boundary it already committed.
//!
//! # Invariant
//!
//! `start <= pos <= input.len()`, and both offsets sit on UTF-8 character
//! boundaries.

use crate::{AcceptSet, Consumed, RewindBuffer, Span, Token, TokenKind};

/// Scanning cursor. One scanner serves one input.
#[derive(Clone, Debug)]
pub struct Scanner {
    /// Input text. Edited in place by [`ignore_last_unit`](Self::ignore_last_unit).
    input: String,
    /// Byte offset where the current lexeme begins.
    start: usize,
    /// Byte offset of the next unread character.
    pos: usize,
    /// Units consumed since `start`, newest last.
    rewind: RewindBuffer,
}

impl Scanner {
    pub fn new(input: impl Into<String>) -> Self {
        Scanner {
            input: input.into(),
            start: 0,
            pos: 0,
            rewind: RewindBuffer::new(),
        }
    }

    // === Introspection ===

    /// The whole input, including any in-place edits made so far.
    #[inline]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Consume the scanner, returning its (possibly edited) input.
    pub fn into_input(self) -> String {
        self.input
    }

    /// Byte offset of the next unread character.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Byte offset where the current lexeme begins.
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Span of the current lexeme.
    #[inline]
    pub fn span(&self) -> Span {
        Span::new(self.start, self.pos)
    }

    /// Returns `true` once every character has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Unread input after the cursor.
    #[inline]
    pub fn remaining(&self) -> &str {
        &self.input[self.pos..]
    }

    /// The undo journal for the current lexeme.
    #[inline]
    pub fn rewind(&self) -> &RewindBuffer {
        &self.rewind
    }

    /// Text of the current lexeme (`input[start..pos]`).
    #[inline]
    pub fn current(&self) -> &str {
        &self.input[self.start..self.pos]
    }

    // === Forward and backward steps ===

    /// Consume the next character.
    ///
    /// At end of input returns `None` without moving. The end-of-input
    /// sentinel is still journaled, so a following [`backup`](Self::backup)
    /// pairs with this call and leaves the cursor where it is.
    #[allow(
        clippy::should_implement_trait,
        reason = "a scanner step journals the unit; it is not an Iterator"
    )]
    pub fn next(&mut self) -> Option<char> {
        match self.input[self.pos..].chars().next() {
            Some(ch) => {
                self.pos += ch.len_utf8();
                self.rewind.push(Consumed::Char(ch));
                Some(ch)
            }
            None => {
                self.rewind.push(Consumed::EndOfInput);
                None
            }
        }
    }

    /// Undo the most recent [`next`](Self::next).
    ///
    /// Returns `true` on overflow: the step would have moved the cursor before
    /// the lexeme start, so the cursor was clamped to `start` instead. With an
    /// empty journal this is a no-op that returns `false`.
    pub fn backup(&mut self) -> bool {
        let Some(unit) = self.rewind.pop() else {
            return false;
        };
        let width = unit.width();
        if width == 0 {
            return false;
        }
        match self.pos.checked_sub(width) {
            Some(pos) if pos >= self.start => {
                self.pos = pos;
                false
            }
            _ => {
                self.pos = self.start;
                true
            }
        }
    }

    /// The next character, without consuming it.
    pub fn peek(&mut self) -> Option<char> {
        let ch = self.next();
        self.backup();
        ch
    }

    /// The `n`th character ahead (1-based), without consuming anything.
    ///
    /// `peek_ahead(1)` is [`peek`](Self::peek). Returns `None` for `n == 0`
    /// or when the input ends before the `n`th character.
    pub fn peek_ahead(&mut self, n: usize) -> Option<char> {
        let mut last = None;
        for _ in 0..n {
            last = self.next();
        }
        for _ in 0..n {
            self.backup();
        }
        last
    }

    // === Bulk consumption ===

    /// Consume one character if `set` accepts it.
    pub fn take(&mut self, set: impl AcceptSet) -> bool {
        self.take_if(|ch| set.accepts(ch))
    }

    /// Consume characters while `set` accepts them.
    ///
    /// The first rejected character (or end of input) is left unread.
    pub fn take_run(&mut self, set: impl AcceptSet) {
        self.take_run_if(|ch| set.accepts(ch));
    }

    /// Consume one character if `pred` holds for it.
    pub fn take_if(&mut self, pred: impl Fn(char) -> bool) -> bool {
        if self.next().is_some_and(&pred) {
            return true;
        }
        self.backup();
        false
    }

    /// Consume characters while `pred` holds for them.
    pub fn take_run_if(&mut self, pred: impl Fn(char) -> bool) {
        while self.next().is_some_and(&pred) {}
        self.backup();
    }

    /// Consume one character if `pattern` matches it.
    #[cfg(feature = "regex")]
    pub fn take_pattern(&mut self, pattern: &regex::Regex) -> bool {
        self.take_if(|ch| pattern.is_match(ch.encode_utf8(&mut [0; 4])))
    }

    /// Consume characters while `pattern` matches each of them.
    #[cfg(feature = "regex")]
    pub fn take_run_pattern(&mut self, pattern: &regex::Regex) {
        self.take_run_if(|ch| pattern.is_match(ch.encode_utf8(&mut [0; 4])));
    }

    // === Lexeme boundaries ===

    /// Close the current lexeme as a token of `kind`.
    ///
    /// Advances the boundary to the cursor and drops the undo journal.
    pub fn finish_lexeme(&mut self, kind: TokenKind) -> Token {
        let token = Token::new(kind, self.current(), self.start, self.pos);
        self.start = self.pos;
        self.rewind.clear();
        token
    }

    /// Discard the current lexeme.
    pub fn ignore(&mut self) {
        self.start = self.pos;
        self.rewind.clear();
    }

    /// Cut the most recently consumed character out of the input.
    ///
    /// The character's bytes are removed from the buffer and the cursor moves
    /// back by its width, so the lexeme text no longer contains it. Typical use
    /// is dropping an escape marker such as `\` before the token is emitted.
    ///
    /// Returns the removed character, or `None` (and changes nothing) when the
    /// journal is empty or its newest entry is the end-of-input sentinel.
    pub fn ignore_last_unit(&mut self) -> Option<char> {
        let ch = match self.rewind.last()? {
            Consumed::Char(ch) => ch,
            Consumed::EndOfInput => return None,
        };
        self.rewind.pop();
        let at = self.pos - ch.len_utf8();
        self.input.replace_range(at..self.pos, "");
        self.pos = at;
        Some(ch)
    }
}
