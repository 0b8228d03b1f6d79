//! Undo journal for the in-progress lexeme.
//!
//! Every [`Scanner::next`](crate::Scanner::next) pushes what it consumed,
//! every [`Scanner::backup`](crate::Scanner::backup) pops it again, and the
//! whole journal is dropped whenever the lexeme boundary advances. Entries
//! therefore mirror, newest first, exactly the units consumed since the last
//! emit or ignore.

use smallvec::SmallVec;

/// Entries kept inline before the journal spills to the heap.
///
/// Most lexemes (identifiers, numbers, operators) are shorter than this.
const INLINE_ENTRIES: usize = 16;

/// One unit recorded by a forward step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Consumed {
    /// A decoded character; the cursor moved by its UTF-8 width.
    Char(char),
    /// A `next()` at end of input; the cursor did not move.
    EndOfInput,
}

impl Consumed {
    /// Encoded byte width: the character's UTF-8 length, `0` for
    /// [`Consumed::EndOfInput`].
    #[inline]
    pub fn width(self) -> usize {
        match self {
            Consumed::Char(ch) => ch.len_utf8(),
            Consumed::EndOfInput => 0,
        }
    }

    #[inline]
    pub fn as_char(self) -> Option<char> {
        match self {
            Consumed::Char(ch) => Some(ch),
            Consumed::EndOfInput => None,
        }
    }
}

/// LIFO journal of consumed units.
#[derive(Clone, Debug, Default)]
pub struct RewindBuffer {
    entries: SmallVec<[Consumed; INLINE_ENTRIES]>,
}

impl RewindBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push(&mut self, unit: Consumed) {
        self.entries.push(unit);
    }

    /// Remove the most recent entry. `None` means nothing was consumed since
    /// the last boundary.
    #[inline]
    pub fn pop(&mut self) -> Option<Consumed> {
        self.entries.pop()
    }

    /// The most recent entry, without removing it.
    #[inline]
    pub fn last(&self) -> Option<Consumed> {
        self.entries.last().copied()
    }

    /// Drop every entry. Keeps the allocation if the journal ever spilled.
    #[inline]
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
