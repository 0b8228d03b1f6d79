//! Token model: kind, owned lexeme text and byte span.

use std::fmt;

/// Maximum number of characters shown by [`Token`]'s `Display` rendering
/// before the text is cut and suffixed with `...`.
const RENDER_LIMIT: usize = 10;

/// Classification of an emitted token.
///
/// Two values are reserved: [`TokenKind::EOF`] (`-1`) and
/// [`TokenKind::ERROR`] (`0`). Grammars define their own kinds as positive
/// values, usually as associated constants:
///
/// ```
/// use statelex_core::TokenKind;
///
/// const NUMBER: TokenKind = TokenKind::new(1);
/// const OPERATOR: TokenKind = TokenKind::new(2);
/// assert!(NUMBER.is_custom() && OPERATOR.is_custom());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TokenKind(i32);

impl TokenKind {
    /// End of input.
    pub const EOF: Self = Self(-1);
    /// Lexical error.
    pub const ERROR: Self = Self(0);

    /// Wrap a raw kind value.
    #[inline]
    pub const fn new(raw: i32) -> Self {
        Self(raw)
    }

    /// The raw kind value.
    #[inline]
    pub const fn raw(self) -> i32 {
        self.0
    }

    #[inline]
    pub const fn is_eof(self) -> bool {
        self.0 == Self::EOF.0
    }

    #[inline]
    pub const fn is_error(self) -> bool {
        self.0 == Self::ERROR.0
    }

    /// Returns `true` for grammar-defined kinds (any positive value).
    #[inline]
    pub const fn is_custom(self) -> bool {
        self.0 > 0
    }
}

/// Half-open byte range `start..end` into the input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start {start} exceeds end {end}");
        Self { start, end }
    }

    /// Length in bytes.
    #[inline]
    pub fn len(self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.start == self.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// A classified lexeme.
///
/// The text is owned: the scanner's input may be edited in place after the
/// token is emitted (see [`Scanner::ignore_last_unit`](crate::Scanner::ignore_last_unit)),
/// and tokens cross the producer/consumer thread boundary.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, start: usize, end: usize) -> Self {
        Token {
            kind,
            text: text.into(),
            span: Span::new(start, end),
        }
    }
}

/// Short diagnostic rendering.
///
/// - `EOF` tokens render as `EOF`
/// - `ERROR` tokens render their text unmodified
/// - everything else renders the quoted text, cut to the first 10
///   characters and suffixed with `...` when longer
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.kind.is_eof() {
            return f.write_str("EOF");
        }
        if self.kind.is_error() {
            return f.write_str(&self.text);
        }
        match self.text.char_indices().nth(RENDER_LIMIT) {
            Some((cut, _)) => write!(f, "{:?}...", &self.text[..cut]),
            None => write!(f, "{:?}", self.text),
        }
    }
}
