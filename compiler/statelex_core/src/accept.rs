//! Membership tests for [`Scanner::take`](crate::Scanner::take) and
//! [`Scanner::take_run`](crate::Scanner::take_run).

use std::ops::RangeInclusive;

/// A fixed set of acceptable characters.
///
/// Implemented for the usual ways of spelling a character class:
///
/// - `&str` / `String`: any character of the string (`"0123456789"`)
/// - `char`: exactly that character
/// - `[char; N]` / `&[char]`: any listed character
/// - `RangeInclusive<char>`: `'a'..='z'`
pub trait AcceptSet {
    fn accepts(&self, ch: char) -> bool;
}

impl<T: AcceptSet + ?Sized> AcceptSet for &T {
    #[inline]
    fn accepts(&self, ch: char) -> bool {
        (**self).accepts(ch)
    }
}

/// ASCII members are found with `memchr` on the raw bytes. An ASCII byte
/// never occurs inside a multi-byte UTF-8 sequence, so a byte hit is always
/// a character hit.
impl AcceptSet for str {
    #[inline]
    fn accepts(&self, ch: char) -> bool {
        match u8::try_from(ch) {
            Ok(byte) if byte.is_ascii() => memchr::memchr(byte, self.as_bytes()).is_some(),
            _ => self.contains(ch),
        }
    }
}

impl AcceptSet for String {
    #[inline]
    fn accepts(&self, ch: char) -> bool {
        self.as_str().accepts(ch)
    }
}

impl AcceptSet for char {
    #[inline]
    fn accepts(&self, ch: char) -> bool {
        *self == ch
    }
}

impl AcceptSet for [char] {
    #[inline]
    fn accepts(&self, ch: char) -> bool {
        self.contains(&ch)
    }
}

impl<const N: usize> AcceptSet for [char; N] {
    #[inline]
    fn accepts(&self, ch: char) -> bool {
        self.contains(&ch)
    }
}

impl AcceptSet for RangeInclusive<char> {
    #[inline]
    fn accepts(&self, ch: char) -> bool {
        self.contains(&ch)
    }
}
