//! Demo expression grammar.
//!
//! Numbers, identifiers, operators, `#` line comments, and double-quoted
//! strings. Inside a string, `\` escapes the next character (the backslash
//! is cut out of the token text) and `${ ... }` interpolates an expression:
//! the string state saves itself on the ledger, scanning drops back to
//! [`Demo::Code`], and the closing `}` resumes the string. Empty string
//! segments produce no token.

use statelex::{Lexer, State, TokenKind};

pub const NUMBER: TokenKind = TokenKind::new(1);
pub const IDENT: TokenKind = TokenKind::new(2);
pub const OPERATOR: TokenKind = TokenKind::new(3);
pub const STRING: TokenKind = TokenKind::new(4);
pub const INTERP_OPEN: TokenKind = TokenKind::new(5);
pub const INTERP_CLOSE: TokenKind = TokenKind::new(6);

const DIGITS: &str = "0123456789";
const OPERATORS: &str = "+-*/%=<>!(),";

/// Human-readable name of a token kind.
pub fn kind_name(kind: TokenKind) -> &'static str {
    match kind {
        TokenKind::EOF => "Eof",
        TokenKind::ERROR => "Error",
        NUMBER => "Number",
        IDENT => "Ident",
        OPERATOR => "Operator",
        STRING => "String",
        INTERP_OPEN => "InterpOpen",
        INTERP_CLOSE => "InterpClose",
        _ => "Unknown",
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Demo {
    /// Between tokens. Skips whitespace and dispatches on the next character.
    Code,
    Number,
    Ident,
    Operator,
    Comment,
    /// Inside a string literal, after the opening quote or a closing `}`.
    Str,
}

impl State for Demo {
    fn step(self, lx: &mut Lexer<Self>) -> Option<Self> {
        match self {
            Demo::Code => code(lx),
            Demo::Number => number(lx),
            Demo::Ident => ident(lx),
            Demo::Operator => operator(lx),
            Demo::Comment => comment(lx),
            Demo::Str => string(lx),
        }
    }
}

fn code(lx: &mut Lexer<Demo>) -> Option<Demo> {
    lx.take_run_if(char::is_whitespace);
    lx.ignore();

    let Some(ch) = lx.peek() else {
        if lx.nesting_depth() > 0 {
            lx.error("unterminated interpolation");
        }
        return None;
    };

    match ch {
        '0'..='9' => Some(Demo::Number),
        '#' => Some(Demo::Comment),
        '"' => {
            lx.next();
            lx.ignore();
            Some(Demo::Str)
        }
        '}' if lx.saved_state() == Some(&Demo::Str) => {
            lx.next();
            lx.emit(INTERP_CLOSE);
            lx.pop_state()
        }
        c if c.is_alphabetic() || c == '_' => Some(Demo::Ident),
        c if OPERATORS.contains(c) => Some(Demo::Operator),
        other => {
            lx.next();
            lx.error(format!("unexpected character {other:?}"));
            lx.ignore();
            Some(Demo::Code)
        }
    }
}

fn number(lx: &mut Lexer<Demo>) -> Option<Demo> {
    lx.take_run(DIGITS);
    // A fraction needs a digit after the dot.
    if lx.peek() == Some('.') && lx.peek_ahead(2).is_some_and(|c| c.is_ascii_digit()) {
        lx.take('.');
        lx.take_run(DIGITS);
    }
    lx.emit(NUMBER);
    Some(Demo::Code)
}

fn ident(lx: &mut Lexer<Demo>) -> Option<Demo> {
    lx.take_run_if(|c| c.is_alphanumeric() || c == '_');
    lx.emit(IDENT);
    Some(Demo::Code)
}

fn operator(lx: &mut Lexer<Demo>) -> Option<Demo> {
    if let Some(first) = lx.next() {
        if matches!(first, '=' | '!' | '<' | '>') {
            lx.take('=');
        }
    }
    lx.emit(OPERATOR);
    Some(Demo::Code)
}

fn comment(lx: &mut Lexer<Demo>) -> Option<Demo> {
    lx.take_run_if(|c| c != '\n');
    lx.ignore();
    Some(Demo::Code)
}

fn string(lx: &mut Lexer<Demo>) -> Option<Demo> {
    loop {
        match lx.next() {
            None => {
                lx.error("unterminated string literal");
                if !lx.current().is_empty() {
                    lx.emit(STRING);
                }
                return None;
            }
            Some('"') => {
                lx.backup();
                if !lx.current().is_empty() {
                    lx.emit(STRING);
                }
                lx.next();
                lx.ignore();
                return Some(Demo::Code);
            }
            Some('\\') => {
                lx.ignore_last_unit();
                lx.next();
            }
            Some('$') => {
                if lx.peek() != Some('{') {
                    continue;
                }
                lx.backup();
                if !lx.current().is_empty() {
                    lx.emit(STRING);
                }
                lx.take('$');
                lx.take('{');
                lx.emit(INTERP_OPEN);
                lx.push_state(Demo::Str);
                return Some(Demo::Code);
            }
            Some(_) => {}
        }
    }
}

#[cfg(test)]
mod tests;
