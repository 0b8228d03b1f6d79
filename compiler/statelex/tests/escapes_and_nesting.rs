//! In-place escape elision and ledger-based delegation.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use pretty_assertions::assert_eq;
use statelex::{ErrorPolicy, Lexer, LexerConfig, State, Token, TokenKind};

const TEXT: TokenKind = TokenKind::new(1);
const OPEN: TokenKind = TokenKind::new(2);
const CLOSE: TokenKind = TokenKind::new(3);
const WORD: TokenKind = TokenKind::new(4);

/// Raw text with `\` escapes. The marker is cut out of the input, the
/// escaped character is kept verbatim.
#[derive(Debug)]
enum Escaped {
    Text,
}

impl State for Escaped {
    fn step(self, lx: &mut Lexer<Self>) -> Option<Self> {
        loop {
            match lx.next() {
                None => break,
                Some('\\') => {
                    lx.ignore_last_unit();
                    lx.next();
                }
                Some(_) => {}
            }
        }
        if !lx.current().is_empty() {
            lx.emit(TEXT);
        }
        None
    }
}

#[test]
fn escape_marker_is_removed_from_token_text() {
    let (tokens, summary) = Lexer::new(r"a\nb", Escaped::Text)
        .run_sync_collect()
        .expect("threads available");
    assert_eq!(tokens, vec![Token::new(TEXT, "anb", 0, 3)]);
    assert_eq!(summary.input, "anb");
}

#[test]
fn escaped_escape_keeps_one_backslash() {
    let (tokens, _) = Lexer::new(r"x\\y", Escaped::Text)
        .run_sync_collect()
        .expect("threads available");
    assert_eq!(tokens[0].text, r"x\y");
}

#[test]
fn trailing_marker_is_dropped() {
    let (tokens, _) = Lexer::new("end\\", Escaped::Text)
        .run_sync_collect()
        .expect("threads available");
    assert_eq!(tokens[0].text, "end");
}

/// Text with `[ ... ]` groups. Inside a group, words are scanned by a
/// separate state; `[` saves the state to return to, `]` restores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Groups {
    Text,
    Group,
}

impl State for Groups {
    fn step(self, lx: &mut Lexer<Self>) -> Option<Self> {
        match self {
            Groups::Text => {
                lx.take_run_if(|c| c != '[' && c != ']');
                if !lx.current().is_empty() {
                    lx.emit(TEXT);
                }
                if lx.take('[') {
                    lx.emit(OPEN);
                    lx.push_state(Groups::Text);
                    return Some(Groups::Group);
                }
                if lx.take(']') {
                    lx.error("unbalanced ']'");
                    lx.ignore();
                    return Some(Groups::Text);
                }
                None
            }
            Groups::Group => {
                lx.take_run(' ');
                lx.ignore();
                if lx.take('[') {
                    lx.emit(OPEN);
                    lx.push_state(Groups::Group);
                    return Some(Groups::Group);
                }
                if lx.take(']') {
                    lx.emit(CLOSE);
                    return lx.pop_state();
                }
                lx.take_run_if(char::is_alphanumeric);
                if lx.current().is_empty() {
                    lx.error("unterminated group");
                    return None;
                }
                lx.emit(WORD);
                Some(Groups::Group)
            }
        }
    }
}

fn kinds_and_texts(tokens: &[Token]) -> Vec<(i32, &str)> {
    tokens.iter().map(|t| (t.kind.raw(), t.text.as_str())).collect()
}

#[test]
fn ledger_resumes_caller_after_group() {
    let (tokens, _) = Lexer::new("say [hi there] now", Groups::Text)
        .run_sync_collect()
        .expect("threads available");
    assert_eq!(
        kinds_and_texts(&tokens),
        [
            (1, "say "),
            (2, "["),
            (4, "hi"),
            (4, "there"),
            (3, "]"),
            (1, " now"),
        ]
    );
}

#[test]
fn nested_groups_unwind_in_order() {
    let (tokens, _) = Lexer::new("[a [b] c]!", Groups::Text)
        .run_sync_collect()
        .expect("threads available");
    assert_eq!(
        kinds_and_texts(&tokens),
        [
            (2, "["),
            (4, "a"),
            (2, "["),
            (4, "b"),
            (3, "]"),
            (4, "c"),
            (3, "]"),
            (1, "!"),
        ]
    );
}

#[test]
fn unterminated_group_reports_through_collect_policy() {
    let config = LexerConfig::default().error_policy(ErrorPolicy::Collect);
    let (tokens, summary) = Lexer::with_config("[open", Groups::Text, config)
        .run_sync_collect()
        .expect("threads available");
    assert_eq!(kinds_and_texts(&tokens), [(2, "["), (4, "open")]);
    assert_eq!(
        summary.last_error.map(|e| e.to_string()),
        Some("unterminated group".to_owned())
    );
}
