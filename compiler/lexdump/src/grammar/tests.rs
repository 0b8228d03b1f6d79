#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use pretty_assertions::assert_eq;
use statelex::{ErrorPolicy, LexerConfig, RunSummary, Token};

use super::*;

fn lex(input: &str) -> Vec<(&'static str, String)> {
    let (tokens, _) = Lexer::new(input, Demo::Code)
        .run_sync_collect()
        .expect("threads available");
    named(&tokens)
}

fn lex_collecting(input: &str) -> (Vec<(&'static str, String)>, RunSummary) {
    let config = LexerConfig::default().error_policy(ErrorPolicy::Collect);
    let (tokens, summary) = Lexer::with_config(input, Demo::Code, config)
        .run_sync_collect()
        .expect("threads available");
    (named(&tokens), summary)
}

fn named(tokens: &[Token]) -> Vec<(&'static str, String)> {
    tokens
        .iter()
        .map(|t| (kind_name(t.kind), t.text.clone()))
        .collect()
}

fn pairs(expected: &[(&'static str, &str)]) -> Vec<(&'static str, String)> {
    expected
        .iter()
        .map(|&(kind, text)| (kind, text.to_owned()))
        .collect()
}

// === Kind names ===

#[test]
fn kind_names_cover_reserved_and_demo_kinds() {
    assert_eq!(kind_name(TokenKind::EOF), "Eof");
    assert_eq!(kind_name(TokenKind::ERROR), "Error");
    assert_eq!(kind_name(NUMBER), "Number");
    assert_eq!(kind_name(INTERP_CLOSE), "InterpClose");
    assert_eq!(kind_name(TokenKind::new(99)), "Unknown");
}

// === Code ===

#[test]
fn numbers_identifiers_and_operators() {
    assert_eq!(
        lex("rate = 3.14 * n_2"),
        pairs(&[
            ("Ident", "rate"),
            ("Operator", "="),
            ("Number", "3.14"),
            ("Operator", "*"),
            ("Ident", "n_2"),
        ])
    );
}

#[test]
fn comparison_operators_take_two_characters() {
    assert_eq!(
        lex("a==b != c<=d"),
        pairs(&[
            ("Ident", "a"),
            ("Operator", "=="),
            ("Ident", "b"),
            ("Operator", "!="),
            ("Ident", "c"),
            ("Operator", "<="),
            ("Ident", "d"),
        ])
    );
}

#[test]
fn comments_are_dropped() {
    assert_eq!(
        lex("# header\nx # trailing\n+ 1"),
        pairs(&[("Ident", "x"), ("Operator", "+"), ("Number", "1")])
    );
}

#[test]
fn spans_point_into_the_input() {
    let (tokens, _) = Lexer::new("  foo  42", Demo::Code)
        .run_sync_collect()
        .expect("threads available");
    assert_eq!(
        tokens,
        vec![Token::new(IDENT, "foo", 2, 5), Token::new(NUMBER, "42", 7, 9)]
    );
}

#[test]
fn unexpected_character_is_reported_and_skipped() {
    let (tokens, summary) = lex_collecting("1 @ 2");
    assert_eq!(tokens, pairs(&[("Number", "1"), ("Number", "2")]));
    assert_eq!(summary.errors_reported, 1);
    assert_eq!(
        summary.last_error.map(|e| e.to_string()),
        Some("unexpected character '@'".to_owned())
    );
}

// === Strings ===

#[test]
fn string_quotes_are_not_part_of_the_text() {
    assert_eq!(
        lex(r#"say "hello world""#),
        pairs(&[("Ident", "say"), ("String", "hello world")])
    );
}

#[test]
fn escaped_quote_stays_in_string() {
    assert_eq!(lex(r#""a\"b""#), pairs(&[("String", r#"a"b"#)]));
}

#[test]
fn dollar_without_brace_is_plain_text() {
    assert_eq!(lex(r#""cost $5""#), pairs(&[("String", "cost $5")]));
}

#[test]
fn interpolation_resumes_the_string() {
    assert_eq!(
        lex(r#""a${x}b""#),
        pairs(&[
            ("String", "a"),
            ("InterpOpen", "${"),
            ("Ident", "x"),
            ("InterpClose", "}"),
            ("String", "b"),
        ])
    );
}

#[test]
fn nested_interpolation_unwinds_in_order() {
    assert_eq!(
        lex(r#""${"in${y}"}""#),
        pairs(&[
            ("InterpOpen", "${"),
            ("String", "in"),
            ("InterpOpen", "${"),
            ("Ident", "y"),
            ("InterpClose", "}"),
            ("InterpClose", "}"),
        ])
    );
}

#[test]
fn stray_close_brace_outside_interpolation_is_an_error() {
    let (tokens, summary) = lex_collecting("x }");
    assert_eq!(tokens, pairs(&[("Ident", "x")]));
    assert_eq!(
        summary.last_error.map(|e| e.to_string()),
        Some("unexpected character '}'".to_owned())
    );
}

#[test]
fn unterminated_string_keeps_partial_text() {
    let (tokens, summary) = lex_collecting(r#""abc"#);
    assert_eq!(tokens, pairs(&[("String", "abc")]));
    assert_eq!(
        summary.last_error.map(|e| e.to_string()),
        Some("unterminated string literal".to_owned())
    );
}

#[test]
fn unterminated_interpolation_is_reported_at_end_of_input() {
    let (tokens, summary) = lex_collecting(r#""a${x"#);
    assert_eq!(
        tokens,
        pairs(&[("String", "a"), ("InterpOpen", "${"), ("Ident", "x")])
    );
    assert_eq!(summary.errors_reported, 1);
    assert_eq!(
        summary.last_error.map(|e| e.to_string()),
        Some("unterminated interpolation".to_owned())
    );
}
