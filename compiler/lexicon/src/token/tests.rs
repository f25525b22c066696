#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]

use super::*;
use crate::Scanner;
use pretty_assertions::assert_eq;

fn first(source: &str) -> Token<'_> {
    *Scanner::new(source).current_token()
}

#[test]
fn kind_is_one_byte() {
    assert_eq!(std::mem::size_of::<TokenKind>(), 1);
}

#[test]
fn kind_names() {
    assert_eq!(TokenKind::Eof.to_string(), "EOF");
    assert_eq!(TokenKind::IntLiteral.name(), "INT_LITERAL");
    assert_eq!(TokenKind::Invalid.to_string(), "INVALID");
}

#[test]
fn kind_predicates() {
    assert!(TokenKind::Eof.is_eof());
    assert!(TokenKind::Invalid.is_error());
    assert!(TokenKind::CharLiteral.is_literal());
    assert!(TokenKind::FloatLiteral.is_literal());
    assert!(!TokenKind::Identifier.is_literal());
    assert!(!TokenKind::Comment.is_error());
}

#[test]
fn display_includes_text_and_position() {
    let mut scanner = Scanner::new("\n  foo");
    assert_eq!(
        scanner.current_token().to_string(),
        "IDENTIFIER(\"foo\") at 2:3"
    );
    scanner.next_token();
    assert_eq!(scanner.current_token().to_string(), "EOF at 2:6");
}

#[test]
fn span_and_len() {
    let mut scanner = Scanner::new("ab  cde");
    scanner.next_token();
    let tok = scanner.current_token();
    assert_eq!(tok.span(), 4..7);
    assert_eq!(tok.len(), 3);
}

#[test]
fn text_is_lossy_for_invalid_bytes() {
    let tok = *Scanner::from_bytes(b"\xFF").current_token();
    assert_eq!(tok.as_str(), None);
    assert_eq!(tok.text(), "\u{FFFD}");
}

#[test]
fn to_error_only_for_invalid() {
    assert!(first("x").to_error().is_none());

    let err = first("\"open").to_error().unwrap();
    assert_eq!(err.kind, LexErrorKind::UnterminatedString);
    assert_eq!(err.span(), 0..5);
}

// === Cooking ===

#[test]
fn cooked_borrows_without_escapes() {
    let tok = first("\"plain\"");
    assert!(matches!(tok.cooked(), Ok(Cow::Borrowed("plain"))));
}

#[test]
fn cooked_resolves_escapes() {
    let tok = first(r#""a\tb\u{3bb}\"""#);
    assert_eq!(tok.cooked().unwrap(), "a\tbλ\"");

    let tok = first(r"'\n'");
    assert_eq!(tok.kind, TokenKind::CharLiteral);
    assert_eq!(tok.cooked().unwrap(), "\n");
}

#[test]
fn char_literal_must_hold_one_character() {
    assert_eq!(first("'λ'").cooked().unwrap(), "λ");
    assert_eq!(first(r"'\u{41}'").cooked().unwrap(), "A");
    assert_eq!(
        first("'ab'").cooked(),
        Err(EscapeError::CharLiteralLength { len: 2 })
    );
    assert_eq!(
        first("''").cooked(),
        Err(EscapeError::CharLiteralLength { len: 0 })
    );
}

#[test]
fn cooked_empty_literal() {
    assert_eq!(first("\"\"").cooked().unwrap(), "");
}

#[test]
fn cooked_offsets_are_lexeme_relative() {
    let tok = first(r#""ab\q""#);
    assert_eq!(
        tok.cooked(),
        Err(EscapeError::UnknownEscape {
            escape: 'q',
            offset: 3
        })
    );
}

#[test]
fn cooked_rejects_non_literals() {
    assert_eq!(
        first("x").cooked(),
        Err(EscapeError::NotQuoted {
            kind: TokenKind::Identifier
        })
    );
    assert_eq!(
        first("\"x").cooked(),
        Err(EscapeError::NotQuoted {
            kind: TokenKind::Invalid
        })
    );
}

#[test]
fn cooked_reports_invalid_utf8() {
    let tok = *Scanner::from_bytes(b"\"a\xFF\"").current_token();
    assert_eq!(tok.cooked(), Err(EscapeError::InvalidUtf8 { offset: 2 }));
}
