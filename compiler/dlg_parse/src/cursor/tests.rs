#![allow(clippy::unwrap_used)]

use super::*;
use crate::tests::lex::lex;
use pretty_assertions::assert_eq;

#[test]
fn test_cursor_navigation() {
    let tokens = lex("foo ( 1 )");
    let mut cursor = Cursor::new(&tokens);

    assert!(cursor.has_next());
    assert!(cursor.check(TokenKind::Identifier));
    assert_eq!(cursor.next().map(|t| t.value.as_str()), Ok("foo"));
    assert_eq!(cursor.position(), 1);
    assert!(cursor.check(TokenKind::OpenParen));

    cursor.next().ok();
    cursor.next().ok();
    cursor.next().ok();
    assert!(!cursor.has_next());
    assert_eq!(cursor.position(), 4);
}

#[test]
fn test_next_past_end() {
    let tokens = lex("a");
    let mut cursor = Cursor::new(&tokens);
    cursor.next().ok();

    let err = cursor.next_expecting("`)`").unwrap_err();
    assert_eq!(
        err,
        ParseError::UnexpectedEndOfInput {
            expected: "`)`".into(),
            location: Location::new(1, 1),
        }
    );
}

#[test]
fn test_empty_stream() {
    let mut cursor = Cursor::new(&[]);
    assert!(!cursor.has_next());
    assert_eq!(cursor.end_location(), Location::DUMMY);
    assert!(cursor.next().is_err());
}

#[test]
fn test_push_back_single_step() {
    let tokens = lex("a b c");
    let mut cursor = Cursor::new(&tokens);

    cursor.next().ok();
    cursor.next().ok();
    assert!(cursor.push_back());
    assert_eq!(cursor.position(), 1);
    assert!(!cursor.push_back(), "second consecutive rewind must be refused");
    assert_eq!(cursor.position(), 1);

    assert_eq!(cursor.next().map(|t| t.value.as_str()), Ok("b"));
    assert!(cursor.push_back());
}

#[test]
fn test_push_back_at_start() {
    let tokens = lex("a");
    let mut cursor = Cursor::new(&tokens);
    assert!(!cursor.push_back());
    assert_eq!(cursor.position(), 0);
}

#[test]
fn test_peek_does_not_consume() {
    let tokens = lex("a b c");
    let mut cursor = Cursor::new(&tokens);
    cursor.next().ok();

    assert_eq!(cursor.peek(0).map(|t| t.value.as_str()), Ok("b"));
    assert_eq!(cursor.peek(1).map(|t| t.value.as_str()), Ok("c"));
    assert_eq!(cursor.position(), 1);

    let err = cursor.peek(2).unwrap_err();
    assert!(matches!(err, ParseError::OutOfRange { index: 3, len: 3, .. }));
}

#[test]
fn test_at_is_absolute() {
    let tokens = lex("a b c");
    let mut cursor = Cursor::new(&tokens);
    cursor.next().ok();
    cursor.next().ok();

    assert_eq!(cursor.at(0).map(|t| t.value.as_str()), Ok("a"));
    assert!(cursor.at(7).is_err());
}

#[test]
fn test_skip_comments() {
    let tokens = lex("// one\n/* two */ x");
    let mut cursor = Cursor::new(&tokens);
    cursor.skip_comments();
    assert!(cursor.check_value(TokenKind::Identifier, "x"));
    assert!(!cursor.push_back());
}

#[test]
fn test_expect() {
    let tokens = lex("#include \"a.h\"");
    let mut cursor = Cursor::new(&tokens);

    assert!(cursor.expect_value(TokenKind::Directive, "#include").is_ok());
    let err = cursor.expect(TokenKind::Number, "number").unwrap_err();
    assert_eq!(err.to_string(), "expected number, found string \"a.h\"");
}

#[test]
fn test_expect_value_wrong_text() {
    let tokens = lex("#ifdef");
    let mut cursor = Cursor::new(&tokens);

    let err = cursor.expect_value(TokenKind::Directive, "#include").unwrap_err();
    assert_eq!(
        err.to_string(),
        "expected `#include`, found directive `#ifdef`"
    );
}
