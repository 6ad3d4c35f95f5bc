use super::*;
use dlg_ir::TokenKind;
use pretty_assertions::assert_eq;

#[test]
fn test_unexpected_describes_found_token() {
    let found = Token::new(TokenKind::Comma, ",", Location::new(4, 9));
    let err = ParseError::unexpected("`)`", &found);

    assert_eq!(err.to_string(), "expected `)`, found `,`");
    assert_eq!(err.location(), Location::new(4, 9));
    assert_eq!(err.code(), ErrorCode::E1001);
}

#[test]
fn test_type_mismatch_names_label() {
    let found = Token::new(TokenKind::String, "oops", Location::new(2, 3));
    let err = ParseError::type_mismatch("Width", "number", &found);

    assert_eq!(
        err.to_string(),
        "`Width` expects number, found string \"oops\""
    );
    assert_eq!(err.code(), ErrorCode::E1006);
}

#[test]
fn test_lookup_failure_message() {
    let err = ParseError::LookupFailure {
        id: ResourceId::from("IDC_OK"),
        occurrence: 1,
        location: Location::new(30, 5),
    };
    assert_eq!(
        err.to_string(),
        "no declaration for control `IDC_OK` (occurrence 1)"
    );
}

#[test]
fn test_codes_follow_catalog() {
    let location = Location::new(1, 1);
    let cases = [
        (
            ParseError::UnexpectedEndOfInput {
                expected: "`)`".into(),
                location,
            },
            ErrorCode::E1002,
        ),
        (
            ParseError::Format {
                reason: "missing `{`".into(),
                location,
            },
            ErrorCode::E1004,
        ),
        (
            ParseError::UnknownLanguageMacro {
                name: "LANGUAGE_KLINGON".into(),
                location,
            },
            ErrorCode::E1005,
        ),
        (
            ParseError::InvalidNumber {
                text: "12abc".into(),
                location,
            },
            ErrorCode::E1007,
        ),
        (
            ParseError::OutOfRange {
                index: 9,
                len: 3,
                location,
            },
            ErrorCode::E9001,
        ),
    ];

    for (err, code) in cases {
        assert_eq!(err.code(), code, "{err}");
    }
}

#[test]
fn test_to_diagnostic() {
    let err = ParseError::UnknownLanguageMacro {
        name: "LANGUAGE_KLINGON".into(),
        location: Location::new(5, 8),
    };
    let diag = err.to_diagnostic();

    assert_eq!(diag.code, ErrorCode::E1005);
    assert_eq!(diag.message, "unknown language macro `LANGUAGE_KLINGON`");
    assert_eq!(diag.primary_location(), Some(Location::new(5, 8)));
    assert_eq!(diag.notes.len(), 1);
}

#[test]
fn test_internal_error_diagnostic_asks_for_report() {
    let err = ParseError::OutOfRange {
        index: 4,
        len: 4,
        location: Location::new(9, 1),
    };
    let diag = err.to_diagnostic();

    assert_eq!(diag.code, ErrorCode::E9001);
    assert_eq!(diag.notes, vec!["this is a parser bug, please report it".to_string()]);

    let syntax = ParseError::InvalidNumber {
        text: "12abc".into(),
        location: Location::new(1, 1),
    }
    .to_diagnostic();
    assert!(syntax.notes.is_empty());
}
