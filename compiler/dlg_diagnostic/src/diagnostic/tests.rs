use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_diagnostic_builder() {
    let diag = Diagnostic::error(ErrorCode::E1001)
        .with_message("test error")
        .with_label(Location::new(3, 7), "here")
        .with_note("while parsing a control definition");

    assert_eq!(diag.code, ErrorCode::E1001);
    assert_eq!(diag.message, "test error");
    assert_eq!(diag.labels.len(), 1);
    assert_eq!(diag.primary_location(), Some(Location::new(3, 7)));
    assert_eq!(diag.notes.len(), 1);
}

#[test]
fn test_no_labels_no_location() {
    let diag = Diagnostic::error(ErrorCode::E9001).with_message("lookahead past end");
    assert_eq!(diag.primary_location(), None);
}

#[test]
fn test_diagnostic_display() {
    let diag = Diagnostic::error(ErrorCode::E1005)
        .with_message("unknown language macro `LANGUAGE_KLINGON`")
        .with_label(Location::new(4, 8), "not a supported language")
        .with_note("expected one of LANGUAGE_ENGLISH, LANGUAGE_GERMAN, LANGUAGE_FRENCH");

    assert_eq!(
        diag.to_string(),
        "error [E1005]: unknown language macro `LANGUAGE_KLINGON`\n  \
         --> 4:8: not a supported language\n  \
         = note: expected one of LANGUAGE_ENGLISH, LANGUAGE_GERMAN, LANGUAGE_FRENCH"
    );
}
