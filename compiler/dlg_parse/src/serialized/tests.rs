#![allow(clippy::unwrap_used)]

use super::*;
use dlg_ir::PropertyValue;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn labels(block: &SerializedBlock) -> Vec<&str> {
    block.properties.iter().map(|p| p.label.as_str()).collect()
}

#[test]
fn test_decode_pairs() {
    let block = decode_serialized(r#"{[A=1][B=""hi""]}"#).unwrap();

    assert_eq!(
        block.properties,
        vec![
            Property::new("A", PropertyValue::Number(1)),
            Property::new("B", PropertyValue::String("hi".into())),
        ]
    );
    assert!(!block.caption_follows);
}

#[test]
fn test_decode_caption_marker() {
    let block = decode_serialized(r#"{[A=1]}Caption=""#).unwrap();
    assert_eq!(labels(&block), ["A"]);
    assert!(block.caption_follows);
}

#[test]
fn test_decode_empty() {
    for text in ["", "   ", "{}"] {
        let block = decode_serialized(text).unwrap();
        assert!(block.is_empty(), "{text:?}");
    }
}

#[test]
fn test_decode_identifier_and_whitespace() {
    let block = decode_serialized(" { [Font=Tahoma] [Size = 8] } ").unwrap();
    assert_eq!(
        block.properties,
        vec![
            Property::new("Font", PropertyValue::Identifier("Tahoma".into())),
            Property::new("Size", PropertyValue::Number(8)),
        ]
    );
}

#[test]
fn test_decode_trims_padded_values() {
    let block = decode_serialized("{[A=  7 ][B= \"\"hi\"\" ]}").unwrap();
    assert_eq!(
        block.properties,
        vec![
            Property::new("A", PropertyValue::Number(7)),
            Property::new("B", PropertyValue::String("hi".into())),
        ]
    );
}

#[test]
fn test_decode_value_keeps_inner_equals() {
    let block = decode_serialized(r#"{[Expr=""a=b""]}"#).unwrap();
    assert_eq!(
        block.properties,
        vec![Property::new("Expr", PropertyValue::String("a=b".into()))]
    );
}

#[test]
fn test_decode_errors() {
    let cases = [
        "[A=1]",
        "{[A=1]",
        "{[A=1]}Title=\"",
        "{[A1]}",
        "{[=1]}",
        "{[A=1}",
    ];
    for text in cases {
        let err = decode_serialized(text).unwrap_err();
        assert!(matches!(err, ParseError::Format { .. }), "{text:?}: {err}");
    }
}

#[test]
fn test_decode_carries_location() {
    let err = decode("{[broken]}", Location::new(8, 12)).unwrap_err();
    assert_eq!(err.location(), Location::new(8, 12));
    assert_eq!(
        err.to_string(),
        "malformed serialized properties: pair `broken` has no `=`"
    );
}

proptest! {
    #[test]
    fn decode_never_panics(text in ".{0,40}") {
        let _ = decode_serialized(&text);
    }

    #[test]
    fn decode_keeps_pair_order(
        pairs in prop::collection::vec(("[A-Z][A-Za-z0-9_]{0,8}", "[a-z0-9]{1,8}"), 0..6),
        caption in any::<bool>(),
    ) {
        let mut text = String::from("{");
        for (label, value) in &pairs {
            text.push_str(&format!("[{label}={value}]"));
        }
        text.push('}');
        if caption {
            text.push_str(CAPTION_MARKER);
        }

        let block = decode_serialized(&text).unwrap();
        let decoded: Vec<&str> = block.properties.iter().map(|p| p.label.as_str()).collect();
        let expected: Vec<&str> = pairs.iter().map(|(l, _)| l.as_str()).collect();
        prop_assert_eq!(decoded, expected);
        prop_assert_eq!(block.caption_follows, caption);
    }

    #[test]
    fn quoted_values_are_strings(value in "[A-Za-z0-9 ]{0,12}") {
        let block = decode_serialized(&format!("{{[T=\"\"{value}\"\"]}}")).unwrap();
        prop_assert_eq!(&block.properties[0].value, &PropertyValue::String(value.clone()));
    }
}
