//! Value coercion.
//!
//! Maps a raw token, or the text of a serialized pair, onto one of the
//! closed physical property types.

use dlg_ir::{Location, PhysicalType, PropertyValue, ResourceId, Token, TokenKind};

use crate::ParseError;

/// Parse a C integer literal: decimal or `0x` hex, optional leading `-`,
/// optional `U`, `L`, `UL` or `LU` suffix in either case.
///
/// There is no octal form: a leading zero is read as decimal, so `010` is ten.
pub fn parse_number(text: &str) -> Option<i64> {
    let (negative, unsigned) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    let digits = unsigned.trim_end_matches(['u', 'U', 'l', 'L']);
    if !is_integer_suffix(&unsigned[digits.len()..]) {
        return None;
    }

    let magnitude = match digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        Some(hex) if !hex.is_empty() && hex.bytes().all(|b| b.is_ascii_hexdigit()) => {
            u64::from_str_radix(hex, 16).ok()?
        }
        Some(_) => return None,
        None if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) => {
            digits.parse::<u64>().ok()?
        }
        None => return None,
    };

    if negative {
        i64::try_from(magnitude).ok().map(i64::wrapping_neg)
    } else {
        i64::try_from(magnitude).ok()
    }
}

/// Physical type a token kind naturally coerces to, if any.
fn natural_type(kind: TokenKind) -> Option<PhysicalType> {
    match kind {
        TokenKind::Number => Some(PhysicalType::Number),
        TokenKind::String => Some(PhysicalType::String),
        TokenKind::Identifier => Some(PhysicalType::Identifier),
        _ => None,
    }
}

fn describe_types(types: &[PhysicalType]) -> String {
    let names: Vec<&str> = types.iter().map(|t| t.name()).collect();
    names.join(" or ")
}

/// Coerce `token` for the property `label`, accepting only `permitted` types.
pub fn coerce(
    token: &Token,
    label: &str,
    permitted: &[PhysicalType],
) -> Result<PropertyValue, ParseError> {
    match natural_type(token.kind) {
        Some(physical) if permitted.contains(&physical) => coerce_any(token),
        _ => Err(ParseError::type_mismatch(
            label,
            describe_types(permitted),
            token,
        )),
    }
}

/// Coerce a number, string or identifier token to its natural type.
pub fn coerce_any(token: &Token) -> Result<PropertyValue, ParseError> {
    match token.kind {
        TokenKind::Number => number(token).map(PropertyValue::Number),
        TokenKind::String => Ok(PropertyValue::String(token.value.clone())),
        TokenKind::Identifier => Ok(PropertyValue::Identifier(token.value.clone())),
        _ => Err(ParseError::unexpected("a number, string or identifier", token)),
    }
}

/// Read a number token.
pub fn number(token: &Token) -> Result<i64, ParseError> {
    parse_number(&token.value).ok_or_else(|| invalid_number(&token.value, token.location))
}

/// Read a resource id: an identifier or a number.
pub fn resource_id(token: &Token, label: &str) -> Result<ResourceId, ParseError> {
    match token.kind {
        TokenKind::Identifier => Ok(ResourceId::Name(token.value.clone())),
        TokenKind::Number => number(token).map(ResourceId::Number),
        _ => Err(ParseError::type_mismatch(label, "identifier or number", token)),
    }
}

/// Coerce the text of a serialized pair. `quoted` is set when the value was
/// wrapped in doubled quotes, which always makes it a string.
pub fn coerce_text(text: &str, quoted: bool) -> PropertyValue {
    if quoted {
        return PropertyValue::String(text.to_owned());
    }
    match parse_number(text) {
        Some(n) => PropertyValue::Number(n),
        None => PropertyValue::Identifier(text.to_owned()),
    }
}

fn is_integer_suffix(suffix: &str) -> bool {
    match suffix.as_bytes() {
        [] => true,
        [one] => one.eq_ignore_ascii_case(&b'u') || one.eq_ignore_ascii_case(&b'l'),
        [first, second] => {
            !first.eq_ignore_ascii_case(second)
                && is_integer_suffix(&suffix[..1])
                && is_integer_suffix(&suffix[1..])
        }
        _ => false,
    }
}

#[cold]
fn invalid_number(text: &str, location: Location) -> ParseError {
    ParseError::InvalidNumber {
        text: text.to_owned(),
        location,
    }
}
