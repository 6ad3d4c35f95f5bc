//! Serialized-property codec.
//!
//! Some properties travel inside one string literal as
//! `{[Label=value][Label=""text""]}`. When the block is followed by
//! `Caption="`, the caption itself is the *next* token: it cannot live
//! inside the literal without closing it.

use dlg_ir::{Location, Property};

use crate::value::coerce_text;
use crate::ParseError;

/// Trailer announcing that the caption follows as the next token.
pub const CAPTION_MARKER: &str = "Caption=\"";

/// Label under which a trailing caption is stored.
pub const CAPTION_LABEL: &str = "Caption";

/// A decoded serialized block.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SerializedBlock {
    pub properties: Vec<Property>,
    /// The block ended in `Caption="`; the caller reads the caption from
    /// the following token.
    pub caption_follows: bool,
}

impl SerializedBlock {
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty() && !self.caption_follows
    }
}

/// Decode a serialized block that has no source location.
pub fn decode_serialized(text: &str) -> Result<SerializedBlock, ParseError> {
    decode(text, Location::DUMMY)
}

/// Decode the text of a string token found at `location`.
pub(crate) fn decode(text: &str, location: Location) -> Result<SerializedBlock, ParseError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(SerializedBlock::default());
    }

    let format_error = |reason: String| ParseError::Format { reason, location };

    let Some(rest) = text.strip_prefix('{') else {
        return Err(format_error(format!("expected `{{` at the start of `{text}`")));
    };
    let Some((pairs, trailer)) = rest.split_once('}') else {
        return Err(format_error(format!("missing `}}` in `{text}`")));
    };
    let caption_follows = match trailer {
        "" => false,
        CAPTION_MARKER => true,
        other => return Err(format_error(format!("unexpected `{other}` after `}}`"))),
    };

    let mut properties = Vec::new();
    for fragment in pairs.split('[') {
        let fragment = fragment.trim();
        if fragment.is_empty() {
            continue;
        }
        let Some(pair) = fragment.strip_suffix(']') else {
            return Err(format_error(format!("unterminated pair `{fragment}`")));
        };
        let Some((label, value)) = pair.split_once('=') else {
            return Err(format_error(format!("pair `{pair}` has no `=`")));
        };
        let label = label.trim();
        if label.is_empty() {
            return Err(format_error(format!("pair `{pair}` has no label")));
        }

        let (value, quoted) = unquote(value.trim());
        properties.push(Property::new(label, coerce_text(value, quoted)));
    }

    Ok(SerializedBlock {
        properties,
        caption_follows,
    })
}

/// Strip one level of doubled quotes: `""text""` becomes `text`.
fn unquote(value: &str) -> (&str, bool) {
    match value
        .strip_prefix("\"\"")
        .and_then(|v| v.strip_suffix("\"\""))
    {
        Some(inner) => (inner, true),
        None => (value, false),
    }
}

#[cfg(test)]
mod tests;
