//! String-table files: a flat list of `#define ID "text"` entries for one
//! language. Adjacent string literals are joined, as a C compiler would.

use dlg_ir::{Language, StringMap, Token, TokenKind};
use tracing::{debug, warn};

use crate::cursor::Cursor;
use crate::ParseError;

/// Parse a complete string table for `language`.
pub(crate) fn parse_table(tokens: &[Token], language: Language) -> Result<StringMap, ParseError> {
    let mut cursor = Cursor::new(tokens);
    let mut map = StringMap::new();

    loop {
        cursor.skip_comments();
        if !cursor.has_next() {
            break;
        }
        cursor.expect_value(TokenKind::Directive, "#define")?;
        let id = cursor.expect(TokenKind::Identifier, "string identifier")?;
        let mut text = cursor.expect(TokenKind::String, "string text")?.value.clone();
        while cursor.check(TokenKind::String) {
            text.push_str(&cursor.next()?.value);
        }

        if let Some(previous) = map.insert(id.value.clone(), language, text) {
            warn!(
                id = %id.value,
                %language,
                location = %id.location,
                previous = %previous,
                "string redefined, keeping the last definition"
            );
        }
    }

    debug!(%language, entries = map.len(), "string table parsed");
    Ok(map)
}
