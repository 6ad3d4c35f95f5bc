//! Flags chains: `WS_CHILD | WS_VISIBLE 1342177280`.
//!
//! The trailing number is the value written by the tool that produced the
//! file. It is stored as-is; the names are not resolved or checked against it.

use dlg_ir::{Flags, TokenKind};
use smallvec::SmallVec;

use super::Parser;
use crate::value::number;
use crate::ParseError;

impl<'a> Parser<'a> {
    /// `identifier ('|' identifier)* number`, or a bare number unless
    /// `strict_flags` is set.
    pub(super) fn parse_flags(&mut self, label: &str) -> Result<Flags, ParseError> {
        if self.cursor.check(TokenKind::Number) {
            let token = self.cursor.next()?;
            if self.options.strict_flags {
                return Err(ParseError::unexpected(
                    format!("flag name for `{label}`"),
                    token,
                ));
            }
            return Ok(Flags::new(std::iter::empty::<String>(), number(token)?));
        }

        let mut names: SmallVec<[&str; 4]> = SmallVec::new();
        loop {
            let name = self.expect(TokenKind::Identifier, "flag name")?;
            names.push(&name.value);

            let next = self.cursor.next_expecting("`|` or the flags value")?;
            match next.kind {
                TokenKind::LogicalOr => {}
                TokenKind::Number => return Ok(Flags::new(names, number(next)?)),
                _ => return Err(ParseError::unexpected("`|` or the flags value", next)),
            }
        }
    }
}
