//! Inert layer metadata:
//!
//! ```text
//! #if 0
//! BEGIN_LAYERS
//!     BEGIN_LAYER "Buttons" 1001 1002 END_LAYER
//! END_LAYERS
//! #endif
//! ```

use dlg_ir::{DialogResource, Layer, TokenKind};
use tracing::debug;

use super::Parser;
use crate::value::number;
use crate::ParseError;

impl<'a> Parser<'a> {
    pub(super) fn parse_layers(&mut self, dialog: &mut DialogResource) -> Result<(), ParseError> {
        self.expect_directive("#if")?;
        let condition = self.expect(TokenKind::Number, "`0`")?;
        if number(condition)? != 0 {
            return Err(ParseError::unexpected("`0`", condition));
        }

        self.skip_comments();
        self.expect_keyword("BEGIN_LAYERS")?;
        loop {
            self.skip_comments();
            if !self.check_keyword("BEGIN_LAYER") {
                break;
            }
            self.cursor.next()?;
            let name = self.expect(TokenKind::String, "layer name")?;
            let mut values = Vec::new();
            while self.cursor.check(TokenKind::Number) {
                values.push(number(self.cursor.next()?)?);
            }
            self.expect_keyword("END_LAYER")?;

            debug!(layer = %name.value, values = values.len(), "layer");
            dialog.layers.push(Layer {
                name: name.value.clone(),
                values,
            });
        }
        self.expect_keyword("END_LAYERS")?;
        self.skip_comments();
        self.expect_directive("#endif")?;
        Ok(())
    }
}
