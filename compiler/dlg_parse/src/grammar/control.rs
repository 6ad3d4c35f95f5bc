//! Control declarations and definitions.
//!
//! `declare_control(Type, Id)` creates a control; the k-th declaration of an
//! id gets occurrence k. Definitions are counted the same way and merged into
//! the control with the matching `(id, occurrence)`, so two controls sharing
//! an id bind by order, not by position in the file.

use dlg_ir::{Control, DialogResource, ResourceId, TokenKind};
use rustc_hash::FxHashMap;
use tracing::debug;

use super::slots::{CONTROL_ID_OFFSET, CONTROL_SLOTS};
use super::Parser;
use crate::value::resource_id;
use crate::ParseError;

/// Take the next occurrence index for `id` from `counters`.
fn next_occurrence(counters: &mut FxHashMap<ResourceId, u32>, id: &ResourceId) -> u32 {
    let counter = counters.entry(id.clone()).or_insert(0);
    let occurrence = *counter;
    *counter += 1;
    occurrence
}

impl<'a> Parser<'a> {
    /// `declare_control ( Type , Id )`
    pub(super) fn parse_declaration(&mut self, dialog: &mut DialogResource) -> Result<(), ParseError> {
        self.expect_keyword("declare_control")?;
        self.expect(TokenKind::OpenParen, "`(`")?;
        let control_type = self.expect(TokenKind::Identifier, "control type")?;
        self.expect(TokenKind::Comma, "`,`")?;
        let id_token = self.cursor.next_expecting("control id")?;
        let id = resource_id(id_token, "Id")?;
        self.expect(TokenKind::CloseParen, "`)`")?;

        let occurrence = next_occurrence(&mut self.declared, &id);
        debug!(%id, occurrence, control_type = %control_type.value, "declare control");

        self.controls.insert((id.clone(), occurrence), dialog.controls.len());
        dialog
            .controls
            .push(Control::new(control_type.value.clone(), id, occurrence));
        Ok(())
    }

    /// `begin_control_ex ( ... ) define_property(...)* end_control_ex ( )`
    pub(super) fn parse_definition(&mut self, dialog: &mut DialogResource) -> Result<(), ParseError> {
        // Resolve the control before consuming anything.
        let id_index = self.cursor.position() + CONTROL_ID_OFFSET;
        let id_token = self.cursor.at(id_index).map_err(|_| ParseError::UnexpectedEndOfInput {
            expected: "control id".to_owned(),
            location: self.cursor.end_location(),
        })?;
        let id = resource_id(id_token, "Id")?;
        let occurrence = next_occurrence(&mut self.defined, &id);
        let Some(&index) = self.controls.get(&(id.clone(), occurrence)) else {
            return Err(ParseError::LookupFailure {
                id,
                occurrence,
                location: id_token.location,
            });
        };
        debug!(%id, occurrence, "define control");

        self.expect_keyword("begin_control_ex")?;
        self.expect(TokenKind::OpenParen, "`(`")?;
        let slots = self.parse_slots(CONTROL_SLOTS)?;
        let labeled = self.parse_labeled_block("define_property")?;
        self.expect_empty_call("end_control_ex")?;

        let control = &mut dialog.controls[index];
        control.positional = slots.positional;
        control.serialized = slots.serialized;
        control.labeled = labeled;
        control.defined = true;
        Ok(())
    }
}
