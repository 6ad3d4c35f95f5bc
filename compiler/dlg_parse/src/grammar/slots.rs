//! Positional slot tables.
//!
//! The positional argument lists of `begin_dialog_definition_ex_` and
//! `begin_control_ex` have a fixed length and order. Each slot names its
//! label and what it accepts; `parse_slots` walks a table and dispatches on
//! the slot kind.

use dlg_ir::{PhysicalType, Property, PropertyValue, Token, TokenKind};
use tracing::trace;

use super::Parser;
use crate::serialized::{decode, CAPTION_LABEL};
use crate::value::coerce;
use crate::ParseError;

/// Label of the positional entry holding a serialized block's raw text.
pub(crate) const SERIALIZED_LABEL: &str = "Properties";

#[derive(Copy, Clone, Debug)]
pub(crate) enum SlotKind {
    /// A single token of one of the permitted types.
    Value(&'static [PhysicalType]),
    /// A flags chain.
    Flags,
    /// A string holding a serialized block.
    Serialized,
    /// A caption identifier, or a serialized block string.
    CaptionOrSerialized,
}

#[derive(Copy, Clone, Debug)]
pub(crate) struct Slot {
    pub label: &'static str,
    pub kind: SlotKind,
}

const fn slot(label: &'static str, kind: SlotKind) -> Slot {
    Slot { label, kind }
}

const NUMBER: SlotKind = SlotKind::Value(&[PhysicalType::Number]);
const STRING: SlotKind = SlotKind::Value(&[PhysicalType::String]);
const IDENTIFIER: SlotKind = SlotKind::Value(&[PhysicalType::Identifier]);
const RESOURCE_ID: SlotKind = SlotKind::Value(&[PhysicalType::Identifier, PhysicalType::Number]);
const TEXT: SlotKind = SlotKind::Value(&[PhysicalType::Identifier, PhysicalType::String]);

/// `begin_dialog_definition_ex_ ( ) ( ... )`
pub(crate) const DIALOG_SLOTS: &[Slot] = &[
    slot("Id", RESOURCE_ID),
    slot(SERIALIZED_LABEL, SlotKind::Serialized),
    slot("Left", NUMBER),
    slot("Top", NUMBER),
    slot("Width", NUMBER),
    slot("Height", NUMBER),
    slot("Title", TEXT),
    slot("Class", STRING),
    slot("Style", SlotKind::Flags),
    slot("Font", STRING),
    slot("FontSize", NUMBER),
];

/// `begin_control_ex ( ... )`
pub(crate) const CONTROL_SLOTS: &[Slot] = &[
    slot("Type", IDENTIFIER),
    slot("Class", IDENTIFIER),
    slot("Id", RESOURCE_ID),
    slot(CAPTION_LABEL, SlotKind::CaptionOrSerialized),
    slot("Left", NUMBER),
    slot("Top", NUMBER),
    slot("Width", NUMBER),
    slot("Height", NUMBER),
    slot("Style", SlotKind::Flags),
    slot("ExStyle", SlotKind::Flags),
];

/// Distance from `begin_control_ex` to the id token:
/// `begin_control_ex ( Type , Class , Id`.
pub(crate) const CONTROL_ID_OFFSET: usize = 6;

/// Properties collected from one positional list.
#[derive(Default)]
pub(crate) struct SlotValues {
    pub positional: Vec<Property>,
    pub serialized: Vec<Property>,
}

impl<'a> Parser<'a> {
    /// Parse the slots of `table` up to and including the closing `)`. The
    /// opening `(` has already been consumed.
    pub(super) fn parse_slots(&mut self, table: &[Slot]) -> Result<SlotValues, ParseError> {
        let mut values = SlotValues::default();
        for (index, slot) in table.iter().enumerate() {
            match slot.kind {
                SlotKind::Value(permitted) => self.parse_value_slot(slot.label, permitted, &mut values)?,
                SlotKind::Flags => self.parse_flags_slot(slot.label, &mut values)?,
                SlotKind::Serialized => {
                    let token = self.expect(TokenKind::String, "serialized property string")?;
                    self.parse_serialized_slot(token, &mut values)?;
                }
                SlotKind::CaptionOrSerialized => self.parse_caption_slot(slot.label, &mut values)?,
            }

            if index + 1 == table.len() {
                self.expect(TokenKind::CloseParen, "`)`")?;
            } else {
                self.expect(TokenKind::Comma, "`,`")?;
            }
        }
        Ok(values)
    }

    fn parse_value_slot(
        &mut self,
        label: &'static str,
        permitted: &[PhysicalType],
        values: &mut SlotValues,
    ) -> Result<(), ParseError> {
        let token = self.cursor.next_expecting(label)?;
        let value = coerce(token, label, permitted)?;
        trace!(label, %value, "positional slot");
        values.positional.push(Property::new(label, value));
        Ok(())
    }

    fn parse_flags_slot(
        &mut self,
        label: &'static str,
        values: &mut SlotValues,
    ) -> Result<(), ParseError> {
        let flags = self.parse_flags(label)?;
        values
            .positional
            .push(Property::new(label, PropertyValue::Flags(flags)));
        Ok(())
    }

    /// Decode a serialized block string. Its raw text is kept as a positional
    /// entry, the decoded pairs (and caption) become serialized properties.
    fn parse_serialized_slot(
        &mut self,
        token: &'a Token,
        values: &mut SlotValues,
    ) -> Result<(), ParseError> {
        let block = decode(&token.value, token.location)?;
        values.positional.push(Property::new(
            SERIALIZED_LABEL,
            PropertyValue::String(token.value.clone()),
        ));
        values.serialized.extend(block.properties);

        if block.caption_follows {
            let caption = self.cursor.next_expecting("caption")?;
            let value = coerce(
                caption,
                CAPTION_LABEL,
                &[PhysicalType::Identifier, PhysicalType::String],
            )?;
            values.serialized.push(Property::new(CAPTION_LABEL, value));
        }
        Ok(())
    }

    fn parse_caption_slot(
        &mut self,
        label: &'static str,
        values: &mut SlotValues,
    ) -> Result<(), ParseError> {
        let token = self.cursor.next_expecting(label)?;
        match token.kind {
            TokenKind::Identifier => {
                values.positional.push(Property::new(
                    label,
                    PropertyValue::Identifier(token.value.clone()),
                ));
                Ok(())
            }
            TokenKind::String => self.parse_serialized_slot(token, values),
            _ => Err(ParseError::type_mismatch(
                label,
                "identifier or serialized property string",
                token,
            )),
        }
    }
}
