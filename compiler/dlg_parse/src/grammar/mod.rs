//! Dialog grammar.
//!
//! Recursive descent over a fixed sequence of phases: redirect detection,
//! includes, dialog body, control declarations and definitions, and the
//! optional layer block. The parser never backtracks more than one token.
//!
//! Comments are skipped at statement boundaries only. Inside a
//! parenthesized argument list a comment is a syntax error.

mod control;
mod dialog;
mod flags;
mod layers;
mod slots;

use dlg_ir::{Property, PropertyValue, ResourceId, Token, TokenKind};
use rustc_hash::FxHashMap;

use crate::cursor::Cursor;
use crate::value::coerce_any;
use crate::{ParseError, ParseOptions};

/// Parser state for one dialog file.
pub(crate) struct Parser<'a> {
    cursor: Cursor<'a>,
    options: ParseOptions,
    /// Next occurrence index per id, counted over declarations.
    declared: FxHashMap<ResourceId, u32>,
    /// Next occurrence index per id, counted over definitions.
    defined: FxHashMap<ResourceId, u32>,
    /// `(id, occurrence)` to index into the resource's control list.
    controls: FxHashMap<(ResourceId, u32), usize>,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(tokens: &'a [Token], options: &ParseOptions) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
            options: options.clone(),
            declared: FxHashMap::default(),
            defined: FxHashMap::default(),
            controls: FxHashMap::default(),
        }
    }

    // Cursor delegation

    #[inline]
    fn skip_comments(&mut self) {
        self.cursor.skip_comments();
    }

    #[inline]
    fn expect(&mut self, kind: TokenKind, expected: &str) -> Result<&'a Token, ParseError> {
        self.cursor.expect(kind, expected)
    }

    #[inline]
    fn expect_directive(&mut self, directive: &str) -> Result<&'a Token, ParseError> {
        self.cursor.expect_value(TokenKind::Directive, directive)
    }

    #[inline]
    fn expect_keyword(&mut self, keyword: &str) -> Result<&'a Token, ParseError> {
        self.cursor.expect_value(TokenKind::Keyword, keyword)
    }

    #[inline]
    fn check_keyword(&self, keyword: &str) -> bool {
        self.cursor.check_value(TokenKind::Keyword, keyword)
    }

    #[inline]
    fn check_directive(&self, directive: &str) -> bool {
        self.cursor.check_value(TokenKind::Directive, directive)
    }

    /// Skip comments, then parse `keyword ( )`.
    fn expect_empty_call(&mut self, keyword: &str) -> Result<(), ParseError> {
        self.skip_comments();
        self.expect_keyword(keyword)?;
        self.expect(TokenKind::OpenParen, "`(`")?;
        self.expect(TokenKind::CloseParen, "`)`")?;
        Ok(())
    }

    /// Parse `keyword ( label , value )` statements while `keyword` is next.
    fn parse_labeled_block(&mut self, keyword: &str) -> Result<Vec<Property>, ParseError> {
        let mut properties = Vec::new();
        loop {
            self.skip_comments();
            if !self.check_keyword(keyword) {
                return Ok(properties);
            }
            properties.push(self.parse_labeled(keyword)?);
        }
    }

    /// `keyword ( label , value )`
    fn parse_labeled(&mut self, keyword: &str) -> Result<Property, ParseError> {
        self.expect_keyword(keyword)?;
        self.expect(TokenKind::OpenParen, "`(`")?;
        let label = self.expect(TokenKind::Identifier, "property label")?;
        self.expect(TokenKind::Comma, "`,`")?;
        let value = self.parse_labeled_value(&label.value)?;
        self.expect(TokenKind::CloseParen, "`)`")?;
        Ok(Property::new(label.value.clone(), value))
    }

    /// A number, string, identifier, or flags chain. An identifier followed
    /// by `|` or a number starts a flags chain.
    fn parse_labeled_value(&mut self, label: &str) -> Result<PropertyValue, ParseError> {
        let token = self.cursor.next_expecting("property value")?;
        if token.is(TokenKind::Identifier)
            && (self.cursor.check(TokenKind::LogicalOr) || self.cursor.check(TokenKind::Number))
        {
            let rewound = self.cursor.push_back();
            debug_assert!(rewound, "rewind directly after next");
            return self.parse_flags(label).map(PropertyValue::Flags);
        }
        coerce_any(token)
    }
}
