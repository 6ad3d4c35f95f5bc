//! Token cursor for navigating the token stream.
//!
//! A read cursor over a fixed token slice with bounded lookahead and a
//! single-step rewind. It never backtracks further than one token.

use dlg_ir::{Location, Token, TokenKind};
use tracing::trace;

use crate::ParseError;

/// Cursor over the tokens of one parse.
pub struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
    /// Cleared by `push_back`, set again by `next`.
    can_push_back: bool,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Cursor {
            tokens,
            pos: 0,
            can_push_back: false,
        }
    }

    #[inline]
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    /// Index of the next unconsumed token.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn has_next(&self) -> bool {
        self.pos < self.tokens.len()
    }

    /// Location used for errors raised at the end of input: the last token's,
    /// or a dummy location for an empty stream.
    pub fn end_location(&self) -> Location {
        self.tokens.last().map_or(Location::DUMMY, |t| t.location)
    }

    /// Consume and return the next token.
    pub fn next(&mut self) -> Result<&'a Token, ParseError> {
        self.next_expecting("another token")
    }

    /// Consume the next token; `expected` names what the caller wanted if
    /// input has run out.
    pub fn next_expecting(&mut self, expected: &str) -> Result<&'a Token, ParseError> {
        let tokens = self.tokens;
        let Some(token) = tokens.get(self.pos) else {
            return Err(self.make_eof_error(expected));
        };
        trace!(
            pos = self.pos,
            kind = %token.kind,
            location = %token.location,
            "advance"
        );
        self.pos += 1;
        self.can_push_back = true;
        Ok(token)
    }

    /// Un-consume the token returned by the last `next`.
    ///
    /// Only a single step is allowed: a second rewind without an intervening
    /// `next` is refused and returns `false`.
    pub fn push_back(&mut self) -> bool {
        if !self.can_push_back {
            return false;
        }
        self.pos -= 1;
        self.can_push_back = false;
        trace!(pos = self.pos, "push back");
        true
    }

    /// The token `n` positions after the next unconsumed one; `peek(0)` is
    /// what `next` would return.
    pub fn peek(&self, n: usize) -> Result<&'a Token, ParseError> {
        self.at(self.pos + n)
    }

    /// Absolute access by index, without consuming.
    pub fn at(&self, index: usize) -> Result<&'a Token, ParseError> {
        let tokens = self.tokens;
        tokens.get(index).ok_or_else(|| ParseError::OutOfRange {
            index,
            len: tokens.len(),
            location: self.end_location(),
        })
    }

    /// The next token if it exists, for lookahead checks.
    #[inline]
    pub fn lookahead(&self) -> Option<&'a Token> {
        let tokens = self.tokens;
        tokens.get(self.pos)
    }

    /// Check the kind of the next token.
    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.lookahead().is_some_and(|t| t.is(kind))
    }

    /// Check kind and literal text of the next token.
    #[inline]
    pub fn check_value(&self, kind: TokenKind, value: &str) -> bool {
        self.lookahead().is_some_and(|t| t.is_value(kind, value))
    }

    /// Consume comment tokens until something else (or the end) is next.
    pub fn skip_comments(&mut self) {
        while self.check(TokenKind::Comment) {
            self.pos += 1;
        }
        self.can_push_back = false;
    }

    /// Consume a token of `kind`; `expected` describes it for the error.
    #[inline]
    pub fn expect(&mut self, kind: TokenKind, expected: &str) -> Result<&'a Token, ParseError> {
        let token = self.next_expecting(expected)?;
        if token.is(kind) {
            Ok(token)
        } else {
            Err(ParseError::unexpected(expected, token))
        }
    }

    /// Consume a token of `kind` whose text is exactly `value`.
    #[inline]
    pub fn expect_value(&mut self, kind: TokenKind, value: &str) -> Result<&'a Token, ParseError> {
        let token = self.next_expecting(value)?;
        if token.is_value(kind, value) {
            Ok(token)
        } else {
            Err(self.make_expect_value_error(value, token))
        }
    }

    #[cold]
    #[inline(never)]
    fn make_expect_value_error(&self, value: &str, found: &Token) -> ParseError {
        ParseError::unexpected(format!("`{value}`"), found)
    }

    #[cold]
    #[inline(never)]
    fn make_eof_error(&self, expected: &str) -> ParseError {
        ParseError::UnexpectedEndOfInput {
            expected: expected.to_owned(),
            location: self.end_location(),
        }
    }
}

#[cfg(test)]
mod tests;
