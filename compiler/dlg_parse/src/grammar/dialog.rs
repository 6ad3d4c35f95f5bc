//! Dialog file phases: redirect detection, includes, dialog body.

use std::path::Path;
use std::sync::OnceLock;

use dlg_ir::{DialogResource, Language, Locale, Redirect, Token, TokenKind};
use regex::Regex;
use smallvec::SmallVec;
use tracing::debug;

use super::slots::DIALOG_SLOTS;
use super::Parser;
use crate::{DialogOutcome, ParseError};

/// Significant tokens inspected before deciding whether a file is a redirect.
const REDIRECT_WINDOW: usize = 4;

static VERSION_PATTERN: OnceLock<Regex> = OnceLock::new();

#[allow(clippy::expect_used, reason = "the pattern is a literal")]
fn version_pattern() -> &'static Regex {
    VERSION_PATTERN.get_or_init(|| {
        Regex::new(r"(?i)\bversion\s*\[\s*(\d+(?:\.\d+)*)\s*\]").expect("version pattern compiles")
    })
}

/// Extract `x.y` from a comment containing `Version [x.y]`.
fn find_version(comment: &str) -> Option<&str> {
    version_pattern()
        .captures(comment)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str())
}

fn is_dialog_file(token: &Token) -> bool {
    token.is(TokenKind::String)
        && Path::new(&token.value)
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("dlg"))
}

impl<'a> Parser<'a> {
    /// Parse a whole dialog file.
    pub(crate) fn parse_dialog(mut self, locale: Locale) -> Result<DialogOutcome, ParseError> {
        if let Some(redirect) = self.detect_redirect() {
            debug!(file = redirect.target(), "redirect file");
            return Ok(DialogOutcome::Redirect(redirect));
        }

        let mut dialog = DialogResource::new(locale);
        self.parse_includes(&mut dialog)?;
        self.parse_body(&mut dialog)?;

        self.skip_comments();
        if self.check_directive("#if") {
            self.parse_layers(&mut dialog)?;
            self.skip_comments();
        }
        if let Some(token) = self.cursor.lookahead() {
            return Err(ParseError::unexpected("end of file", token));
        }

        debug!(
            controls = dialog.controls.len(),
            layers = dialog.layers.len(),
            "dialog parsed"
        );
        Ok(DialogOutcome::Definition(dialog))
    }

    /// Look at the first significant tokens without consuming any.
    ///
    /// `#include "x.dlg"` is a plain redirect;
    /// `#ifdef COND #include "x.dlg"` is a per-language one.
    fn detect_redirect(&self) -> Option<Redirect> {
        let mut window: SmallVec<[&Token; REDIRECT_WINDOW]> = SmallVec::new();
        let mut index = self.cursor.position();
        while window.len() < REDIRECT_WINDOW {
            let Ok(token) = self.cursor.at(index) else {
                break;
            };
            if !token.is(TokenKind::Comment) {
                window.push(token);
            }
            index += 1;
        }

        match window.as_slice() {
            [include, target, ..]
                if include.is_value(TokenKind::Directive, "#include") && is_dialog_file(target) =>
            {
                Some(Redirect::Direct {
                    target: target.value.clone(),
                })
            }
            [ifdef, condition, include, target]
                if ifdef.is_value(TokenKind::Directive, "#ifdef")
                    && condition.is(TokenKind::Identifier)
                    && include.is_value(TokenKind::Directive, "#include")
                    && is_dialog_file(target) =>
            {
                Some(Redirect::PerLanguage {
                    condition: condition.value.clone(),
                    target: target.value.clone(),
                })
            }
            _ => None,
        }
    }

    /// Header include, version comment, the three string-file includes and
    /// the `#else #error ... #endif` tail.
    fn parse_includes(&mut self, dialog: &mut DialogResource) -> Result<(), ParseError> {
        debug!("includes");
        self.skip_comments();
        self.expect_directive("#include")?;
        dialog.header = self.expect(TokenKind::String, "header file name")?.value.clone();

        while let Some(comment) = self.cursor.lookahead().filter(|t| t.is(TokenKind::Comment)) {
            self.cursor.next()?;
            if dialog.version.is_none() {
                dialog.version = find_version(&comment.value).map(str::to_owned);
            }
        }
        if dialog.version.is_none() && self.options.require_version {
            let expected = "comment with `Version [x.y]`";
            return Err(match self.cursor.lookahead() {
                Some(token) => ParseError::unexpected(expected, token),
                None => ParseError::UnexpectedEndOfInput {
                    expected: expected.to_owned(),
                    location: self.cursor.end_location(),
                },
            });
        }

        for index in 0..Language::COUNT {
            self.skip_comments();
            self.expect_directive(if index == 0 { "#ifdef" } else { "#elif" })?;
            let condition = self.expect(TokenKind::Identifier, "language macro")?;
            let language = Language::from_macro(&condition.value).ok_or_else(|| {
                ParseError::UnknownLanguageMacro {
                    name: condition.value.clone(),
                    location: condition.location,
                }
            })?;

            self.skip_comments();
            self.expect_directive("#include")?;
            let file = self.expect(TokenKind::String, "string file name")?;
            if dialog.string_files.contains_key(&language) {
                return Err(ParseError::unexpected(
                    "a language not yet included",
                    condition,
                ));
            }
            dialog.string_files.insert(language, file.value.clone());
        }

        self.skip_comments();
        self.expect_directive("#else")?;
        self.skip_comments();
        self.expect_directive("#error")?;
        loop {
            let token = self.cursor.next_expecting("`#endif`")?;
            if token.is_value(TokenKind::Directive, "#endif") {
                break;
            }
            if token.is(TokenKind::Directive) {
                return Err(ParseError::unexpected("`#endif`", token));
            }
        }

        debug!(
            header = %dialog.header,
            version = dialog.version.as_deref().unwrap_or("-"),
            "includes parsed"
        );
        Ok(())
    }

    /// `begin_dialog_definition_ex_ ( )` through `end_dialog_definition_ex_ ( )`.
    fn parse_body(&mut self, dialog: &mut DialogResource) -> Result<(), ParseError> {
        debug!("dialog body");
        self.expect_empty_call("begin_dialog_definition_ex_")?;
        self.skip_comments();
        self.expect(TokenKind::OpenParen, "`(` opening the dialog properties")?;
        let slots = self.parse_slots(DIALOG_SLOTS)?;
        dialog.properties = slots.positional;
        dialog.serialized = slots.serialized;

        self.expect_empty_call("begin_dialog_properties")?;
        dialog.labeled = self.parse_labeled_block("define_dialog_property")?;
        self.expect_empty_call("end_dialog_properties")?;

        loop {
            self.skip_comments();
            if !self.check_keyword("declare_control") {
                break;
            }
            self.parse_declaration(dialog)?;
        }

        self.expect_empty_call("begin_control_definitions")?;
        loop {
            self.skip_comments();
            if !self.check_keyword("begin_control_ex") {
                break;
            }
            self.parse_definition(dialog)?;
        }
        self.expect_empty_call("end_control_definitions")?;
        self.expect_empty_call("end_dialog_definition_ex_")?;
        Ok(())
    }
}
