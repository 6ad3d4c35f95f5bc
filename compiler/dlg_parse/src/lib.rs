//! Parser for dialog resource definitions and per-language string tables.
//!
//! Input is a token sequence produced by an external lexer. A dialog file
//! parses into either a complete [`DialogResource`] or a [`Redirect`] to
//! another dialog file; a string file parses into a [`StringMap`]. The first
//! error aborts the parse and nothing partial is returned.
//!
//! ```text
//! #include "resource.h"          // Version [1.2]
//! #ifdef LANGUAGE_ENGLISH
//! #include "main_en.str"
//! ...
//! begin_dialog_definition_ex_ ( )
//!     ( IDD_MAIN , "{[Border=1]}" , 0 , 0 , 200 , 100 , ... )
//! ...
//! end_dialog_definition_ex_ ( )
//! ```

mod cursor;
mod error;
mod grammar;
mod serialized;
mod strings;
mod value;

#[cfg(test)]
mod tests;

use std::sync::Once;

use dlg_ir::{DialogResource, Language, Locale, Redirect, StringMap, Token};
use tracing::debug_span;

pub use cursor::Cursor;
pub use error::ParseError;
pub use serialized::{decode_serialized, SerializedBlock, CAPTION_LABEL, CAPTION_MARKER};
pub use value::parse_number;

/// Parser settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseOptions {
    /// Fail when the header include is not followed by a
    /// `Version [x.y]` comment.
    pub require_version: bool,
    /// Reject flags properties given as a bare number with no flag names.
    pub strict_flags: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            require_version: true,
            strict_flags: false,
        }
    }
}

/// Result of parsing a dialog file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DialogOutcome {
    Definition(DialogResource),
    /// The file only includes another dialog file.
    Redirect(Redirect),
}

impl DialogOutcome {
    pub fn definition(&self) -> Option<&DialogResource> {
        match self {
            DialogOutcome::Definition(dialog) => Some(dialog),
            DialogOutcome::Redirect(_) => None,
        }
    }

    pub fn into_definition(self) -> Option<DialogResource> {
        match self {
            DialogOutcome::Definition(dialog) => Some(dialog),
            DialogOutcome::Redirect(_) => None,
        }
    }

    pub fn redirect(&self) -> Option<&Redirect> {
        match self {
            DialogOutcome::Redirect(redirect) => Some(redirect),
            DialogOutcome::Definition(_) => None,
        }
    }
}

/// Parse a dialog file with default options.
pub fn parse_dialog(tokens: &[Token], locale: Locale) -> Result<DialogOutcome, ParseError> {
    parse_dialog_with(tokens, locale, &ParseOptions::default())
}

/// Parse a dialog file.
pub fn parse_dialog_with(
    tokens: &[Token],
    locale: Locale,
    options: &ParseOptions,
) -> Result<DialogOutcome, ParseError> {
    let _span = debug_span!("parse_dialog", %locale, tokens = tokens.len()).entered();
    grammar::Parser::new(tokens, options).parse_dialog(locale)
}

/// Parse the string table of one language.
pub fn parse_strings(tokens: &[Token], language: Language) -> Result<StringMap, ParseError> {
    let _span = debug_span!("parse_strings", %language, tokens = tokens.len()).entered();
    strings::parse_table(tokens, language)
}

/// Parse the string table of one language into `map`. On error `map` is
/// left untouched.
pub fn parse_strings_into(
    map: &mut StringMap,
    tokens: &[Token],
    language: Language,
) -> Result<(), ParseError> {
    let table = parse_strings(tokens, language)?;
    map.merge(table);
    Ok(())
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing subscriber for debug output.
///
/// Call this at program start to enable tracing output.
/// Control verbosity with `RUST_LOG` environment variable:
/// - `RUST_LOG=dlg_parse=debug` - parse phases, declarations, definitions
/// - `RUST_LOG=dlg_parse=trace` - every consumed token
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}
