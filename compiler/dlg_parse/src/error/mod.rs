//! Parse errors.
//!
//! Every failure is fatal: the first error aborts the parse and no partial
//! resource is returned. Each variant carries the location of the offending
//! token, or of the last token when input ran out.

use dlg_diagnostic::{Diagnostic, ErrorCode};
use dlg_ir::{Location, ResourceId, Token};

/// Error raised while parsing a dialog file, a string table or a serialized
/// property block.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("expected {expected}, found {found}")]
    UnexpectedToken {
        expected: String,
        found: String,
        location: Location,
    },

    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEndOfInput { expected: String, location: Location },

    #[error("no declaration for control `{id}` (occurrence {occurrence})")]
    LookupFailure {
        id: ResourceId,
        occurrence: u32,
        location: Location,
    },

    #[error("malformed serialized properties: {reason}")]
    Format { reason: String, location: Location },

    #[error("unknown language macro `{name}`")]
    UnknownLanguageMacro { name: String, location: Location },

    #[error("`{label}` expects {expected}, found {found}")]
    TypeMismatch {
        label: String,
        expected: String,
        found: String,
        location: Location,
    },

    #[error("invalid number literal `{text}`")]
    InvalidNumber { text: String, location: Location },

    #[error("token {index} is past the end of input ({len} tokens)")]
    OutOfRange {
        index: usize,
        len: usize,
        location: Location,
    },
}

impl ParseError {
    /// Build an `UnexpectedToken` error for `found`.
    #[cold]
    pub fn unexpected(expected: impl Into<String>, found: &Token) -> Self {
        ParseError::UnexpectedToken {
            expected: expected.into(),
            found: found.describe(),
            location: found.location,
        }
    }

    /// Build a `TypeMismatch` error for the token offered to slot `label`.
    #[cold]
    pub fn type_mismatch(label: &str, expected: impl Into<String>, found: &Token) -> Self {
        ParseError::TypeMismatch {
            label: label.to_owned(),
            expected: expected.into(),
            found: found.describe(),
            location: found.location,
        }
    }

    pub fn location(&self) -> Location {
        match self {
            ParseError::UnexpectedToken { location, .. }
            | ParseError::UnexpectedEndOfInput { location, .. }
            | ParseError::LookupFailure { location, .. }
            | ParseError::Format { location, .. }
            | ParseError::UnknownLanguageMacro { location, .. }
            | ParseError::TypeMismatch { location, .. }
            | ParseError::InvalidNumber { location, .. }
            | ParseError::OutOfRange { location, .. } => *location,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ParseError::UnexpectedToken { .. } => ErrorCode::E1001,
            ParseError::UnexpectedEndOfInput { .. } => ErrorCode::E1002,
            ParseError::LookupFailure { .. } => ErrorCode::E1003,
            ParseError::Format { .. } => ErrorCode::E1004,
            ParseError::UnknownLanguageMacro { .. } => ErrorCode::E1005,
            ParseError::TypeMismatch { .. } => ErrorCode::E1006,
            ParseError::InvalidNumber { .. } => ErrorCode::E1007,
            ParseError::OutOfRange { .. } => ErrorCode::E9001,
        }
    }

    /// Convert to a diagnostic for reporting.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let code = self.code();
        let diagnostic = Diagnostic::error(code)
            .with_message(self.to_string())
            .with_label(self.location(), code.description());
        let diagnostic = if code.is_internal() {
            diagnostic.with_note("this is a parser bug, please report it")
        } else {
            diagnostic
        };

        match self {
            ParseError::UnknownLanguageMacro { .. } => diagnostic.with_note(
                "expected one of LANGUAGE_ENGLISH, LANGUAGE_GERMAN, LANGUAGE_FRENCH",
            ),
            ParseError::LookupFailure { .. } => diagnostic
                .with_note("every `begin_control_ex` needs a matching `declare_control` before it"),
            _ => diagnostic,
        }
    }
}

#[cfg(test)]
mod tests;
