//! Error codes for all parser diagnostics.
//!
//! Each error code is a unique identifier (e.g., `E1001`) with the first digit
//! indicating the category.

use std::fmt;

/// Error codes for all parser diagnostics.
///
/// Format: E#### where first digit indicates category:
/// - E1xxx: Dialog and string-table syntax errors
/// - E9xxx: Internal errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Parser Errors (E1xxx)
    /// Unexpected token
    E1001,
    /// Unexpected end of input
    E1002,
    /// Control definition without declaration
    E1003,
    /// Malformed serialized property block
    E1004,
    /// Unknown language macro
    E1005,
    /// Property value has the wrong type
    E1006,
    /// Invalid number literal
    E1007,

    // Internal Errors (E9xxx)
    /// Token lookahead past the end of input
    E9001,
}

impl ErrorCode {
    /// All codes, in numeric order.
    pub const ALL: [ErrorCode; 8] = [
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E1005,
        ErrorCode::E1006,
        ErrorCode::E1007,
        ErrorCode::E9001,
    ];

    /// Check if this is an internal error (E9xxx range).
    pub fn is_internal(&self) -> bool {
        self.as_str().starts_with("E9")
    }

    /// Get the numeric code as a string (e.g., "E1001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E1006 => "E1006",
            ErrorCode::E1007 => "E1007",
            ErrorCode::E9001 => "E9001",
        }
    }

    /// One-line description of the error class.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E1001 => "unexpected token",
            ErrorCode::E1002 => "unexpected end of input",
            ErrorCode::E1003 => "control definition without a matching declaration",
            ErrorCode::E1004 => "malformed serialized property block",
            ErrorCode::E1005 => "unknown language macro",
            ErrorCode::E1006 => "property value has the wrong type",
            ErrorCode::E1007 => "invalid number literal",
            ErrorCode::E9001 => "token lookahead past the end of input",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
