//! Diagnostic system for dialog resource errors.
//!
//! - Error codes for searchability
//! - Clear messages (what went wrong)
//! - Primary location (where it went wrong)
//! - Notes (what the parser was doing)
//!
//! Parse failures are fatal, so a load produces at most one diagnostic and
//! every diagnostic is an error.

mod diagnostic;
pub mod emitter;
mod error_code;

pub use diagnostic::{Diagnostic, Label};
pub use error_code::ErrorCode;
