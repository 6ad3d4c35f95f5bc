//! Diagnostic Emitters
//!
//! Output formats for diagnostics. Only human-readable terminal output is
//! provided; callers embedding the parser in an editor consume `Diagnostic`
//! values directly.

mod terminal;

pub use terminal::{ColorMode, TerminalEmitter};

use crate::Diagnostic;

/// Trait for emitting diagnostics in various formats.
pub trait DiagnosticEmitter {
    /// Emit a single diagnostic.
    fn emit(&mut self, diagnostic: &Diagnostic);

    /// Flush any buffered output.
    fn flush(&mut self);

    /// Emit a summary line for a batch of failed loads.
    fn emit_summary(&mut self, failed_loads: usize);
}
