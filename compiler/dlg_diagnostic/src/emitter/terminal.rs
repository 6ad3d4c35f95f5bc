//! Terminal Emitter
//!
//! Human-readable diagnostic output with optional ANSI color support.

use std::io::Write;

use crate::Diagnostic;

use super::DiagnosticEmitter;

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const BOLD: &str = "\x1b[1m";
    pub const RESET: &str = "\x1b[0m";
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Automatically detect based on terminal capabilities.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorMode {
    /// Resolve to a boolean; `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Terminal emitter with optional color support.
///
/// Locations carry no file name, so the emitter is created for one file and
/// prefixes every location with it.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
    file: String,
}

impl<W: Write> TerminalEmitter<W> {
    /// Create a new terminal emitter with explicit color mode.
    pub fn with_color_mode(
        writer: W,
        file: impl Into<String>,
        mode: ColorMode,
        is_tty: bool,
    ) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            file: file.into(),
        }
    }

    /// Consume the emitter and return the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        // Header: error[CODE]: message
        self.write_colored("error", colors::ERROR);
        let code = format!("[{}]", diagnostic.code);
        self.write_colored(&code, colors::BOLD);
        let _ = writeln!(self.writer, ": {}", diagnostic.message);

        for label in &diagnostic.labels {
            let _ = write!(self.writer, "  --> {}:{}: ", self.file, label.location);
            self.write_colored(&label.message, colors::ERROR);
            let _ = writeln!(self.writer);
        }

        for note in &diagnostic.notes {
            let _ = write!(self.writer, "  = ");
            self.write_colored("note", colors::BOLD);
            let _ = writeln!(self.writer, ": {note}");
        }

        let _ = writeln!(self.writer);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, failed_loads: usize) {
        if failed_loads == 0 {
            return;
        }
        self.write_colored("error", colors::ERROR);
        if failed_loads == 1 {
            let _ = writeln!(self.writer, ": 1 resource failed to load");
        } else {
            let _ = writeln!(self.writer, ": {failed_loads} resources failed to load");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorCode;
    use dlg_ir::Location;
    use pretty_assertions::assert_eq;

    fn render(diagnostic: &Diagnostic, colors: bool) -> String {
        let mode = if colors { ColorMode::Always } else { ColorMode::Never };
        let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), "main.dlg", mode, false);
        emitter.emit(diagnostic);
        emitter.flush();
        String::from_utf8_lossy(&emitter.into_inner()).into_owned()
    }

    #[test]
    fn test_plain_output() {
        let diag = Diagnostic::error(ErrorCode::E1001)
            .with_message("expected `)`, found `,`")
            .with_label(Location::new(12, 5), "expected `)`")
            .with_note("while parsing a control definition");

        assert_eq!(
            render(&diag, false),
            "error[E1001]: expected `)`, found `,`\n  \
             --> main.dlg:12:5: expected `)`\n  \
             = note: while parsing a control definition\n\n"
        );
    }

    #[test]
    fn test_colored_output_contains_escapes() {
        let diag = Diagnostic::error(ErrorCode::E1003)
            .with_message("no declaration for control `IDC_OK`")
            .with_label(Location::new(3, 1), "defined here");

        let output = render(&diag, true);
        assert!(output.contains(colors::ERROR));
        assert!(output.contains(colors::RESET));
        assert!(output.contains("main.dlg:3:1"));
    }

    #[test]
    fn test_summary() {
        let mut emitter =
            TerminalEmitter::with_color_mode(Vec::new(), "main.dlg", ColorMode::Never, false);
        emitter.emit_summary(0);
        emitter.emit_summary(2);
        let output = String::from_utf8_lossy(&emitter.into_inner()).into_owned();
        assert_eq!(output, "error: 2 resources failed to load\n");
    }

    #[test]
    fn test_color_mode_resolution() {
        assert!(ColorMode::Auto.should_use_colors(true));
        assert!(!ColorMode::Auto.should_use_colors(false));
        assert!(ColorMode::Always.should_use_colors(false));
        assert!(!ColorMode::Never.should_use_colors(true));
    }
}
