//! One log line, from call site to rendered text.

use std::fmt::{self, Write as _};

use linelog_config::LogConfig;

use crate::clock::WallTime;
use crate::color::{Decoration, RESET};
use crate::severity::Severity;

/// Everything a single log line is made of. Lives for one emit call.
#[derive(Debug, Clone, Copy)]
pub struct LogRecord<'a> {
    pub severity: Severity,
    pub function_name: &'a str,
    pub file_name: &'a str,
    pub line_number: u32,
    pub timestamp: WallTime,
    pub message: fmt::Arguments<'a>,
}

impl LogRecord<'_> {
    /// Renders the record as one `\n`-terminated line.
    ///
    /// ```text
    /// [H:M:S] LEVEL function:file:line: message
    /// ```
    ///
    /// Time fields are not zero padded. Under a colour policy the label, or
    /// for highlighted levels the label, locator and message, are wrapped in
    /// the severity's escape followed by a reset.
    pub fn render(&self, config: &LogConfig) -> String {
        let mut line = String::with_capacity(64);
        self.render_into(&mut line, config);
        line
    }

    /// Appends the rendered line to `out`.
    pub fn render_into(&self, out: &mut String, config: &LogConfig) {
        let (hour, minute, second) = (
            self.timestamp.hour(),
            self.timestamp.minute(),
            self.timestamp.second(),
        );
        let label = self.severity.label();
        let (function, file, line, message) = (
            self.function_name,
            self.file_name,
            self.line_number,
            self.message,
        );

        let _ = write!(out, "[{hour}:{minute}:{second}] ");
        let _ = match Decoration::resolve(self.severity, config) {
            Decoration::Plain => {
                writeln!(out, "{label} {function}:{file}:{line}: {message}")
            }
            Decoration::Label(color) => {
                writeln!(
                    out,
                    "{color}{label}{RESET} {function}:{file}:{line}: {message}"
                )
            }
            Decoration::Line(color) => writeln!(
                out,
                "{color}{label} {function}:{file}:{line}: {RESET}{color}{message}{RESET}"
            ),
        };
    }
}
