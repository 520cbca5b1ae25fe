//! Log severities and their fixed-width labels.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Severity of a log line, ordered by increasing urgency.
///
/// Severities only select the label and colour of a line. Nothing is
/// filtered by severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Severity {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
    Fatal = 5,
}

/// Returned when a severity name is not one of the six known levels.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown severity: {0:?}")]
pub struct ParseSeverityError(pub String);

impl Severity {
    /// All severities in ascending order.
    pub const ALL: [Severity; 6] = [
        Severity::Trace,
        Severity::Debug,
        Severity::Info,
        Severity::Warn,
        Severity::Error,
        Severity::Fatal,
    ];

    /// Converts a raw numeric level. Values outside `0..=5` become `Fatal`.
    pub const fn from_raw(raw: i64) -> Self {
        match raw {
            0 => Severity::Trace,
            1 => Severity::Debug,
            2 => Severity::Info,
            3 => Severity::Warn,
            4 => Severity::Error,
            _ => Severity::Fatal,
        }
    }

    /// Five-column label. `INFO` and `WARN` carry a trailing space.
    pub const fn label(self) -> &'static str {
        match self {
            Severity::Trace => "TRACE",
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO ",
            Severity::Warn => "WARN ",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
        }
    }

    /// WARN, ERROR and FATAL, the levels the highlight switch applies to.
    pub const fn is_alarming(self) -> bool {
        matches!(self, Severity::Warn | Severity::Error | Severity::Fatal)
    }
}

impl From<u8> for Severity {
    fn from(raw: u8) -> Self {
        Severity::from_raw(raw as i64)
    }
}

impl From<i32> for Severity {
    fn from(raw: i32) -> Self {
        Severity::from_raw(raw as i64)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(Severity::Trace),
            "debug" => Ok(Severity::Debug),
            "info" => Ok(Severity::Info),
            "warn" | "warning" => Ok(Severity::Warn),
            "error" => Ok(Severity::Error),
            "fatal" => Ok(Severity::Fatal),
            _ => Err(ParseSeverityError(s.to_string())),
        }
    }
}
