//! ANSI colour policy.
//!
//! Colouring is a pure function of the severity and the [`LogConfig`]: it
//! decides which segments of a line get wrapped, never how the line is laid
//! out.

use linelog_config::LogConfig;

use crate::severity::Severity;

pub const TRACE: &str = "\x1b[37m";
pub const DEBUG: &str = "\x1b[36m";
pub const INFO: &str = "\x1b[32m";
pub const WARN: &str = "\x1b[35m";
pub const ERROR: &str = "\x1b[33m";
pub const FATAL: &str = "\x1b[31m";
pub const RESET: &str = "\x1b[0m";

/// Foreground escape for `severity`.
pub const fn escape(severity: Severity) -> &'static str {
    match severity {
        Severity::Trace => TRACE,
        Severity::Debug => DEBUG,
        Severity::Info => INFO,
        Severity::Warn => WARN,
        Severity::Error => ERROR,
        Severity::Fatal => FATAL,
    }
}

/// Which segments of one line are coloured, and with what.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decoration {
    /// No escapes at all.
    Plain,
    /// Only the level label is wrapped.
    Label(&'static str),
    /// Label and locator share one wrap, the message gets a second one.
    Line(&'static str),
}

impl Decoration {
    /// Resolves the decoration for `severity` under `config`.
    pub const fn resolve(severity: Severity, config: &LogConfig) -> Self {
        if !config.colored_logs {
            return Decoration::Plain;
        }
        let color = escape(severity);
        if config.highlights() && severity.is_alarming() {
            Decoration::Line(color)
        } else {
            Decoration::Label(color)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_color_is_plain_for_every_policy() {
        let configs = [
            LogConfig::plain(),
            LogConfig {
                colored_logs: false,
                highlight_warn_error_fatal: true,
            },
        ];
        for config in configs {
            for severity in Severity::ALL {
                assert_eq!(Decoration::resolve(severity, &config), Decoration::Plain);
            }
        }
    }

    #[test]
    fn highlight_only_touches_alarming_levels() {
        let config = LogConfig::colored(true);
        assert_eq!(
            Decoration::resolve(Severity::Info, &config),
            Decoration::Label(INFO)
        );
        assert_eq!(
            Decoration::resolve(Severity::Warn, &config),
            Decoration::Line(WARN)
        );
        assert_eq!(
            Decoration::resolve(Severity::Fatal, &config),
            Decoration::Line(FATAL)
        );
    }

    #[test]
    fn label_only_without_highlight() {
        let config = LogConfig::colored(false);
        for severity in Severity::ALL {
            assert_eq!(
                Decoration::resolve(severity, &config),
                Decoration::Label(escape(severity))
            );
        }
    }

    #[test]
    fn line_decoration_follows_effective_highlight() {
        let configs = [
            LogConfig::plain(),
            LogConfig::colored(false),
            LogConfig::colored(true),
            LogConfig {
                colored_logs: false,
                highlight_warn_error_fatal: true,
            },
        ];
        for config in configs {
            for severity in Severity::ALL {
                let line = matches!(Decoration::resolve(severity, &config), Decoration::Line(_));
                assert_eq!(line, config.highlights() && severity.is_alarming());
            }
        }
    }

    #[test]
    fn unknown_raw_level_uses_fatal_color() {
        assert_eq!(escape(Severity::from_raw(42)), FATAL);
    }
}
