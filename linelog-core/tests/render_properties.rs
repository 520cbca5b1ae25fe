use linelog::color::{self, RESET};
use linelog::{LogConfig, LogRecord, Severity, WallTime};
use proptest::prelude::*;

fn render(severity: Severity, time: WallTime, message: &str, config: LogConfig) -> String {
    LogRecord {
        severity,
        function_name: "main",
        file_name: "main.rs",
        line_number: 7,
        timestamp: time,
        message: format_args!("{message}"),
    }
    .render(&config)
}

fn any_wall_time() -> impl Strategy<Value = WallTime> {
    (0u32..24, 0u32..60, 0u32..60).prop_map(|(h, m, s)| WallTime::new(h, m, s).unwrap())
}

fn any_severity() -> impl Strategy<Value = Severity> {
    prop::sample::select(Severity::ALL.to_vec())
}

fn any_config() -> impl Strategy<Value = LogConfig> {
    (any::<bool>(), any::<bool>()).prop_map(|(colored_logs, highlight_warn_error_fatal)| {
        LogConfig {
            colored_logs,
            highlight_warn_error_fatal,
        }
    })
}

proptest! {
    #[test]
    fn timestamp_has_no_leading_zeros(time in any_wall_time(), severity in any_severity()) {
        let line = render(severity, time, "m", LogConfig::plain());
        let expected = format!("[{}:{}:{}] ", time.hour(), time.minute(), time.second());
        prop_assert!(line.starts_with(&expected));
    }

    #[test]
    fn exactly_one_terminator(
        time in any_wall_time(),
        severity in any_severity(),
        config in any_config(),
        message in "[^\r\n]{0,40}",
    ) {
        let line = render(severity, time, &message, config);
        prop_assert!(line.ends_with('\n'));
        prop_assert_eq!(line.matches('\n').count(), 1);
        prop_assert!(line.contains(&message));
    }

    #[test]
    fn escapes_follow_policy(
        severity in any_severity(),
        config in any_config(),
        message in "[a-z ]{0,20}",
    ) {
        let line = render(severity, WallTime::new(1, 2, 3).unwrap(), &message, config);
        let escapes = line.matches('\x1b').count();
        if !config.colored_logs {
            prop_assert_eq!(escapes, 0);
        } else if config.highlight_warn_error_fatal && severity.is_alarming() {
            prop_assert_eq!(escapes, 4);
            let suffix = format!("{}{}{}\n", color::escape(severity), message, RESET);
            prop_assert!(line.ends_with(&suffix));
        } else {
            prop_assert_eq!(escapes, 2);
            let label = format!("{}{}{} ", color::escape(severity), severity.label(), RESET);
            prop_assert!(line.contains(&label));
        }
    }

    #[test]
    fn unknown_levels_render_as_fatal(raw in 6i64.., highlight in any::<bool>()) {
        let severity = Severity::from_raw(raw);
        let line = render(severity, WallTime::new(0, 0, 0).unwrap(), "x", LogConfig::colored(highlight));
        let expected = format!("[0:0:0] {}FATAL", color::FATAL);
        prop_assert!(line.starts_with(&expected));
    }
}
