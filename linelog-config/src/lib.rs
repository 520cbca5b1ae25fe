//! # linelog configuration
//!
//! The two colour switches of the emitter as one immutable value.
//!
//! Defaults come from the `colored-logs` and `highlight-warn-error-fatal`
//! Cargo features, so a build picks its colour policy at compile time the
//! same way a preprocessor flag would. A single binary can still flip either
//! switch at startup through `config/linelog.yaml` or `LINELOG_*` variables.

#![warn(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};

mod error;

pub use error::ConfigError;

/// Base configuration file, relative to the working directory.
pub const CONFIG_FILE: &str = "config/linelog.yaml";

/// Prefix of the environment variables that override file settings.
pub const ENV_PREFIX: &str = "LINELOG_";

/// Colour policy of the emitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Wrap the level label in an ANSI colour escape.
    pub colored_logs: bool,

    /// With `colored_logs` on, WARN/ERROR/FATAL lines also colour the
    /// call-site locator and the message. No effect otherwise.
    pub highlight_warn_error_fatal: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            colored_logs: cfg!(feature = "colored-logs"),
            highlight_warn_error_fatal: cfg!(feature = "highlight-warn-error-fatal"),
        }
    }
}

impl LogConfig {
    /// Plain output, no escapes.
    pub const fn plain() -> Self {
        Self {
            colored_logs: false,
            highlight_warn_error_fatal: false,
        }
    }

    /// Coloured labels, optionally highlighting WARN/ERROR/FATAL lines.
    pub const fn colored(highlight_warn_error_fatal: bool) -> Self {
        Self {
            colored_logs: true,
            highlight_warn_error_fatal,
        }
    }

    /// Whether WARN/ERROR/FATAL lines are coloured past the label.
    pub const fn highlights(&self) -> bool {
        self.colored_logs && self.highlight_warn_error_fatal
    }

    /// Load configuration from the default file and environment.
    ///
    /// Hierarchy:
    /// 1. Build-time defaults (Cargo features).
    /// 2. `config/linelog.yaml`, skipped when missing.
    /// 3. `LINELOG_*` environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(LogConfig::default()));

        if Path::new(CONFIG_FILE).exists() {
            figment = figment.merge(Yaml::file(CONFIG_FILE));
        }

        figment
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()
            .map_err(ConfigError::from)
    }

    /// Load configuration from a specific YAML file, then the environment.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }

        Figment::from(Serialized::defaults(LogConfig::default()))
            .merge(Yaml::file(path))
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()
            .map_err(ConfigError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    fn write_config(jail: &Jail, contents: &str) -> figment::error::Result<()> {
        std::fs::create_dir_all(jail.directory().join("config")).map_err(|e| e.to_string())?;
        jail.create_file(CONFIG_FILE, contents)?;
        Ok(())
    }

    #[test]
    fn defaults_follow_build_features() {
        let config = LogConfig::default();
        assert_eq!(config.colored_logs, cfg!(feature = "colored-logs"));
        assert_eq!(
            config.highlight_warn_error_fatal,
            cfg!(feature = "highlight-warn-error-fatal")
        );
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        Jail::expect_with(|_jail| {
            let config = LogConfig::load().map_err(|e| e.to_string())?;
            assert_eq!(config, LogConfig::default());
            Ok(())
        });
    }

    #[test]
    fn file_then_environment_override() {
        Jail::expect_with(|jail| {
            write_config(
                jail,
                "colored_logs: true\nhighlight_warn_error_fatal: false\n",
            )?;
            let config = LogConfig::load().map_err(|e| e.to_string())?;
            assert_eq!(config, LogConfig::colored(false));

            jail.set_env("LINELOG_HIGHLIGHT_WARN_ERROR_FATAL", "true");
            let config = LogConfig::load().map_err(|e| e.to_string())?;
            assert_eq!(config, LogConfig::colored(true));
            Ok(())
        });
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        Jail::expect_with(|jail| {
            jail.create_file("only-color.yaml", "colored_logs: true\n")?;
            let config = LogConfig::load_from_path("only-color.yaml").map_err(|e| e.to_string())?;
            assert!(config.colored_logs);
            assert_eq!(
                config.highlight_warn_error_fatal,
                cfg!(feature = "highlight-warn-error-fatal")
            );
            Ok(())
        });
    }

    #[test]
    fn load_from_missing_path_is_an_error() {
        let err = LogConfig::load_from_path("does/not/exist.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }

    #[test]
    fn malformed_value_is_a_parsing_error() {
        Jail::expect_with(|jail| {
            jail.set_env("LINELOG_COLORED_LOGS", "sometimes");
            let err = LogConfig::load().unwrap_err();
            assert!(matches!(err, ConfigError::Parsing(_)));
            Ok(())
        });
    }

    #[test]
    fn highlight_requires_color() {
        let config = LogConfig {
            colored_logs: false,
            highlight_warn_error_fatal: true,
        };
        assert!(!config.highlights());
        assert!(LogConfig::colored(true).highlights());
        assert!(!LogConfig::colored(false).highlights());
    }
}
