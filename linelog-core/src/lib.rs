//! # linelog
//!
//! Leveled logging that writes one line per call to standard error:
//!
//! ```text
//! [14:3:7] INFO  main:main.rs:12: Done.
//! ```
//!
//! Each line carries the local time of day, a five column severity label and
//! the call site (function, file, line). Optional ANSI colouring is chosen
//! once, through [`LogConfig`], and never per call.
//!
//! ```
//! linelog::info!("Creating renderer ...");
//! linelog::errorf!("Unable to create renderer: %s", "Unsupported renderer flag.");
//! ```
//!
//! ### Key Submodules:
//! - `severity`: the six levels and their labels
//! - `color`: escape codes and the per-line decoration policy
//! - `record`: rendering of a single line
//! - `emitter`: clocked, locked writing to the sink
//! - `printf`: runtime-checked `printf` formatting
//!
//! There is no filtering, buffering, routing or rotation.

#![warn(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod clock;
pub mod color;
pub mod emitter;
pub mod error;
mod macros;
pub mod printf;
pub mod record;
pub mod severity;

use once_cell::sync::OnceCell;

pub use clock::{Clock, FixedClock, LocalClock, WallTime};
pub use emitter::{Emitter, EmitterBuilder, MemorySink};
pub use error::Error;
pub use linelog_config::{ConfigError, LogConfig};
pub use record::LogRecord;
pub use severity::{ParseSeverityError, Severity};

pub mod prelude {
    pub use crate::emitter::*;
    pub use crate::printf::{Arg, FormatError};
    pub use crate::severity::*;
    pub use crate::LogConfig;
}

static GLOBAL: OnceCell<Emitter> = OnceCell::new();

/// Installs a global emitter on standard error with `config`.
pub fn init(config: LogConfig) -> Result<(), Error> {
    init_with(Emitter::new(config))
}

/// Installs `emitter` as the global emitter.
pub fn init_with(emitter: Emitter) -> Result<(), Error> {
    GLOBAL.set(emitter).map_err(|_| Error::AlreadyInitialized)
}

/// Loads [`LogConfig::load`] and installs the result globally.
pub fn init_from_env() -> Result<LogConfig, Error> {
    let config = LogConfig::load()?;
    init(config)?;
    Ok(config)
}

/// The global emitter. Falls back to the build-time defaults on first use
/// when nothing was installed.
pub fn global() -> &'static Emitter {
    GLOBAL.get_or_init(Emitter::default)
}

#[doc(hidden)]
pub mod __private {
    use crate::printf::FormatError;

    pub fn type_name_of<T>(_: T) -> &'static str {
        core::any::type_name::<T>()
    }

    /// Reduces the type path of a marker fn to the name of the function
    /// enclosing it.
    pub fn enclosing_function(path: &'static str) -> &'static str {
        let mut path = path.strip_suffix("::__linelog_here").unwrap_or(path);
        while let Some(outer) = path.strip_suffix("::{{closure}}") {
            path = outer;
        }
        path.rsplit("::").next().unwrap_or(path)
    }

    pub fn report_rejected(error: &FormatError, format: &str) {
        tracing::warn!(%error, format, "rejected printf-style log line");
    }

}
