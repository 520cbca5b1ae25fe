//! The emitter: stamps, renders and writes one record per call.

use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;

use linelog_config::LogConfig;
use parking_lot::Mutex;
use tracing::debug;

use crate::clock::{Clock, LocalClock};
use crate::printf::{self, Arg, FormatError};
use crate::record::LogRecord;
use crate::severity::Severity;

/// Writes call-site tagged log lines to a sink, standard error by default.
///
/// The colour policy is fixed at construction. Each call renders its whole
/// line first and writes it with a single `write_all` under the sink lock,
/// so lines from concurrent callers never interleave. Write failures are
/// dropped.
pub struct Emitter {
    config: LogConfig,
    clock: Box<dyn Clock>,
    sink: Mutex<Box<dyn Write + Send>>,
}

impl fmt::Debug for Emitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Emitter")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Default for Emitter {
    fn default() -> Self {
        Self::new(LogConfig::default())
    }
}

impl Emitter {
    /// Emitter on standard error with the local clock.
    pub fn new(config: LogConfig) -> Self {
        Self::builder().config(config).build()
    }

    pub fn builder() -> EmitterBuilder {
        EmitterBuilder::default()
    }

    pub fn config(&self) -> &LogConfig {
        &self.config
    }

    /// Writes one line for an already formatted message.
    pub fn emit(
        &self,
        severity: Severity,
        function_name: &str,
        file_name: &str,
        line_number: u32,
        message: fmt::Arguments<'_>,
    ) {
        self.write_record(&LogRecord {
            severity,
            function_name,
            file_name,
            line_number,
            timestamp: self.clock.now(),
            message,
        });
    }

    /// Writes one line for a `printf`-style format string.
    ///
    /// Nothing is written when `format` and `args` disagree.
    pub fn emitf(
        &self,
        severity: Severity,
        function_name: &str,
        file_name: &str,
        line_number: u32,
        format: &str,
        args: &[Arg<'_>],
    ) -> Result<(), FormatError> {
        let message = printf::sprintf(format, args)?;
        self.emit(
            severity,
            function_name,
            file_name,
            line_number,
            format_args!("{message}"),
        );
        Ok(())
    }

    fn write_record(&self, record: &LogRecord<'_>) {
        let line = record.render(&self.config);
        let mut sink = self.sink.lock();
        let written = sink.write_all(line.as_bytes()).and_then(|()| sink.flush());
        if let Err(error) = written {
            debug!(%error, severity = ?record.severity, "dropped log line");
        }
    }
}

/// Builder for an [`Emitter`] with an injected clock or sink.
#[derive(Default)]
pub struct EmitterBuilder {
    config: LogConfig,
    clock: Option<Box<dyn Clock>>,
    sink: Option<Box<dyn Write + Send>>,
}

impl EmitterBuilder {
    pub fn config(mut self, config: LogConfig) -> Self {
        self.config = config;
        self
    }

    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Some(Box::new(clock));
        self
    }

    pub fn sink(mut self, sink: impl Write + Send + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    pub fn build(self) -> Emitter {
        Emitter {
            config: self.config,
            clock: self.clock.unwrap_or_else(|| Box::new(LocalClock)),
            sink: Mutex::new(self.sink.unwrap_or_else(|| Box::new(io::stderr()))),
        }
    }
}

/// In-memory sink whose clones share one buffer.
#[derive(Debug, Clone, Default)]
pub struct MemorySink(Arc<Mutex<Vec<u8>>>);

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock()).into_owned()
    }

    pub fn clear(&self) {
        self.0.lock().clear();
    }
}

impl Write for MemorySink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
