//! Call-site capturing log macros.
//!
//! Every macro fills in the enclosing function name, `file!()` and `line!()`
//! itself. Two families exist:
//!
//! - `trace!` .. `fatal!` take [`format_args!`] syntax, checked at compile time.
//! - `tracef!` .. `fatalf!` take a `printf` format string and arguments that
//!   convert into [`Arg`](crate::printf::Arg), checked when the line is emitted.
//!
//! The unsuffixed forms write through the global emitter. [`log_to!`] and
//! [`logf_to!`] take an explicit [`Emitter`](crate::Emitter).

/// Name of the function this macro is expanded in, without its module path.
///
/// ```
/// fn load_textures() -> &'static str {
///     linelog::function_name!()
/// }
///
/// assert_eq!(load_textures(), "load_textures");
/// ```
#[macro_export]
macro_rules! function_name {
    () => {{
        fn __linelog_here() {}
        $crate::__private::enclosing_function($crate::__private::type_name_of(__linelog_here))
    }};
}

/// Emit a line at `severity` through `emitter`.
#[macro_export]
macro_rules! log_to {
    ($emitter:expr, $severity:expr, $($arg:tt)+) => {
        $crate::Emitter::emit(
            &$emitter,
            $severity,
            $crate::function_name!(),
            ::core::file!(),
            ::core::line!(),
            ::core::format_args!($($arg)+),
        )
    };
}

/// Emit a line at `severity` through the global emitter.
///
/// ```
/// use linelog::{log, Severity};
///
/// log!(Severity::Info, "Creating window {}x{} ...", 640, 480);
/// ```
#[macro_export]
macro_rules! log {
    ($severity:expr, $($arg:tt)+) => {
        $crate::log_to!(*$crate::global(), $severity, $($arg)+)
    };
}

/// Emit a trace level line.
///
/// ```
/// linelog::trace!("Initializing video subsystem ...");
/// ```
#[macro_export]
macro_rules! trace {
    ($($arg:tt)+) => { $crate::log!($crate::Severity::Trace, $($arg)+) };
}

/// Emit a debug level line.
#[macro_export]
macro_rules! debug {
    ($($arg:tt)+) => { $crate::log!($crate::Severity::Debug, $($arg)+) };
}

/// Emit an info level line.
#[macro_export]
macro_rules! info {
    ($($arg:tt)+) => { $crate::log!($crate::Severity::Info, $($arg)+) };
}

/// Emit a warn level line.
#[macro_export]
macro_rules! warn {
    ($($arg:tt)+) => { $crate::log!($crate::Severity::Warn, $($arg)+) };
}

/// Emit an error level line.
#[macro_export]
macro_rules! error {
    ($($arg:tt)+) => { $crate::log!($crate::Severity::Error, $($arg)+) };
}

/// Emit a fatal level line.
///
/// *Note*: `fatal!` only writes the line and does not terminate the process.
///
/// ```
/// linelog::fatal!("Exiting, renderer was not created.");
/// ```
#[macro_export]
macro_rules! fatal {
    ($($arg:tt)+) => { $crate::log!($crate::Severity::Fatal, $($arg)+) };
}

/// Emit a `printf`-style line through `emitter`.
///
/// A format string that does not match its arguments writes nothing and is
/// reported as a `tracing` warning.
#[macro_export]
macro_rules! logf_to {
    ($emitter:expr, $severity:expr, $format:expr $(, $arg:expr)* $(,)?) => {{
        let format: &str = $format;
        if let Err(error) = $crate::Emitter::emitf(
            &$emitter,
            $severity,
            $crate::function_name!(),
            ::core::file!(),
            ::core::line!(),
            format,
            &[$($crate::printf::Arg::from($arg)),*],
        ) {
            $crate::__private::report_rejected(&error, format);
        }
    }};
}

/// Emit a `printf`-style line through the global emitter.
///
/// ```
/// use linelog::{logf, Severity};
///
/// logf!(Severity::Error, "Unable to create renderer: %s", "Unsupported renderer flag.");
/// ```
#[macro_export]
macro_rules! logf {
    ($severity:expr, $($rest:tt)+) => {
        $crate::logf_to!(*$crate::global(), $severity, $($rest)+)
    };
}

/// Emit a trace level line using `printf` format string semantics.
#[macro_export]
macro_rules! tracef {
    ($($rest:tt)+) => { $crate::logf!($crate::Severity::Trace, $($rest)+) };
}

/// Emit a debug level line using `printf` format string semantics.
#[macro_export]
macro_rules! debugf {
    ($($rest:tt)+) => { $crate::logf!($crate::Severity::Debug, $($rest)+) };
}

/// Emit an info level line using `printf` format string semantics.
///
/// ```
/// linelog::infof!("Window created (%dx%d).", 640, 480);
/// ```
#[macro_export]
macro_rules! infof {
    ($($rest:tt)+) => { $crate::logf!($crate::Severity::Info, $($rest)+) };
}

/// Emit a warn level line using `printf` format string semantics.
#[macro_export]
macro_rules! warnf {
    ($($rest:tt)+) => { $crate::logf!($crate::Severity::Warn, $($rest)+) };
}

/// Emit an error level line using `printf` format string semantics.
#[macro_export]
macro_rules! errorf {
    ($($rest:tt)+) => { $crate::logf!($crate::Severity::Error, $($rest)+) };
}

/// Emit a fatal level line using `printf` format string semantics.
///
/// *Note*: `fatalf!` only writes the line and does not terminate the process.
#[macro_export]
macro_rules! fatalf {
    ($($rest:tt)+) => { $crate::logf!($crate::Severity::Fatal, $($rest)+) };
}
