//! With nothing installed, the global emitter falls back to the build-time
//! defaults. Kept in its own binary because the global is process-wide.

use linelog::LogConfig;

#[test]
fn first_use_installs_build_defaults() {
    assert_eq!(linelog::global().config(), &LogConfig::default());

    linelog::trace!("Initializing Video Subsystem ...");
    assert!(std::ptr::eq(linelog::global(), linelog::global()));
    assert!(matches!(
        linelog::init(LogConfig::colored(true)),
        Err(linelog::Error::AlreadyInitialized)
    ));
    assert_eq!(linelog::global().config(), &LogConfig::default());
}
