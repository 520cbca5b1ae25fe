//! Wall-clock source for record timestamps.

use chrono::{Local, NaiveTime, Timelike};

/// Local time of day, second resolution.
///
/// Fields stay within 0-23 / 0-59 / 0-59; the only constructors are
/// [`WallTime::new`] and [`WallTime::of`].
///
/// ```compile_fail
/// let _ = linelog::WallTime { hour: 99, minute: 0, second: 0 };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallTime {
    hour: u32,
    minute: u32,
    second: u32,
}

impl WallTime {
    /// Builds a time of day. Returns `None` outside 0-23 / 0-59 / 0-59.
    pub fn new(hour: u32, minute: u32, second: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, second).map(|time| Self::of(&time))
    }

    /// Time-of-day fields of any chrono time value.
    pub fn of<T: Timelike>(time: &T) -> Self {
        Self {
            hour: time.hour(),
            minute: time.minute(),
            // chrono reports leap seconds through nanoseconds, so this stays below 60.
            second: time.second(),
        }
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    pub fn second(&self) -> u32 {
        self.second
    }
}

/// Anything that can tell the emitter what time it is.
pub trait Clock: Send + Sync {
    fn now(&self) -> WallTime;
}

/// The system's local clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn now(&self) -> WallTime {
        WallTime::of(&Local::now())
    }
}

/// A clock stopped at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub WallTime);

impl Clock for FixedClock {
    fn now(&self) -> WallTime {
        self.0
    }
}
