//! Injectable Time Source
//!
//! Wall-clock access behind a trait, shared via Leptos context, so the
//! clock and the form read "now" through a handle tests can replace with
//! fixed or stepped instants.

use std::sync::Arc;

use chrono::{DateTime, Local};
use leptos::prelude::*;

/// Source of the current instant. Context values must be thread-safe, so
/// implementors are too.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}

/// The real wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Cloneable handle to the active clock.
#[derive(Clone)]
pub struct TimeSource(Arc<dyn Clock>);

impl TimeSource {
    pub fn system() -> Self {
        Self(Arc::new(SystemClock))
    }

    pub fn new(clock: impl Clock + 'static) -> Self {
        Self(Arc::new(clock))
    }

    pub fn now(&self) -> DateTime<Local> {
        self.0.now()
    }
}

/// Get the time source from context; outside any provider the system
/// clock is used.
pub fn use_time_source() -> TimeSource {
    use_context::<TimeSource>().unwrap_or_else(TimeSource::system)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicI32, Ordering};

    use chrono::{Duration, TimeZone};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::countdown::TimeLeft;

    /// Advances by one step per `now()` call, starting at `start`.
    struct SteppedClock {
        start: DateTime<Local>,
        step: Duration,
        calls: AtomicI32,
    }

    impl Clock for SteppedClock {
        fn now(&self) -> DateTime<Local> {
            let call = self.calls.fetch_add(1, Ordering::Relaxed);
            self.start + self.step * call
        }
    }

    #[test]
    fn recomputation_happens_only_per_tick() {
        let start = Local.with_ymd_and_hms(2027, 1, 1, 12, 0, 0).unwrap();
        let time = TimeSource::new(SteppedClock {
            start,
            step: Duration::seconds(1),
            calls: AtomicI32::new(0),
        });
        let deadline = start + Duration::days(1);

        let first = TimeLeft::until(deadline, time.now());
        let second = TimeLeft::until(deadline, time.now());

        // Each tick sees the stepped instant; the tuple computed before it
        // is a plain value no background activity can rewrite. After the
        // interval is dropped nothing calls `until` again, so the display
        // state stays exactly where the last tick left it.
        assert_eq!(
            first,
            TimeLeft {
                days: 1,
                hours: 0,
                minutes: 0,
                seconds: 0,
            }
        );
        assert_eq!(
            second,
            TimeLeft {
                days: 0,
                hours: 23,
                minutes: 59,
                seconds: 59,
            }
        );
    }
}
