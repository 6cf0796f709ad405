//! Remaining-Time Decomposition
//!
//! Splits the millisecond gap between a deadline and "now" into the
//! days/hours/minutes/seconds tuple the clock displays.

use chrono::{DateTime, TimeZone};

const MS_PER_SECOND: i64 = 1_000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Time left until a deadline, decomposed into display units.
///
/// For a future deadline: days unbounded, hours in 0..=23, minutes and
/// seconds in 0..=59. Once the deadline has passed the fields go negative
/// (floor division keeps counting down past zero) and the display shows
/// them as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeLeft {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl TimeLeft {
    /// Decompose `deadline - now` with floor semantics.
    pub fn until<Tz: TimeZone>(deadline: DateTime<Tz>, now: DateTime<Tz>) -> Self {
        let ms = deadline.signed_duration_since(now).num_milliseconds();
        Self {
            days: ms.div_euclid(MS_PER_DAY),
            hours: ms.div_euclid(MS_PER_HOUR) % 24,
            minutes: ms.div_euclid(MS_PER_MINUTE) % 60,
            seconds: ms.div_euclid(MS_PER_SECOND) % 60,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn tuple_for(ms: i64) -> TimeLeft {
        let now = Utc.with_ymd_and_hms(2027, 1, 1, 0, 0, 0).unwrap();
        TimeLeft::until(now + Duration::milliseconds(ms), now)
    }

    #[test]
    fn one_of_each_unit() {
        // 90,061,001 ms = 1d 1h 1m 1.001s
        let left = tuple_for(90_061_001);
        assert_eq!(
            left,
            TimeLeft {
                days: 1,
                hours: 1,
                minutes: 1,
                seconds: 1,
            }
        );
    }

    #[test_case(0, (0, 0, 0, 0); "deadline is now")]
    #[test_case(999, (0, 0, 0, 0); "sub second remainder floors away")]
    #[test_case(1_000, (0, 0, 0, 1); "exactly one second")]
    #[test_case(86_400_000, (1, 0, 0, 0); "exactly one day")]
    #[test_case(259_199_000, (2, 23, 59, 59); "one second short of three days")]
    #[test_case(31_536_000_000, (365, 0, 0, 0); "day count is unbounded")]
    fn decomposition(ms: i64, expected: (i64, i64, i64, i64)) {
        let left = tuple_for(ms);
        assert_eq!(
            (left.days, left.hours, left.minutes, left.seconds),
            expected
        );
    }

    #[test]
    fn past_deadline_goes_negative() {
        // Floor division, not truncation: 1,001 ms past the deadline reads
        // as -2 whole seconds.
        let left = tuple_for(-1_001);
        assert_eq!(
            left,
            TimeLeft {
                days: -1,
                hours: -1,
                minutes: -1,
                seconds: -2,
            }
        );
    }
}
