//! Deadline Parsing & Validation
//!
//! Turns free-form user text into a local instant and enforces the
//! acceptance-time rule: a committed deadline must parse and must not be
//! in the past.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use thiserror::Error;

/// Why a submitted deadline was rejected. The `Display` strings are the
/// user-facing form messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeadlineError {
    #[error("That doesn't seem to be a valid date")]
    InvalidFormat,
    #[error("This date is in the past")]
    InPast,
}

/// Naive date-time formats, tried against the exact input.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
];

/// Bare date formats, resolved as local midnight. chrono parses unpadded
/// numbers, so `2027-1-1` matches `%Y-%m-%d`, and `%B` also accepts
/// abbreviated month names.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%B %d, %Y", "%d %B %Y"];

/// Parse deadline text into a local instant.
///
/// Accepts RFC 3339 instants, then the naive formats above. On WASM,
/// anything else is handed to the browser's own `Date.parse`, so whatever
/// the host accepts stays accepted.
pub fn parse_deadline(text: &str) -> Result<DateTime<Local>, DeadlineError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(DeadlineError::InvalidFormat);
    }

    if let Ok(instant) = DateTime::parse_from_rfc3339(text) {
        return Ok(instant.with_timezone(&Local));
    }

    for format in DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return resolve_local(naive);
        }
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            return resolve_local(date.and_time(NaiveTime::MIN));
        }
    }

    host_parse(text)
}

/// Validate deadline text against `now`.
///
/// An instant exactly equal to `now` is accepted; only strictly earlier
/// instants are rejected.
pub fn validate_deadline(text: &str, now: DateTime<Local>) -> Result<DateTime<Local>, DeadlineError> {
    let instant = parse_deadline(text)?;
    if instant < now {
        return Err(DeadlineError::InPast);
    }
    Ok(instant)
}

/// A naive local time must resolve to exactly one instant; DST gaps and
/// folds are rejected rather than guessed at.
fn resolve_local(naive: NaiveDateTime) -> Result<DateTime<Local>, DeadlineError> {
    Local
        .from_local_datetime(&naive)
        .single()
        .ok_or(DeadlineError::InvalidFormat)
}

#[cfg(target_arch = "wasm32")]
fn host_parse(text: &str) -> Result<DateTime<Local>, DeadlineError> {
    let millis = js_sys::Date::parse(text);
    if millis.is_nan() {
        return Err(DeadlineError::InvalidFormat);
    }
    Local
        .timestamp_millis_opt(millis as i64)
        .single()
        .ok_or(DeadlineError::InvalidFormat)
}

#[cfg(not(target_arch = "wasm32"))]
fn host_parse(_text: &str) -> Result<DateTime<Local>, DeadlineError> {
    Err(DeadlineError::InvalidFormat)
}
