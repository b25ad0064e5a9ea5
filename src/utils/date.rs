//! Deadline parsing: absolute date-times in a few common shapes, bare dates
//! (end of day), and relative offsets like +30m / +4h / +2d.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Duration, Local, LocalResult, NaiveDate, NaiveDateTime, TimeZone};

pub fn now() -> DateTime<Local> {
    Local::now()
}

/// Parse a user-supplied deadline.
///
/// Accepted forms:
/// - `+Nm`, `+Nh`, `+Nd` relative to `now`
/// - `YYYY-MM-DD HH:MM[:SS]` (also with a `T` separator)
/// - `YYYY-MM-DD` (resolved to 23:59:59 of that day)
pub fn parse_deadline(input: &str, now: DateTime<Local>) -> AppResult<DateTime<Local>> {
    let s = input.trim();

    let re = regex::Regex::new(r"^\+(\d+)([mhd])$").unwrap();
    if let Some(caps) = re.captures(s) {
        let n: i64 = caps[1]
            .parse()
            .map_err(|_| AppError::InvalidDeadline(input.to_string()))?;
        let delta = match &caps[2] {
            "m" => Duration::minutes(n),
            "h" => Duration::hours(n),
            _ => Duration::days(n),
        };
        return Ok(now + delta);
    }

    let formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%dT%H:%M",
    ];

    for fmt in formats {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return local_datetime(naive).ok_or_else(|| AppError::InvalidDeadline(input.to_string()));
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        let naive = date.and_hms_opt(23, 59, 59).unwrap();
        return local_datetime(naive).ok_or_else(|| AppError::InvalidDeadline(input.to_string()));
    }

    Err(AppError::InvalidDeadline(input.to_string()))
}

/// Resolve a naive local timestamp; for DST-ambiguous times the earlier
/// instant wins, non-existent times are rejected.
fn local_datetime(naive: NaiveDateTime) -> Option<DateTime<Local>> {
    match Local.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Some(dt),
        LocalResult::Ambiguous(earliest, _) => Some(earliest),
        LocalResult::None => None,
    }
}
