//! Remaining-time math: the urgency predicate and the countdown breakdown.

use crate::models::event::Event;
use chrono::{DateTime, Local};

pub const MS_PER_SECOND: i64 = 1_000;
pub const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
pub const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
pub const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Milliseconds until the deadline; negative once it has passed.
pub fn remaining_ms(deadline: DateTime<Local>, now: DateTime<Local>) -> i64 {
    deadline.signed_duration_since(now).num_milliseconds()
}

/// The one urgency predicate, used by both the urgent view filter and the
/// display decoration so the two can never diverge.
///
/// An event is urgent iff it is not completed and its remaining time is
/// within the urgency window but not yet expired (expired ≠ urgent).
pub fn is_urgent(event: &Event, now: DateTime<Local>) -> bool {
    if event.completed {
        return false;
    }
    let left = remaining_ms(event.deadline, now);
    left > 0 && left <= event.urgent_hours * MS_PER_HOUR
}

/// Countdown breakdown via integer division of the total remaining ms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeLeft {
    pub total_ms: i64,
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

pub fn time_left(deadline: DateTime<Local>, now: DateTime<Local>) -> TimeLeft {
    let total_ms = remaining_ms(deadline, now);

    TimeLeft {
        total_ms,
        days: total_ms / MS_PER_DAY,
        hours: (total_ms / MS_PER_HOUR) % 24,
        minutes: (total_ms / MS_PER_MINUTE) % 60,
        seconds: (total_ms / MS_PER_SECOND) % 60,
    }
}

impl TimeLeft {
    pub fn is_expired(&self) -> bool {
        self.total_ms <= 0
    }

    /// Countdown text: "expired" past the deadline, coarse days+hours while
    /// more than a day remains, H:MM:SS below that. The urgency window never
    /// changes the format, only the upstream decoration.
    pub fn render(&self) -> String {
        if self.is_expired() {
            return "expired".to_string();
        }

        if self.days > 0 {
            return format!("{}d {}h", self.days, self.hours);
        }

        format!("{}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}
