//! Step 1 — the mutually exclusive view filter.

use crate::core::urgency;
use crate::models::event::Event;
use crate::models::selection::{Selection, ViewFilter};
use chrono::{DateTime, Local};

/// Keep the events the active view shows, preserving input order.
pub fn apply_view_filter(
    events: &[Event],
    selection: &Selection,
    now: DateTime<Local>,
) -> Vec<Event> {
    events
        .iter()
        .filter(|e| matches_view(e, selection, now))
        .cloned()
        .collect()
}

/// History is the only view that shows completed events; every other view
/// excludes them with no way to opt in (preserved upstream behavior).
pub fn matches_view(event: &Event, selection: &Selection, now: DateTime<Local>) -> bool {
    match selection.view {
        ViewFilter::History => event.completed,
        ViewFilter::Urgent => urgency::is_urgent(event, now),
        ViewFilter::All => {
            if event.completed {
                return false;
            }
            match selection.active_partition {
                Some(pid) => event.partition_id == Some(pid),
                None => true,
            }
        }
    }
}
