//! Step 3 — the sort comparator.

use crate::models::event::Event;
use crate::models::selection::{SortDirection, SortKey};

/// Sort in place. `sort_by` is stable, so events with an equal basis keep
/// their relative input order under both directions.
pub fn sort_events(events: &mut [Event], key: SortKey, direction: SortDirection) {
    events.sort_by(|a, b| {
        let ord = basis(a, key).cmp(&basis(b, key));
        match direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });
}

fn basis(event: &Event, key: SortKey) -> i64 {
    match key {
        SortKey::Deadline => event.deadline.timestamp_millis(),
        SortKey::Created => event.created.timestamp_millis(),
        SortKey::Priority => event.priority.weight(),
        SortKey::Status => i64::from(event.completed),
    }
}
