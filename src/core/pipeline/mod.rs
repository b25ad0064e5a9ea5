//! The view pipeline: filter → group → sort → render model.
//!
//! A pure function of the collections, the selection and the clock; callers
//! pass `now` so every recompute (and every test) is deterministic.

pub mod filter;
pub mod group;
pub mod sort;

use crate::models::event::Event;
use crate::models::partition::Partition;
use crate::models::render::{EmptyReason, RenderModel};
use crate::models::selection::{GroupingMode, Selection, ViewFilter};
use chrono::{DateTime, Local};

pub struct Pipeline;

impl Pipeline {
    pub fn compute_view(
        events: &[Event],
        partitions: &[Partition],
        selection: &Selection,
        now: DateTime<Local>,
    ) -> RenderModel {
        // Step 1 — view filter
        let filtered = filter::apply_view_filter(events, selection, now);

        // Step 4 is checked before grouping: an empty filtered set short-circuits
        // to an explicit empty-with-reason result in every grouping mode.
        if filtered.is_empty() {
            return RenderModel::Empty(empty_reason(selection));
        }

        // Steps 2 + 3 — group, then sort within each sequence
        match selection.grouping {
            GroupingMode::Grid | GroupingMode::List => {
                let mut flat = filtered;
                sort::sort_events(&mut flat, selection.sort_key, selection.sort_direction);
                RenderModel::Flat(flat)
            }
            GroupingMode::Partition => {
                let mut buckets = group::group_by_partition(filtered, partitions);
                for bucket in &mut buckets {
                    sort::sort_events(
                        &mut bucket.events,
                        selection.sort_key,
                        selection.sort_direction,
                    );
                }
                RenderModel::Grouped(buckets)
            }
        }
    }
}

fn empty_reason(selection: &Selection) -> EmptyReason {
    if selection.view == ViewFilter::History {
        EmptyReason::NoCompletedEvents
    } else if selection.active_partition.is_some() {
        EmptyReason::NoEventsInPartition
    } else {
        EmptyReason::NoEvents
    }
}
