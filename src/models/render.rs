//! Computed output of the view pipeline, consumed by the presentation layer.

use super::event::Event;
use super::partition::Partition;

/// Why a view came back with nothing to show. An explicit reason lets the
/// presentation layer distinguish "empty" from "never loaded".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyReason {
    NoCompletedEvents,
    NoEventsInPartition,
    NoEvents,
}

impl EmptyReason {
    pub fn message(&self) -> &'static str {
        match self {
            EmptyReason::NoCompletedEvents => "no completed events",
            EmptyReason::NoEventsInPartition => "no events in this partition",
            EmptyReason::NoEvents => "no events",
        }
    }
}

/// One section of a partition-grouped view. `partition` is None for the
/// "unclassified" bucket, which always renders last.
#[derive(Debug, Clone)]
pub struct Bucket {
    pub partition: Option<Partition>,
    pub events: Vec<Event>,
}

#[derive(Debug, Clone)]
pub enum RenderModel {
    Empty(EmptyReason),
    Flat(Vec<Event>),
    Grouped(Vec<Bucket>),
}

impl RenderModel {
    pub fn is_empty(&self) -> bool {
        matches!(self, RenderModel::Empty(_))
    }

    /// Total number of events across the model.
    pub fn len(&self) -> usize {
        match self {
            RenderModel::Empty(_) => 0,
            RenderModel::Flat(events) => events.len(),
            RenderModel::Grouped(buckets) => buckets.iter().map(|b| b.events.len()).sum(),
        }
    }
}
