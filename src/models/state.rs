//! Owned in-memory state container.
//!
//! Both collections live here and nowhere else; core logic receives a
//! `&mut State` and the db layer persists whole-collection snapshots taken
//! from it. No module keeps its own copy or reaches for globals.

use super::event::Event;
use super::partition::Partition;
use crate::errors::{AppError, AppResult};

#[derive(Debug, Default)]
pub struct State {
    events: Vec<Event>,
    partitions: Vec<Partition>,
}

impl State {
    pub fn new(events: Vec<Event>, partitions: Vec<Partition>) -> Self {
        Self { events, partitions }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn partitions(&self) -> &[Partition] {
        &self.partitions
    }

    pub fn event(&self, id: i64) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn event_mut(&mut self, id: i64) -> Option<&mut Event> {
        self.events.iter_mut().find(|e| e.id == id)
    }

    pub fn partition(&self, id: i64) -> Option<&Partition> {
        self.partitions.iter().find(|p| p.id == id)
    }

    pub fn partition_mut(&mut self, id: i64) -> Option<&mut Partition> {
        self.partitions.iter_mut().find(|p| p.id == id)
    }

    pub fn push_event(&mut self, event: Event) {
        self.events.push(event);
    }

    pub fn push_partition(&mut self, partition: Partition) {
        self.partitions.push(partition);
    }

    pub fn remove_event(&mut self, id: i64) -> AppResult<Event> {
        let idx = self
            .events
            .iter()
            .position(|e| e.id == id)
            .ok_or(AppError::EventNotFound(id))?;
        Ok(self.events.remove(idx))
    }

    /// Remove a partition and reassign every referencing event to
    /// "unclassified". Returns the removed partition and how many events were
    /// reassigned; afterwards no event references the deleted id.
    pub fn remove_partition(&mut self, id: i64) -> AppResult<(Partition, usize)> {
        let idx = self
            .partitions
            .iter()
            .position(|p| p.id == id)
            .ok_or(AppError::PartitionNotFound(id))?;

        let mut reassigned = 0;
        for ev in self.events.iter_mut() {
            if ev.partition_id == Some(id) {
                ev.partition_id = None;
                reassigned += 1;
            }
        }

        Ok((self.partitions.remove(idx), reassigned))
    }

    /// Id for a new event: the creation timestamp in ms, bumped past the
    /// current maximum if two creations land in the same millisecond.
    pub fn next_event_id(&self, now_ms: i64) -> i64 {
        unique_id(self.events.iter().map(|e| e.id), now_ms)
    }

    pub fn next_partition_id(&self, now_ms: i64) -> i64 {
        unique_id(self.partitions.iter().map(|p| p.id), now_ms)
    }
}

fn unique_id(existing: impl Iterator<Item = i64> + Clone, proposed: i64) -> i64 {
    if existing.clone().all(|id| id != proposed) {
        return proposed;
    }
    existing.max().unwrap_or(proposed) + 1
}
