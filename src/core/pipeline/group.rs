//! Step 2 — bucketing for the partition grouping mode.

use crate::models::event::Event;
use crate::models::partition::Partition;
use crate::models::render::Bucket;

/// One bucket per existing partition, in partition-collection order, plus the
/// "unclassified" bucket last. Partitions with zero matching events still get
/// their (empty) bucket, so the result always has `partitions.len() + 1`
/// entries. An event whose partition id matches no existing partition lands
/// in "unclassified" rather than being dropped.
pub fn group_by_partition(events: Vec<Event>, partitions: &[Partition]) -> Vec<Bucket> {
    let mut buckets: Vec<Bucket> = partitions
        .iter()
        .map(|p| Bucket {
            partition: Some(p.clone()),
            events: Vec::new(),
        })
        .collect();

    let mut unclassified = Bucket {
        partition: None,
        events: Vec::new(),
    };

    for event in events {
        // buckets[i] corresponds to partitions[i] by construction
        let idx = event
            .partition_id
            .and_then(|pid| partitions.iter().position(|p| p.id == pid));

        match idx {
            Some(i) => buckets[i].events.push(event),
            None => unclassified.events.push(event),
        }
    }

    buckets.push(unclassified);
    buckets
}
