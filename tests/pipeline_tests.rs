//! Library-level tests of the view pipeline with an injected clock.

use chrono::{DateTime, Duration, Local, TimeZone};
use rdeadliner::core::pipeline::{Pipeline, filter, group, sort};
use rdeadliner::core::urgency;
use rdeadliner::models::event::Event;
use rdeadliner::models::partition::Partition;
use rdeadliner::models::priority::Priority;
use rdeadliner::models::render::{EmptyReason, RenderModel};
use rdeadliner::models::selection::{
    GroupingMode, Selection, SortDirection, SortKey, ViewFilter,
};

fn t0() -> DateTime<Local> {
    Local.with_ymd_and_hms(2026, 3, 10, 12, 0, 0).unwrap()
}

fn event(id: i64, deadline_offset_hours: i64) -> Event {
    Event {
        id,
        title: format!("event-{}", id),
        deadline: t0() + Duration::hours(deadline_offset_hours),
        priority: Priority::Medium,
        description: None,
        urgent_hours: 24,
        partition_id: None,
        created: t0() - Duration::days(1),
        completed: false,
        completed_at: None,
    }
}

fn partition(id: i64, name: &str) -> Partition {
    Partition::new(id, name.to_string(), "#336699".to_string(), t0())
}

fn selection(view: ViewFilter) -> Selection {
    Selection {
        view,
        ..Selection::default()
    }
}

fn flat_ids(model: &RenderModel) -> Vec<i64> {
    match model {
        RenderModel::Flat(events) => events.iter().map(|e| e.id).collect(),
        other => panic!("expected a flat model, got {:?}", other),
    }
}

// ---------------------------------------------------------------------------
// View filter
// ---------------------------------------------------------------------------

#[test]
fn all_view_returns_exactly_the_open_events() {
    let mut done = event(1, 5);
    done.set_completed(true, t0());

    // insertion order deliberately scrambled
    let events = vec![event(3, 50), done, event(2, 10)];

    let model = Pipeline::compute_view(&events, &[], &selection(ViewFilter::All), t0());
    assert_eq!(flat_ids(&model), vec![2, 3]); // sorted by deadline, no completed
}

#[test]
fn history_view_returns_exactly_the_completed_events() {
    let mut done = event(1, 5);
    done.set_completed(true, t0());
    let events = vec![event(2, 10), done, event(3, 50)];

    let model = Pipeline::compute_view(&events, &[], &selection(ViewFilter::History), t0());
    assert_eq!(flat_ids(&model), vec![1]);
}

#[test]
fn all_view_with_active_partition_filters_by_id() {
    let mut filed = event(1, 5);
    filed.partition_id = Some(77);
    let events = vec![filed, event(2, 6)];

    let sel = Selection {
        view: ViewFilter::All,
        active_partition: Some(77),
        ..Selection::default()
    };

    let model = Pipeline::compute_view(&events, &[partition(77, "w")], &sel, t0());
    assert_eq!(flat_ids(&model), vec![1]);
}

#[test]
fn urgent_view_keeps_the_23h_event_and_drops_the_25h_event() {
    let events = vec![event(1, 23), event(2, 25)];

    let model = Pipeline::compute_view(&events, &[], &selection(ViewFilter::Urgent), t0());
    assert_eq!(flat_ids(&model), vec![1]);
}

#[test]
fn expired_events_are_not_urgent() {
    let mut expired = event(1, 0);
    expired.deadline = t0() - Duration::seconds(1);

    assert!(!urgency::is_urgent(&expired, t0()));
    assert_eq!(
        urgency::time_left(expired.deadline, t0()).render(),
        "expired"
    );

    let model = Pipeline::compute_view(&[expired], &[], &selection(ViewFilter::Urgent), t0());
    assert!(matches!(model, RenderModel::Empty(EmptyReason::NoEvents)));
}

#[test]
fn urgency_respects_the_per_event_window() {
    let mut wide = event(1, 40);
    wide.urgent_hours = 48;
    assert!(urgency::is_urgent(&wide, t0()));

    let narrow = event(2, 40); // default 24h window
    assert!(!urgency::is_urgent(&narrow, t0()));
}

#[test]
fn completed_events_are_never_urgent() {
    let mut done = event(1, 1);
    done.set_completed(true, t0());
    assert!(!urgency::is_urgent(&done, t0()));
}

#[test]
fn urgent_filter_and_decoration_share_one_predicate() {
    let events = vec![event(1, 23), event(2, 25)];
    let sel = selection(ViewFilter::Urgent);

    let filtered = filter::apply_view_filter(&events, &sel, t0());
    for ev in &events {
        let in_view = filtered.iter().any(|f| f.id == ev.id);
        assert_eq!(in_view, urgency::is_urgent(ev, t0()));
    }
}

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

#[test]
fn deadline_sort_follows_direction() {
    let events = vec![event(1, 1), event(2, 2)];

    let mut asc = events.clone();
    sort::sort_events(&mut asc, SortKey::Deadline, SortDirection::Asc);
    assert_eq!(asc.iter().map(|e| e.id).collect::<Vec<_>>(), vec![1, 2]);

    let mut desc = events.clone();
    sort::sort_events(&mut desc, SortKey::Deadline, SortDirection::Desc);
    assert_eq!(desc.iter().map(|e| e.id).collect::<Vec<_>>(), vec![2, 1]);
}

#[test]
fn priority_sort_puts_high_first_when_descending() {
    let mut low = event(1, 1);
    low.priority = Priority::Low;
    let mut high = event(2, 2);
    high.priority = Priority::High;

    let mut events = vec![low, high];
    sort::sort_events(&mut events, SortKey::Priority, SortDirection::Desc);
    assert_eq!(events.iter().map(|e| e.id).collect::<Vec<_>>(), vec![2, 1]);
}

#[test]
fn status_sort_orders_open_before_completed_ascending() {
    let mut done = event(1, 1);
    done.set_completed(true, t0());
    let open = event(2, 2);

    let mut events = vec![done, open];
    sort::sort_events(&mut events, SortKey::Status, SortDirection::Asc);
    assert_eq!(events.iter().map(|e| e.id).collect::<Vec<_>>(), vec![2, 1]);
}

#[test]
fn sort_is_stable_for_equal_basis_values_in_both_directions() {
    // four events sharing one deadline, distinct ids in insertion order
    let shared: Vec<Event> = (1..=4)
        .map(|id| {
            let mut e = event(id, 10);
            e.deadline = t0() + Duration::hours(10);
            e
        })
        .collect();

    let mut asc = shared.clone();
    sort::sort_events(&mut asc, SortKey::Deadline, SortDirection::Asc);
    assert_eq!(asc.iter().map(|e| e.id).collect::<Vec<_>>(), vec![1, 2, 3, 4]);

    let mut desc = shared.clone();
    sort::sort_events(&mut desc, SortKey::Deadline, SortDirection::Desc);
    assert_eq!(
        desc.iter().map(|e| e.id).collect::<Vec<_>>(),
        vec![1, 2, 3, 4],
        "ties keep input order under desc too"
    );
}

#[test]
fn created_sort_uses_the_created_timestamp() {
    let mut older = event(1, 5);
    older.created = t0() - Duration::days(3);
    let mut newer = event(2, 1);
    newer.created = t0() - Duration::days(1);

    let mut events = vec![newer.clone(), older.clone()];
    sort::sort_events(&mut events, SortKey::Created, SortDirection::Asc);
    assert_eq!(events.iter().map(|e| e.id).collect::<Vec<_>>(), vec![1, 2]);
}

// ---------------------------------------------------------------------------
// Grouping
// ---------------------------------------------------------------------------

#[test]
fn partition_mode_always_yields_partition_count_plus_one_buckets() {
    let partitions = vec![partition(10, "a"), partition(20, "b"), partition(30, "c")];

    let mut filed = event(1, 5);
    filed.partition_id = Some(20);

    let buckets = group::group_by_partition(vec![filed, event(2, 6)], &partitions);

    assert_eq!(buckets.len(), partitions.len() + 1);

    // partition-collection order, unclassified last
    let keys: Vec<Option<i64>> = buckets
        .iter()
        .map(|b| b.partition.as_ref().map(|p| p.id))
        .collect();
    assert_eq!(keys, vec![Some(10), Some(20), Some(30), None]);

    assert_eq!(buckets[0].events.len(), 0); // empty bucket kept
    assert_eq!(buckets[1].events.len(), 1);
    assert_eq!(buckets[3].events.len(), 1);
}

#[test]
fn dangling_partition_reference_falls_back_to_unclassified() {
    let mut orphan = event(1, 5);
    orphan.partition_id = Some(999); // no such partition

    let buckets = group::group_by_partition(vec![orphan], &[partition(10, "a")]);

    assert_eq!(buckets.len(), 2);
    assert_eq!(buckets[0].events.len(), 0);
    assert_eq!(buckets[1].events.len(), 1, "orphan must not be dropped");
}

#[test]
fn grouped_view_sorts_within_each_bucket() {
    let partitions = vec![partition(10, "a")];

    let mut first = event(1, 9);
    first.partition_id = Some(10);
    let mut second = event(2, 3);
    second.partition_id = Some(10);

    let sel = Selection {
        grouping: GroupingMode::Partition,
        ..Selection::default()
    };

    let model = Pipeline::compute_view(&[first, second], &partitions, &sel, t0());
    match model {
        RenderModel::Grouped(buckets) => {
            let ids: Vec<i64> = buckets[0].events.iter().map(|e| e.id).collect();
            assert_eq!(ids, vec![2, 1]); // deadline asc within the bucket
        }
        other => panic!("expected grouped model, got {:?}", other),
    }
}

// ---------------------------------------------------------------------------
// Empty results
// ---------------------------------------------------------------------------

#[test]
fn empty_results_carry_a_context_specific_reason() {
    let model = Pipeline::compute_view(&[], &[], &selection(ViewFilter::All), t0());
    assert!(matches!(model, RenderModel::Empty(EmptyReason::NoEvents)));

    let model = Pipeline::compute_view(&[], &[], &selection(ViewFilter::History), t0());
    assert!(matches!(
        model,
        RenderModel::Empty(EmptyReason::NoCompletedEvents)
    ));

    let sel = Selection {
        active_partition: Some(5),
        ..Selection::default()
    };
    let model = Pipeline::compute_view(&[], &[partition(5, "p")], &sel, t0());
    assert!(matches!(
        model,
        RenderModel::Empty(EmptyReason::NoEventsInPartition)
    ));
}

#[test]
fn partition_mode_with_nothing_matching_is_empty_not_all_empty_buckets() {
    let sel = Selection {
        grouping: GroupingMode::Partition,
        ..Selection::default()
    };
    let model = Pipeline::compute_view(&[], &[partition(5, "p")], &sel, t0());
    assert!(model.is_empty());
}

// ---------------------------------------------------------------------------
// Completion invariant
// ---------------------------------------------------------------------------

#[test]
fn double_toggle_restores_the_event_except_completed_at() {
    let original = event(1, 5);
    let mut toggled = original.clone();

    toggled.set_completed(true, t0());
    assert!(toggled.completed);
    assert!(toggled.completed_at.is_some());

    toggled.set_completed(false, t0() + Duration::minutes(1));
    assert!(!toggled.completed);
    assert_eq!(toggled.completed_at, None, "stamp is cleared, not restored");

    assert_eq!(toggled.id, original.id);
    assert_eq!(toggled.title, original.title);
    assert_eq!(toggled.deadline, original.deadline);
    assert_eq!(toggled.created, original.created);
}

// ---------------------------------------------------------------------------
// Countdown formatting
// ---------------------------------------------------------------------------

#[test]
fn countdown_decomposes_by_integer_division() {
    let deadline = t0() + Duration::days(2) + Duration::hours(3) + Duration::minutes(4)
        + Duration::seconds(5);
    let left = urgency::time_left(deadline, t0());

    assert_eq!(left.days, 2);
    assert_eq!(left.hours, 3);
    assert_eq!(left.minutes, 4);
    assert_eq!(left.seconds, 5);
    assert!(!left.is_expired());
}

#[test]
fn countdown_render_formats() {
    // more than a day out: coarse days+hours
    let left = urgency::time_left(t0() + Duration::days(2) + Duration::hours(3), t0());
    assert_eq!(left.render(), "2d 3h");

    // under a day: H:MM:SS, zero-padded minutes and seconds
    let left = urgency::time_left(
        t0() + Duration::hours(5) + Duration::minutes(7) + Duration::seconds(9),
        t0(),
    );
    assert_eq!(left.render(), "5:07:09");

    // at or past the deadline
    let left = urgency::time_left(t0(), t0());
    assert_eq!(left.render(), "expired");
    let left = urgency::time_left(t0() - Duration::seconds(1), t0());
    assert_eq!(left.render(), "expired");
}

#[test]
fn countdown_format_ignores_the_urgency_window() {
    // urgent or not, the same remaining time renders identically
    let in_window = urgency::time_left(t0() + Duration::hours(2), t0());
    assert_eq!(in_window.render(), "2:00:00");
}
