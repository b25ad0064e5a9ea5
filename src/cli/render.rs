//! Terminal rendering of a computed view, shared by `list` and `watch`.
//! Everything here is presentation; the pipeline never reaches into it.

use crate::config::Config;
use crate::core::urgency;
use crate::models::event::Event;
use crate::models::partition::Partition;
use crate::models::render::{Bucket, RenderModel};
use crate::models::selection::{GroupingMode, Selection};
use crate::utils::colors::{GREY, RED, RESET, YELLOW, color_for_priority, paint_partition};
use crate::utils::formatting::{bold, truncate};
use crate::utils::table::Table;
use chrono::{DateTime, Local};

pub fn render_view(
    model: &RenderModel,
    selection: &Selection,
    partitions: &[Partition],
    cfg: &Config,
    now: DateTime<Local>,
    details: bool,
) -> String {
    let mut out = String::new();

    out.push_str(&bold(&format!(
        "📅 Events [view: {} | mode: {} | sort: {} {}]",
        selection.view.as_str(),
        selection.grouping.as_str(),
        selection.sort_key.as_str(),
        selection.sort_direction.arrow()
    )));
    out.push_str("\n\n");

    match model {
        RenderModel::Empty(reason) => {
            out.push_str(reason.message());
            out.push('\n');
        }
        RenderModel::Flat(events) => {
            if selection.grouping == GroupingMode::List {
                out.push_str(&render_compact(events, partitions, cfg, now, details));
            } else {
                out.push_str(&render_table(events, partitions, cfg, now, details));
            }
        }
        RenderModel::Grouped(buckets) => {
            for bucket in buckets {
                out.push_str(&render_bucket(bucket, partitions, cfg, now, details));
            }
        }
    }

    out
}

fn render_bucket(
    bucket: &Bucket,
    partitions: &[Partition],
    cfg: &Config,
    now: DateTime<Local>,
    details: bool,
) -> String {
    let mut out = String::new();

    let title = match &bucket.partition {
        Some(p) => paint_partition(&p.name, &p.color),
        None => "Unclassified".to_string(),
    };

    out.push_str(&cfg.separator_char.repeat(40));
    out.push('\n');
    out.push_str(&format!("{} ({} events)\n", title, bucket.events.len()));

    if bucket.events.is_empty() {
        out.push_str(&format!("{}no events{}\n\n", GREY, RESET));
    } else {
        out.push_str(&render_table(&bucket.events, partitions, cfg, now, details));
        out.push('\n');
    }

    out
}

fn render_table(
    events: &[Event],
    partitions: &[Partition],
    cfg: &Config,
    now: DateTime<Local>,
    details: bool,
) -> String {
    let mut headers = vec![" ", "ID", "Title", "Deadline", "Countdown", "Priority", "Partition"];
    if details {
        headers.push("Description");
    }
    if cfg.show_created || details {
        headers.push("Created");
    }

    let mut table = Table::new(&headers);

    for ev in events {
        let mut row = vec![
            marker(ev, now).to_string(),
            ev.id.to_string(),
            truncate(&ev.title, 32),
            ev.deadline.format(&cfg.datetime_format).to_string(),
            countdown_cell(ev, now),
            priority_cell(ev),
            partition_cell(ev, partitions),
        ];

        if details {
            row.push(truncate(ev.description.as_deref().unwrap_or(""), 40));
        }
        if cfg.show_created || details {
            row.push(ev.created.format(&cfg.datetime_format).to_string());
        }

        table.add_row(row);
    }

    table.render()
}

fn render_compact(
    events: &[Event],
    partitions: &[Partition],
    cfg: &Config,
    now: DateTime<Local>,
    details: bool,
) -> String {
    let mut out = String::new();

    for ev in events {
        let mark = marker(ev, now);
        let mark = if mark.is_empty() {
            "  ".to_string()
        } else {
            format!("{} ", mark)
        };

        out.push_str(&format!(
            "{}[{}] {} ({}, {}",
            mark,
            ev.id,
            ev.title,
            countdown_cell(ev, now),
            priority_cell(ev),
        ));

        let partition = partition_cell(ev, partitions);
        if !partition.is_empty() {
            out.push_str(&format!(", {}", partition));
        }
        out.push_str(")\n");

        if details {
            if let Some(desc) = &ev.description {
                for line in textwrap::wrap(desc, 72) {
                    out.push_str(&format!("      {}\n", line));
                }
            }
            out.push_str(&format!(
                "      {}created {}{}\n",
                GREY,
                ev.created.format(&cfg.datetime_format),
                RESET
            ));
        }
    }

    out
}

/// Status decoration: completed beats urgent; the urgency cue reuses the one
/// shared predicate from the pipeline.
fn marker(event: &Event, now: DateTime<Local>) -> &'static str {
    if event.completed {
        "✔"
    } else if urgency::is_urgent(event, now) {
        "⚠"
    } else {
        ""
    }
}

fn countdown_cell(event: &Event, now: DateTime<Local>) -> String {
    if event.completed {
        return format!("{}done{}", GREY, RESET);
    }

    let left = urgency::time_left(event.deadline, now);
    if left.is_expired() {
        return format!("{}expired{}", RED, RESET);
    }

    if urgency::is_urgent(event, now) {
        return format!("{}{}{}", YELLOW, left.render(), RESET);
    }

    left.render()
}

fn priority_cell(event: &Event) -> String {
    format!(
        "{}{}{}",
        color_for_priority(event.priority),
        event.priority.as_str(),
        RESET
    )
}

fn partition_cell(event: &Event, partitions: &[Partition]) -> String {
    event
        .partition_id
        .and_then(|pid| partitions.iter().find(|p| p.id == pid))
        .map(|p| paint_partition(&p.name, &p.color))
        .unwrap_or_default()
}
