// src/export/model.rs

use crate::models::event::Event;
use crate::models::state::State;
use serde::Serialize;

/// Flat projection of an event for export: references resolved to names,
/// dates rendered as text.
#[derive(Serialize, Clone, Debug)]
pub struct EventExport {
    pub id: i64,
    pub title: String,
    pub deadline: String,
    pub priority: String,
    pub partition: String,
    pub urgent_hours: i64,
    pub created: String,
    pub completed: bool,
    pub completed_at: String,
}

const DATETIME_FMT: &str = "%Y-%m-%d %H:%M";

impl EventExport {
    pub fn from_event(event: &Event, state: &State) -> Self {
        let partition = event
            .partition_id
            .and_then(|pid| state.partition(pid))
            .map(|p| p.name.clone())
            .unwrap_or_default();

        Self {
            id: event.id,
            title: event.title.clone(),
            deadline: event.deadline.format(DATETIME_FMT).to_string(),
            priority: event.priority.as_str().to_string(),
            partition,
            urgent_hours: event.urgent_hours,
            created: event.created.format(DATETIME_FMT).to_string(),
            completed: event.completed,
            completed_at: event
                .completed_at
                .map(|t| t.format(DATETIME_FMT).to_string())
                .unwrap_or_default(),
        }
    }
}

/// Header for CSV / JSON / XLSX
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "id",
        "title",
        "deadline",
        "priority",
        "partition",
        "urgent_hours",
        "created",
        "completed",
        "completed_at",
    ]
}

/// Event fields in header order, as display strings.
pub(crate) fn event_to_row(e: &EventExport) -> Vec<String> {
    vec![
        e.id.to_string(),
        e.title.clone(),
        e.deadline.clone(),
        e.priority.clone(),
        e.partition.clone(),
        e.urgent_hours.to_string(),
        e.created.clone(),
        e.completed.to_string(),
        e.completed_at.clone(),
    ]
}
