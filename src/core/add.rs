use crate::config::Config;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::event::Event;
use crate::models::priority::Priority;
use crate::models::state::State;
use chrono::{DateTime, Local};

/// Fields collected from the CLI for a new event, before validation.
pub struct EventDraft {
    pub title: String,
    pub deadline: DateTime<Local>,
    pub priority: Priority,
    pub description: Option<String>,
    pub urgent_hours: Option<i64>,
    pub partition_id: Option<i64>,
}

pub struct AddLogic;

impl AddLogic {
    /// Validate the draft, append the event, persist the whole collection.
    /// Validation failures leave the collections untouched.
    pub fn apply(
        pool: &mut DbPool,
        state: &mut State,
        cfg: &Config,
        draft: EventDraft,
        now: DateTime<Local>,
    ) -> AppResult<Event> {
        //
        // 1. Validate title (mandatory, non-empty after trimming)
        //
        let title = draft.title.trim().to_string();
        if title.is_empty() {
            return Err(AppError::Validation(
                "event title must not be empty".to_string(),
            ));
        }

        //
        // 2. Urgency window (positive; config default when absent)
        //
        let urgent_hours = draft.urgent_hours.unwrap_or(cfg.default_urgent_hours);
        if urgent_hours <= 0 {
            return Err(AppError::Validation(format!(
                "urgent hours must be a positive number of hours, got {}",
                urgent_hours
            )));
        }

        //
        // 3. Partition reference must exist
        //
        if let Some(pid) = draft.partition_id
            && state.partition(pid).is_none()
        {
            return Err(AppError::PartitionNotFound(pid));
        }

        //
        // 4. Build and append the event
        //
        let id = state.next_event_id(now.timestamp_millis());
        let description = draft.description.filter(|d| !d.trim().is_empty());

        let event = Event::new(
            id,
            title,
            draft.deadline,
            draft.priority,
            description,
            urgent_hours,
            draft.partition_id,
            now,
        );

        state.push_event(event.clone());

        //
        // 5. Persist the whole collection before returning
        //
        queries::save_events(pool, state.events())?;

        ttlog(
            &pool.conn,
            "add",
            &id.to_string(),
            &format!("Created event '{}'", event.title),
        )?;

        Ok(event)
    }
}
