use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::event::Event;
use crate::models::priority::Priority;
use crate::models::state::State;
use chrono::{DateTime, Local};

/// An update is a merge of new fields over the old record; absent fields
/// survive unchanged. The outer Option marks "field supplied at all", the
/// inner one (for the partition) distinguishes "move to partition" from
/// "clear the partition".
#[derive(Default)]
pub struct EventPatch {
    pub title: Option<String>,
    pub deadline: Option<DateTime<Local>>,
    pub priority: Option<Priority>,
    pub description: Option<String>,
    pub urgent_hours: Option<i64>,
    pub partition: Option<Option<i64>>,
}

impl EventPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.deadline.is_none()
            && self.priority.is_none()
            && self.description.is_none()
            && self.urgent_hours.is_none()
            && self.partition.is_none()
    }
}

pub struct EditLogic;

impl EditLogic {
    pub fn apply(
        pool: &mut DbPool,
        state: &mut State,
        id: i64,
        patch: EventPatch,
    ) -> AppResult<Event> {
        //
        // 1. Validate everything before touching the collection
        //
        if patch.is_empty() {
            return Err(AppError::Validation(
                "nothing to change: pass at least one field".to_string(),
            ));
        }

        if let Some(title) = &patch.title
            && title.trim().is_empty()
        {
            return Err(AppError::Validation(
                "event title must not be empty".to_string(),
            ));
        }

        if let Some(hours) = patch.urgent_hours
            && hours <= 0
        {
            return Err(AppError::Validation(format!(
                "urgent hours must be a positive number of hours, got {}",
                hours
            )));
        }

        if let Some(Some(pid)) = patch.partition
            && state.partition(pid).is_none()
        {
            return Err(AppError::PartitionNotFound(pid));
        }

        //
        // 2. Merge the patch over the record
        //
        let Some(event) = state.event_mut(id) else {
            return Err(AppError::EventNotFound(id));
        };

        if let Some(title) = patch.title {
            event.title = title.trim().to_string();
        }
        if let Some(deadline) = patch.deadline {
            event.deadline = deadline;
        }
        if let Some(priority) = patch.priority {
            event.priority = priority;
        }
        if let Some(description) = patch.description {
            let trimmed = description.trim().to_string();
            event.description = if trimmed.is_empty() {
                None
            } else {
                Some(trimmed)
            };
        }
        if let Some(hours) = patch.urgent_hours {
            event.urgent_hours = hours;
        }
        if let Some(partition) = patch.partition {
            event.partition_id = partition;
        }

        let updated = event.clone();

        //
        // 3. Persist
        //
        queries::save_events(pool, state.events())?;

        ttlog(
            &pool.conn,
            "edit",
            &id.to_string(),
            &format!("Updated event '{}'", updated.title),
        )?;

        Ok(updated)
    }
}
