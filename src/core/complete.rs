use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::event::Event;
use crate::models::state::State;
use chrono::{DateTime, Local};

pub struct CompleteLogic;

impl CompleteLogic {
    /// Flip the completion flag. Completing stamps `completedAt` with `now`;
    /// un-completing clears it, so a double toggle restores the event except
    /// for that field.
    pub fn toggle(
        pool: &mut DbPool,
        state: &mut State,
        id: i64,
        now: DateTime<Local>,
    ) -> AppResult<Event> {
        let Some(event) = state.event_mut(id) else {
            return Err(AppError::EventNotFound(id));
        };

        let completed = !event.completed;
        event.set_completed(completed, now);
        let updated = event.clone();

        queries::save_events(pool, state.events())?;

        ttlog(
            &pool.conn,
            if completed { "done" } else { "undone" },
            &id.to_string(),
            &format!(
                "Marked event '{}' as {}",
                updated.title,
                if completed { "completed" } else { "open" }
            ),
        )?;

        Ok(updated)
    }
}
