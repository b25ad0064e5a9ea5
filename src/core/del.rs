use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::event::Event;
use crate::models::state::State;

pub struct DeleteLogic;

impl DeleteLogic {
    pub fn apply(pool: &mut DbPool, state: &mut State, id: i64) -> AppResult<Event> {
        let removed = state.remove_event(id)?;

        queries::save_events(pool, state.events())?;

        ttlog(
            &pool.conn,
            "del",
            &id.to_string(),
            &format!("Deleted event '{}'", removed.title),
        )?;

        Ok(removed)
    }
}
