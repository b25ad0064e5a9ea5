use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::complete::CompleteLogic;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::date;

/// Toggle an event between open and completed.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Done { id } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        let mut state = queries::load_state(&mut pool)?;

        let event = CompleteLogic::toggle(&mut pool, &mut state, *id, date::now())?;

        if event.completed {
            success(format!("Event #{} '{}' completed", event.id, event.title));
        } else {
            success(format!("Event #{} '{}' reopened", event.id, event.title));
        }
    }

    Ok(())
}
