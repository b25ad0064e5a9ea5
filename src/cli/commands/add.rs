use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::{AddLogic, EventDraft};
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::date;

/// Create a new event.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        title,
        deadline,
        priority,
        description,
        urgent_hours,
        partition,
    } = cmd
    {
        let now = date::now();

        //
        // 1. Parse deadline (mandatory)
        //
        let deadline = date::parse_deadline(deadline, now)?;

        //
        // 2. Open store, load collections
        //
        let mut pool = DbPool::new(&cfg.database)?;
        let mut state = queries::load_state(&mut pool)?;

        //
        // 3. Execute logic
        //
        let draft = EventDraft {
            title: title.clone(),
            deadline,
            priority: *priority,
            description: description.clone(),
            urgent_hours: *urgent_hours,
            partition_id: *partition,
        };

        let event = AddLogic::apply(&mut pool, &mut state, cfg, draft, now)?;

        success(format!(
            "Event #{} '{}' created (deadline {})",
            event.id,
            event.title,
            event.deadline.format(&cfg.datetime_format)
        ));
    }

    Ok(())
}
