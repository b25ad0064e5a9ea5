use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::edit::{EditLogic, EventPatch};
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::date;

/// Update an existing event: supplied fields replace the old values, the rest
/// of the record survives unchanged.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        title,
        deadline,
        priority,
        description,
        urgent_hours,
        partition,
        no_partition,
    } = cmd
    {
        let now = date::now();

        let deadline = match deadline {
            Some(raw) => Some(date::parse_deadline(raw, now)?),
            None => None,
        };

        // --partition and --no-partition collapse into one tri-state field
        let partition: Option<Option<i64>> = if *no_partition {
            Some(None)
        } else {
            (*partition).map(Some)
        };

        let patch = EventPatch {
            title: title.clone(),
            deadline,
            priority: *priority,
            description: description.clone(),
            urgent_hours: *urgent_hours,
            partition,
        };

        let mut pool = DbPool::new(&cfg.database)?;
        let mut state = queries::load_state(&mut pool)?;

        let event = EditLogic::apply(&mut pool, &mut state, *id, patch)?;

        success(format!("Event #{} '{}' updated", event.id, event.title));
    }

    Ok(())
}
