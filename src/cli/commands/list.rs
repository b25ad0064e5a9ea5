use crate::cli::parser::Commands;
use crate::cli::render;
use crate::config::Config;
use crate::core::pipeline::Pipeline;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::selection::Selection;
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        view,
        partition,
        mode,
        sort,
        direction,
        details,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;
        let state = queries::load_state(&mut pool)?;

        // an unknown partition id is a user error, not an empty view
        if let Some(pid) = partition
            && state.partition(*pid).is_none()
        {
            return Err(AppError::PartitionNotFound(*pid));
        }

        let selection = Selection {
            view: *view,
            active_partition: *partition,
            grouping: *mode,
            sort_key: *sort,
            sort_direction: *direction,
        };

        let now = date::now();
        let model = Pipeline::compute_view(state.events(), state.partitions(), &selection, now);

        print!(
            "{}",
            render::render_view(&model, &selection, state.partitions(), cfg, now, *details)
        );
    }

    Ok(())
}
