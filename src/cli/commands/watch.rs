use crate::cli::parser::Commands;
use crate::cli::render;
use crate::config::Config;
use crate::core::pipeline::Pipeline;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::selection::{Selection, ViewFilter};
use crate::utils::date;
use std::thread;
use std::time::Duration;

/// Live countdown view: one render per interval over the snapshot loaded at
/// startup. Only `now` changes between ticks, so each recompute is the same
/// pure pipeline call. While the history view is active the per-tick
/// recomputation is skipped: completed events have no countdown to refresh.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Watch {
        view,
        partition,
        mode,
        sort,
        direction,
        interval,
        ticks,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;
        let state = queries::load_state(&mut pool)?;

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

        let mut painted: u64 = 0;

        loop {
            if painted == 0 || selection.view != ViewFilter::History {
                let now = date::now();
                let model =
                    Pipeline::compute_view(state.events(), state.partitions(), &selection, now);

                // clear screen, repaint
                print!("\x1b[2J\x1b[H");
                print!(
                    "{}",
                    render::render_view(&model, &selection, state.partitions(), cfg, now, false)
                );
                println!("\n(refreshed {} | Ctrl-C to quit)", now.format("%H:%M:%S"));
            }

            painted += 1;
            if *ticks != 0 && painted >= *ticks {
                break;
            }

            thread::sleep(Duration::from_secs(*interval));
        }
    }

    Ok(())
}
