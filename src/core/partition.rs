use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::partition::{DEFAULT_COLOR, Partition};
use crate::models::state::State;
use crate::utils::colors::is_valid_color;
use chrono::{DateTime, Local};

pub struct PartitionLogic;

impl PartitionLogic {
    pub fn add(
        pool: &mut DbPool,
        state: &mut State,
        name: &str,
        color: Option<String>,
        now: DateTime<Local>,
    ) -> AppResult<Partition> {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::Validation(
                "partition name must not be empty".to_string(),
            ));
        }

        let color = color.unwrap_or_else(|| DEFAULT_COLOR.to_string());
        if !is_valid_color(&color) {
            return Err(AppError::InvalidColor(color));
        }

        let id = state.next_partition_id(now.timestamp_millis());
        let partition = Partition::new(id, name, color, now);

        state.push_partition(partition.clone());
        queries::save_partitions(pool, state.partitions())?;

        ttlog(
            &pool.conn,
            "partition_add",
            &id.to_string(),
            &format!("Created partition '{}'", partition.name),
        )?;

        Ok(partition)
    }

    pub fn rename(
        pool: &mut DbPool,
        state: &mut State,
        id: i64,
        name: &str,
    ) -> AppResult<Partition> {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::Validation(
                "partition name must not be empty".to_string(),
            ));
        }

        let Some(partition) = state.partition_mut(id) else {
            return Err(AppError::PartitionNotFound(id));
        };

        partition.name = name;
        let updated = partition.clone();

        queries::save_partitions(pool, state.partitions())?;

        ttlog(
            &pool.conn,
            "partition_edit",
            &id.to_string(),
            &format!("Renamed partition to '{}'", updated.name),
        )?;

        Ok(updated)
    }

    pub fn recolor(
        pool: &mut DbPool,
        state: &mut State,
        id: i64,
        color: &str,
    ) -> AppResult<Partition> {
        if !is_valid_color(color) {
            return Err(AppError::InvalidColor(color.to_string()));
        }

        let Some(partition) = state.partition_mut(id) else {
            return Err(AppError::PartitionNotFound(id));
        };

        partition.color = color.to_string();
        let updated = partition.clone();

        queries::save_partitions(pool, state.partitions())?;

        ttlog(
            &pool.conn,
            "partition_edit",
            &id.to_string(),
            &format!("Recolored partition '{}' to {}", updated.name, color),
        )?;

        Ok(updated)
    }

    /// Delete a partition. Every event pointing at it is reassigned to
    /// "unclassified" first, and both collections are persisted in the same
    /// operation, so no event ever references the deleted id.
    pub fn delete(pool: &mut DbPool, state: &mut State, id: i64) -> AppResult<(Partition, usize)> {
        let (removed, reassigned) = state.remove_partition(id)?;

        queries::save_events(pool, state.events())?;
        queries::save_partitions(pool, state.partitions())?;

        ttlog(
            &pool.conn,
            "partition_del",
            &id.to_string(),
            &format!(
                "Deleted partition '{}' ({} events moved to unclassified)",
                removed.name, reassigned
            ),
        )?;

        Ok((removed, reassigned))
    }
}
