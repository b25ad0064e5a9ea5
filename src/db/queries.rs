//! Whole-collection load/save against the key-value store.
//!
//! Every mutation writes the entire updated collection back under its key
//! before the caller renders or exits; there is no incremental persistence.

use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::event::Event;
use crate::models::partition::Partition;
use crate::models::state::State;
use crate::ui::messages::warning;
use rusqlite::OptionalExtension;
use rusqlite::params;
use serde::Serialize;
use serde::de::DeserializeOwned;

pub const KEY_EVENTS: &str = "events";
pub const KEY_PARTITIONS: &str = "partitions";

/// Load both collections into a fresh state container.
pub fn load_state(pool: &mut DbPool) -> AppResult<State> {
    let events: Vec<Event> = load_collection(pool, KEY_EVENTS)?;
    let partitions: Vec<Partition> = load_collection(pool, KEY_PARTITIONS)?;
    Ok(State::new(events, partitions))
}

pub fn save_events(pool: &mut DbPool, events: &[Event]) -> AppResult<()> {
    save_collection(pool, KEY_EVENTS, events)
}

pub fn save_partitions(pool: &mut DbPool, partitions: &[Partition]) -> AppResult<()> {
    save_collection(pool, KEY_PARTITIONS, partitions)
}

/// Read one collection. A missing key yields an empty collection; a malformed
/// value is recovered locally: warn, leave a `load_error` log row, and start
/// from empty. Never propagated to the caller.
fn load_collection<T: DeserializeOwned>(pool: &mut DbPool, key: &str) -> AppResult<Vec<T>> {
    let raw: Option<String> = pool
        .conn
        .query_row("SELECT value FROM store WHERE key = ?1", [key], |row| {
            row.get(0)
        })
        .optional()?;

    let Some(raw) = raw else {
        return Ok(Vec::new());
    };

    match serde_json::from_str(&raw) {
        Ok(items) => Ok(items),
        Err(e) => {
            warning(format!(
                "Stored '{}' collection is malformed ({}); starting from an empty collection.",
                key, e
            ));
            let _ = ttlog(
                &pool.conn,
                "load_error",
                key,
                &format!("Malformed stored value: {}", e),
            );
            Ok(Vec::new())
        }
    }
}

fn save_collection<T: Serialize>(pool: &mut DbPool, key: &str, items: &[T]) -> AppResult<()> {
    let json = serde_json::to_string(items)?;

    pool.conn.execute(
        "INSERT INTO store (key, value) VALUES (?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        params![key, json],
    )?;

    Ok(())
}

/// Rows from the internal log table, oldest first.
pub fn load_log(pool: &mut DbPool) -> AppResult<Vec<(i64, String, String, String, String)>> {
    let mut stmt = pool
        .conn
        .prepare("SELECT id, date, operation, target, message FROM log ORDER BY id ASC")?;

    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, i64>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, String>(2)?,
            row.get::<_, String>(3)?,
            row.get::<_, String>(4)?,
        ))
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }

    Ok(out)
}
