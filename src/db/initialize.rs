use crate::errors::AppResult;
use rusqlite::Connection;

/// Initialize the store schema.
///
/// The store is a plain key-value table: each collection lives under a single
/// key as one JSON document, written back whole on every mutation. Idempotent;
/// there is no migration engine.
pub fn init_store(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS store (
            key   TEXT PRIMARY KEY,
            value TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );

        INSERT OR IGNORE INTO store (key, value) VALUES ('events', '[]');
        INSERT OR IGNORE INTO store (key, value) VALUES ('partitions', '[]');
        "#,
    )?;
    Ok(())
}
