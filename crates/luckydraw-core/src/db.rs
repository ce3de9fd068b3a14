// SQLite-backed key-value store for draw state and the session slot.

use std::sync::{Mutex, MutexGuard};

use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};

use crate::store::KeyValueStore;

/// SQLite persistence for the draw record and the session token.
///
/// Several processes may open the same file; each one is a separate session
/// and they all read and overwrite the same rows.
pub struct Database {
    conn: Mutex<Connection>,
}

impl Database {
    /// Open (or create) a SQLite database at `path` and ensure the schema
    /// exists. Pass `":memory:"` for an ephemeral in-memory database (useful
    /// for tests).
    pub fn open(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .with_context(|| format!("failed to open database at {path}"))?;

        // WAL lets a second session read while the first one writes.
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA busy_timeout = 5000;",
        )
        .context("failed to set database pragmas")?;

        conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS draw_store (
                key        TEXT PRIMARY KEY,
                value      TEXT NOT NULL,
                updated_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
            );
            ",
        )
        .context("failed to create database schema")?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Acquire the database connection.
    ///
    /// Panics if the mutex is poisoned (another thread panicked while
    /// holding the lock). This should never happen in normal operation.
    fn conn(&self) -> MutexGuard<'_, Connection> {
        self.conn.lock().expect("database mutex poisoned")
    }
}

impl KeyValueStore for Database {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let conn = self.conn();
        conn.query_row(
            "SELECT value FROM draw_store WHERE key = ?1",
            params![key],
            |row| row.get(0),
        )
        .optional()
        .with_context(|| format!("failed to read key {key}"))
    }

    /// Uses INSERT OR REPLACE so repeated saves overwrite the previous value.
    fn set(&self, key: &str, value: &str) -> Result<()> {
        let conn = self.conn();
        conn.execute(
            "INSERT OR REPLACE INTO draw_store (key, value) VALUES (?1, ?2)",
            params![key, value],
        )
        .with_context(|| format!("failed to write key {key}"))?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let conn = self.conn();
        conn.execute("DELETE FROM draw_store WHERE key = ?1", params![key])
            .with_context(|| format!("failed to delete key {key}"))?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
