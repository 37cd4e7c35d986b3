//! SQLite-backed key-value storage.
//!
//! # Responsibility
//! - Persist blob values in the `kv` table owned by migrations.
//!
//! # Invariants
//! - One row per key; `save` is an upsert.

use super::{StorageBackend, StorageResult};
use rusqlite::{params, Connection, OptionalExtension};

/// Production storage backed by the migrated `kv` table.
pub struct SqliteKvStorage {
    conn: Connection,
}

impl SqliteKvStorage {
    /// Wraps an already-bootstrapped connection (see [`crate::db::open_db`]).
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }
}

impl StorageBackend for SqliteKvStorage {
    fn load(&self, key: &str) -> StorageResult<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1;", [key], |row| {
                row.get::<_, String>(0)
            })
            .optional()?;
        Ok(value)
    }

    fn save(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value;",
            params![key, value],
        )?;
        Ok(())
    }
}
