//! SQLite-backed key-value slots.
//!
//! Every storage key maps to one row of the `kv` table holding the JSON
//! document written under it. This is the durable backend behind
//! [`Storage`](crate::libs::storage::Storage).

use super::db::Db;
use crate::libs::storage::{KvBackend, StorageError};
use rusqlite::{params, Connection, OptionalExtension};

const SELECT_VALUE: &str = "SELECT value FROM kv WHERE key = ?1";
const UPSERT_VALUE: &str = "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, datetime(CURRENT_TIMESTAMP, 'localtime'))
    ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at";
const DELETE_VALUE: &str = "DELETE FROM kv WHERE key = ?1";
const SELECT_KEYS: &str = "SELECT key FROM kv ORDER BY key";

pub struct SqliteBackend {
    conn: Connection,
}

impl SqliteBackend {
    pub fn new(db: Db) -> Self {
        Self { conn: db.conn }
    }

    /// Lists every key that currently holds a value.
    pub fn keys(&self) -> Result<Vec<String>, StorageError> {
        let mut stmt = self.conn.prepare(SELECT_KEYS)?;
        let keys = stmt.query_map([], |row| row.get(0))?.collect::<Result<Vec<String>, _>>()?;
        Ok(keys)
    }
}

impl KvBackend for SqliteBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let value = self.conn.query_row(SELECT_VALUE, params![key], |row| row.get(0)).optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.conn.execute(UPSERT_VALUE, params![key, value])?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.conn.execute(DELETE_VALUE, params![key])?;
        Ok(())
    }
}
