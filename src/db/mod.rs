//! SQLite persistence.
//!
//! The database holds a single `kv` table of JSON documents, one per storage
//! key. [`db::Db`] opens the file and applies pending [`migrations`];
//! [`kv::SqliteBackend`] adapts the table to the storage layer.

/// Connection setup.
pub mod db;

/// Key-value table access.
pub mod kv;

/// Versioned schema changes.
pub mod migrations;
