//! Typed, persisted state slots.
//!
//! [`Storage`] is a small repository over a key-value backend: values are
//! serialized to JSON and written under a [`StorageKey`], and every
//! successful write is announced on the [`ChangeBus`]. [`StorageCell`] keeps
//! one such value in memory and mirrors each change into storage.
//!
//! Reads never fail. A missing or unparsable slot yields the caller's
//! default and the problem is logged. Writes commit the in-memory value
//! first, then persist, then notify; when persisting fails the in-memory
//! value is kept, nothing is published and the write reports
//! [`Persisted::No`].
//!
//! ```rust,no_run
//! use universe::libs::storage::{Storage, StorageKey};
//!
//! let storage = Storage::open()?;
//! let mut weighted = storage.cell(StorageKey::GPA_WEIGHTED, true);
//! weighted.set(false);
//! assert!(!storage.get(&StorageKey::GPA_WEIGHTED, true));
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::bus::ChangeBus;
use super::data_storage::DataStorage;
use crate::db::db::Db;
use crate::db::kv::SqliteBackend;
use crate::libs::messages::Message;
use crate::{msg_debug, msg_warning};
use parking_lot::Mutex;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("storage quota exceeded: {needed} bytes needed, {limit} available")]
    QuotaExceeded { needed: usize, limit: usize },
}

/// Name of one persisted slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StorageKey(Cow<'static, str>);

impl StorageKey {
    pub const TODOS: StorageKey = StorageKey(Cow::Borrowed("todos"));
    pub const SCHEDULE_EVENTS: StorageKey = StorageKey(Cow::Borrowed("schedule-events"));
    pub const TRANSACTIONS: StorageKey = StorageKey(Cow::Borrowed("money-transactions"));
    pub const HABITS: StorageKey = StorageKey(Cow::Borrowed("habits"));
    pub const JOB_APPLICATIONS: StorageKey = StorageKey(Cow::Borrowed("job-applications"));
    pub const LISTINGS: StorageKey = StorageKey(Cow::Borrowed("marketplace-listings"));
    pub const GPA_COURSES: StorageKey = StorageKey(Cow::Borrowed("gpa-courses"));
    pub const GPA_WEIGHTED: StorageKey = StorageKey(Cow::Borrowed("gpa-weighted"));

    pub fn new(name: impl Into<String>) -> Self {
        StorageKey(Cow::Owned(name.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Raw string slots. Implementations only move bytes; JSON handling lives in [`Storage`].
pub trait KvBackend: Send {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// In-process backend, optionally limited to a total number of value bytes.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    slots: HashMap<String, String>,
    quota: Option<usize>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quota(bytes: usize) -> Self {
        Self {
            slots: HashMap::new(),
            quota: Some(bytes),
        }
    }

    fn used_without(&self, key: &str) -> usize {
        self.slots.iter().filter(|(k, _)| k.as_str() != key).map(|(_, v)| v.len()).sum()
    }
}

impl KvBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if let Some(limit) = self.quota {
            let needed = self.used_without(key) + value.len();
            if needed > limit {
                return Err(StorageError::QuotaExceeded { needed, limit });
            }
        }
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.slots.remove(key);
        Ok(())
    }
}

/// Whether a write reached the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Persisted {
    Yes,
    /// The in-memory value changed but will not survive a restart.
    No,
}

/// Shared handle to a backend plus the bus that announces its writes.
#[derive(Clone)]
pub struct Storage {
    backend: Arc<Mutex<Box<dyn KvBackend>>>,
    bus: ChangeBus,
}

impl Storage {
    pub fn new(backend: impl KvBackend + 'static) -> Self {
        Self {
            backend: Arc::new(Mutex::new(Box::new(backend))),
            bus: ChangeBus::new(),
        }
    }

    /// Opens the SQLite store in the platform data directory.
    pub fn open() -> anyhow::Result<Self> {
        Self::open_in(&DataStorage::new())
    }

    pub fn open_in(data_storage: &DataStorage) -> anyhow::Result<Self> {
        let db = Db::in_storage(data_storage)?;
        Ok(Self::new(SqliteBackend::new(db)))
    }

    pub fn in_memory() -> Self {
        Self::new(MemoryBackend::new())
    }

    pub fn bus(&self) -> &ChangeBus {
        &self.bus
    }

    /// Raw JSON stored under `key`; backend errors are logged and read as absence.
    pub fn read_raw(&self, key: &StorageKey) -> Option<String> {
        match self.backend.lock().get(key.as_str()) {
            Ok(value) => value,
            Err(e) => {
                msg_warning!(Message::StorageReadFailed(key.to_string(), e.to_string()));
                None
            }
        }
    }

    /// Parsed value under `key`, or `None` when absent or malformed.
    pub fn try_get<T: DeserializeOwned>(&self, key: &StorageKey) -> Option<T> {
        let raw = self.read_raw(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                msg_warning!(Message::StorageParseFailed(key.to_string(), e.to_string()));
                None
            }
        }
    }

    pub fn get<T: DeserializeOwned>(&self, key: &StorageKey, default: T) -> T {
        self.try_get(key).unwrap_or(default)
    }

    /// Serializes `value` under `key` and announces the change.
    pub fn set<T: Serialize + ?Sized>(&self, key: &StorageKey, value: &T) -> Persisted {
        let written = serde_json::to_string(value)
            .map_err(StorageError::from)
            .and_then(|json| self.backend.lock().set(key.as_str(), &json));

        match written {
            Ok(()) => {
                let listeners = self.bus.publish(key);
                msg_debug!(format!("wrote '{}', notified {} listener(s)", key, listeners));
                Persisted::Yes
            }
            Err(e) => {
                msg_warning!(Message::StorageWriteFailed(key.to_string(), e.to_string()));
                Persisted::No
            }
        }
    }

    /// Clears `key` and announces the change.
    pub fn remove(&self, key: &StorageKey) -> Persisted {
        let removed = self.backend.lock().remove(key.as_str());
        match removed {
            Ok(()) => {
                self.bus.publish(key);
                Persisted::Yes
            }
            Err(e) => {
                msg_warning!(Message::StorageWriteFailed(key.to_string(), e.to_string()));
                Persisted::No
            }
        }
    }

    pub fn cell<T>(&self, key: StorageKey, default: T) -> StorageCell<T>
    where
        T: Serialize + DeserializeOwned,
    {
        StorageCell::init(self, key, default)
    }
}

/// One value kept in memory and mirrored into [`Storage`] on every write.
pub struct StorageCell<T> {
    key: StorageKey,
    value: T,
    storage: Storage,
}

impl<T> StorageCell<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Loads the value stored under `key`, falling back to `default`.
    pub fn init(storage: &Storage, key: StorageKey, default: T) -> Self {
        let value = storage.get(&key, default);
        Self {
            key,
            value,
            storage: storage.clone(),
        }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    /// Replaces the value.
    pub fn set(&mut self, value: T) -> Persisted {
        self.value = value;
        self.storage.set(&self.key, &self.value)
    }

    /// Replaces the value with `f(previous)`.
    pub fn update<F>(&mut self, f: F) -> Persisted
    where
        F: FnOnce(&T) -> T,
    {
        let next = f(&self.value);
        self.set(next)
    }
}
