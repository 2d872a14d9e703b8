//! Ordered record lists persisted under a single storage key.
//!
//! Every feature module keeps its records in a [`Collection`]: add a
//! validated draft, replace one record by id, remove one record by id. Misses
//! and rejected drafts are no-ops and leave storage untouched.

use super::id;
use super::storage::{Storage, StorageCell, StorageKey};
use serde::de::DeserializeOwned;
use serde::Serialize;

pub trait Record: Serialize + DeserializeOwned + Clone {
    fn id(&self) -> u64;
}

/// Unvalidated input for a new record.
pub trait Draft {
    type Record: Record;

    /// Builds the record under `id`, or `None` when a required field is missing.
    fn into_record(self, id: u64) -> Option<Self::Record>;
}

/// Where new records go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Front,
    Back,
}

pub struct Collection<T> {
    cell: StorageCell<Vec<T>>,
    placement: Placement,
}

impl<T: Record> Collection<T> {
    pub fn open(storage: &Storage, key: StorageKey, placement: Placement) -> Self {
        Self {
            cell: storage.cell(key, Vec::new()),
            placement,
        }
    }

    pub fn items(&self) -> &[T] {
        self.cell.get()
    }

    pub fn len(&self) -> usize {
        self.items().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }

    pub fn get(&self, id: u64) -> Option<&T> {
        self.items().iter().find(|record| record.id() == id)
    }

    fn position(&self, id: u64) -> Option<usize> {
        self.items().iter().position(|record| record.id() == id)
    }

    fn max_id(&self) -> u64 {
        self.items().iter().map(Record::id).max().unwrap_or(0)
    }

    /// Validates `draft`, assigns a fresh id and stores the record.
    pub fn add<D>(&mut self, draft: D) -> Option<T>
    where
        D: Draft<Record = T>,
    {
        let record = draft.into_record(id::next_id_after(self.max_id()))?;
        let added = record.clone();
        let placement = self.placement;

        self.cell.update(move |items| {
            let mut next = Vec::with_capacity(items.len() + 1);
            match placement {
                Placement::Front => {
                    next.push(record);
                    next.extend(items.iter().cloned());
                }
                Placement::Back => {
                    next.extend(items.iter().cloned());
                    next.push(record);
                }
            }
            next
        });
        Some(added)
    }

    /// Replaces the record with `id` by `f(record)`; returns `false` when no record matches.
    pub fn update<F>(&mut self, id: u64, f: F) -> bool
    where
        F: FnOnce(&T) -> T,
    {
        let Some(pos) = self.position(id) else {
            return false;
        };
        let replacement = f(&self.items()[pos]);

        self.cell.update(move |items| {
            let mut next = items.clone();
            next[pos] = replacement;
            next
        });
        true
    }

    /// Removes the record with `id`; returns `false` when no record matches.
    pub fn delete(&mut self, id: u64) -> bool {
        if self.position(id).is_none() {
            return false;
        }

        self.cell.update(|items| items.iter().filter(|record| record.id() != id).cloned().collect());
        true
    }
}
